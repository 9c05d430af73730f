use std::fmt;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use watchranks_shared::{BingeStats, PrestigeResponse, RankDefinition, RankSnapshot, XpConfig};

use crate::config::OverlayConfig;
use crate::state;

/// One failure kind for every backend call. Always handled at the call
/// site that issued the request; never propagated past the component.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport-level failure (backend down, CORS, DNS).
    Network(String),
    /// Backend answered with a non-success status.
    Status(u16),
    /// Body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "backend unreachable: {e}"),
            ApiError::Status(code) => write!(f, "HTTP {code}"),
            ApiError::Decode(e) => write!(f, "unexpected response: {e}"),
        }
    }
}

/// Thin authenticated client for the rank backend. Cheap to clone; every
/// request carries the `X-User-Id` header.
#[derive(Debug, Clone)]
pub struct Api {
    base: String,
    user_id: String,
}

impl Api {
    /// Bind the configured base address to the current identity. The
    /// identity header is sent even when empty; the backend rejects it
    /// with a 400 we surface like any other status error.
    pub fn new(config: &OverlayConfig) -> Self {
        Self {
            base: config.api_base.trim_end_matches('/').to_string(),
            user_id: state::user_id().unwrap_or_default(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = Request::get(&format!("{}{path}", self.base))
            .header("X-User-Id", &self.user_id)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }

        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn fetch_me(&self) -> Result<RankSnapshot, ApiError> {
        self.get_json("/WatchRanks/Me").await
    }

    pub async fn fetch_binge_stats(&self) -> Result<BingeStats, ApiError> {
        self.get_json(&format!("/WatchRanks/BingeStats/{}", self.user_id))
            .await
    }

    pub async fn fetch_leaderboard(&self) -> Result<Vec<RankSnapshot>, ApiError> {
        self.get_json("/WatchRanks/Leaderboard").await
    }

    pub async fn fetch_ranks(&self) -> Result<Vec<RankDefinition>, ApiError> {
        self.get_json("/WatchRanks/Ranks").await
    }

    pub async fn fetch_config(&self) -> Result<XpConfig, ApiError> {
        self.get_json("/WatchRanks/Config").await
    }

    /// One write carrying the full record. Needs the elevated-privilege
    /// marker on top of the identity header.
    pub async fn save_config(&self, config: &XpConfig) -> Result<(), ApiError> {
        let resp = Request::post(&format!("{}/WatchRanks/Config", self.base))
            .header("X-User-Id", &self.user_id)
            .header("X-Admin", "true")
            .json(config)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }

    pub async fn prestige(&self) -> Result<PrestigeResponse, ApiError> {
        let resp = Request::post(&format!("{}/WatchRanks/Prestige", self.base))
            .header("X-User-Id", &self.user_id)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }

        resp.json::<PrestigeResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn errors_display_for_inline_messages() {
        assert_eq!(ApiError::Status(503).to_string(), "HTTP 503");
        assert!(
            ApiError::Network("fetch failed".into())
                .to_string()
                .contains("unreachable")
        );
    }
}

use serde::{Deserialize, Serialize};

/// Rank at the top of the progression; prestige is only offered here.
pub const TERMINAL_RANK: &str = "Demon King";

/// Per-user rank state as computed by the backend.
///
/// The backend returns the same DTO from `/WatchRanks/Me` and as each
/// element of `/WatchRanks/Leaderboard`, so one type serves both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankSnapshot {
    pub user_id: String,
    pub username: String,
    pub total_xp: i64,
    pub rank_name: String,
    pub rank_icon: String,
    pub xp_to_next: i64,
    /// Progress through the current rank, already clamped to 0–100 by the
    /// backend. Clients render it, they do not recompute it.
    pub progress_percent: f64,
    pub prestige_count: u32,
    pub leaderboard_position: u32,
}

/// Binge-watching statistics from `/WatchRanks/BingeStats/{userId}`.
/// Optional everywhere it is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BingeStats {
    pub user_id: String,
    pub binge_days_total: i64,
    pub total_binge_xp: i64,
    pub binge_threshold_hours: f64,
    pub binge_xp_bonus_per_day: i64,
}

/// One entry of the static rank catalog (`/WatchRanks/Ranks`), ascending
/// by `xp_required`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankDefinition {
    pub name: String,
    pub icon: String,
    pub xp_required: i64,
}

/// Tunable XP parameters (`/WatchRanks/Config`). `completion_threshold`
/// is a 0–1 fraction on the wire; the settings editor shows it as a
/// percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct XpConfig {
    pub xp_per_minute: u32,
    pub xp_per_episode: u32,
    pub xp_per_movie: u32,
    pub completion_threshold: f64,
    pub episode_min_watch_seconds: u32,
    pub movie_min_watch_seconds: u32,
    pub binge_enabled: bool,
    pub binge_threshold_hours: f64,
    pub binge_xp_bonus: u32,
    pub binge_gap_tolerance_seconds: u32,
}

impl Default for XpConfig {
    fn default() -> Self {
        Self {
            xp_per_minute: 2,
            xp_per_episode: 20,
            xp_per_movie: 20,
            completion_threshold: 0.80,
            episode_min_watch_seconds: 900,
            movie_min_watch_seconds: 2700,
            binge_enabled: true,
            binge_threshold_hours: 3.0,
            binge_xp_bonus: 500,
            binge_gap_tolerance_seconds: 600,
        }
    }
}

/// Human-readable confirmation from `POST /WatchRanks/Prestige`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrestigeResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::{RankSnapshot, XpConfig};

    #[test]
    fn rank_snapshot_parses_backend_payload() {
        let json = r#"{
            "userId": "abc-123",
            "username": "zer0",
            "totalXp": 152400,
            "rankName": "Gold",
            "rankIcon": "🥇",
            "xpToNext": 197600,
            "progressPercent": 1.2,
            "prestigeCount": 2,
            "leaderboardPosition": 4
        }"#;

        let snap: RankSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.rank_name, "Gold");
        assert_eq!(snap.total_xp, 152_400);
        assert_eq!(snap.prestige_count, 2);
        assert_eq!(snap.leaderboard_position, 4);
    }

    #[test]
    fn xp_config_defaults_match_backend() {
        let cfg = XpConfig::default();
        assert_eq!(cfg.xp_per_minute, 2);
        assert!((cfg.completion_threshold - 0.80).abs() < 1e-12);
        assert_eq!(cfg.episode_min_watch_seconds, 900);
        assert!(cfg.binge_enabled);
        assert_eq!(cfg.binge_gap_tolerance_seconds, 600);
    }

    #[test]
    fn xp_config_fills_missing_fields_with_defaults() {
        let cfg: XpConfig = serde_json::from_str(r#"{"xpPerMinute": 5}"#).unwrap();
        assert_eq!(cfg.xp_per_minute, 5);
        assert_eq!(cfg.xp_per_episode, 20);
        assert_eq!(cfg.binge_xp_bonus, 500);
    }

    #[test]
    fn xp_config_serializes_camel_case() {
        let json = serde_json::to_value(XpConfig::default()).unwrap();
        assert!(json.get("completionThreshold").is_some());
        assert!(json.get("bingeGapToleranceSeconds").is_some());
        assert!(json.get("completion_threshold").is_none());
    }
}

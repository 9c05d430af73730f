use js_sys::Reflect;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Name of the optional global the admin can define before the bundle
/// loads, e.g. `window.WatchRanksConfig = { apiBase: "https://..." }`.
const CONFIG_GLOBAL: &str = "WatchRanksConfig";

/// Deploy-time configuration. Not editable from the dashboard; the XP
/// settings panel edits backend state, not this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlayConfig {
    /// Base URL of the rank backend.
    pub api_base: String,
    /// Background rank refresh cadence in milliseconds.
    pub refresh_interval_ms: u32,
    /// Inject the rank badge into the host's top header.
    pub show_nav_badge: bool,
    /// Show the rank-up popup with particles on a detected transition.
    pub show_rankup_celebration: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8765".to_string(),
            refresh_interval_ms: 300_000,
            show_nav_badge: true,
            show_rankup_celebration: true,
        }
    }
}

impl OverlayConfig {
    /// Read the config object off `window`, falling back to defaults when
    /// it is absent or malformed. Malformed config is logged and ignored
    /// rather than blocking startup.
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let Ok(raw) = Reflect::get(window.as_ref(), &JsValue::from_str(CONFIG_GLOBAL)) else {
            return Self::default();
        };
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value(raw) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("[WatchRanks] Ignoring malformed {CONFIG_GLOBAL}: {e}").into(),
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OverlayConfig;

    #[test]
    fn defaults_point_at_local_backend() {
        let cfg = OverlayConfig::default();
        assert_eq!(cfg.api_base, "http://localhost:8765");
        assert_eq!(cfg.refresh_interval_ms, 300_000);
        assert!(cfg.show_nav_badge);
        assert!(cfg.show_rankup_celebration);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let cfg: OverlayConfig =
            serde_json::from_str(r#"{"apiBase": "https://ranks.example", "showNavBadge": false}"#)
                .unwrap();
        assert_eq!(cfg.api_base, "https://ranks.example");
        assert!(!cfg.show_nav_badge);
        assert_eq!(cfg.refresh_interval_ms, 300_000);
        assert!(cfg.show_rankup_celebration);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let cfg: OverlayConfig =
            serde_json::from_str(r#"{"refreshIntervalMs": 60000, "legacyOption": 1}"#).unwrap();
        assert_eq!(cfg.refresh_interval_ms, 60_000);
    }
}

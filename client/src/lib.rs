mod api;
mod catalog_panel;
mod celebrate;
mod config;
mod format;
mod host;
mod inject;
mod leaderboard_panel;
mod overlay;
mod rank_panel;
mod ready;
mod settings_panel;
mod state;
mod styles;
mod sync;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::OverlayConfig;

/// Entry point for the injected bundle. Waits for the host web client to
/// be usable, then wires the overlay into the page. If the host never
/// becomes ready the overlay stays inert; it must not disturb the host.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    spawn_local(async {
        let config = OverlayConfig::load();

        if !ready::await_host_ready(ready::MAX_ATTEMPTS, ready::POLL_INTERVAL_MS).await {
            return;
        }

        state::init();
        styles::ensure_styles();
        inject::ensure_affordances(&config);
        inject::subscribe_navigation(config.clone());
        sync::start(config);
    });
}

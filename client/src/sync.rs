//! Background rank polling: one refresh at startup, then a fixed-interval
//! loop for the lifetime of the page. Failures are expected while the
//! backend restarts, so a failed cycle is skipped silently and the next
//! tick retries; nothing here may surface errors outside the dashboard.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;

use watchranks_shared::RankSnapshot;

use crate::api::Api;
use crate::config::OverlayConfig;
use crate::{celebrate, inject, state};

struct SyncIntervalBinding {
    window: web_sys::Window,
    interval_id: i32,
    _callback: Closure<dyn Fn()>,
}

thread_local! {
    static SYNC_INTERVAL_BINDING: RefCell<Option<SyncIntervalBinding>> = const { RefCell::new(None) };
}

/// Start the loop: refresh immediately, then every
/// `config.refresh_interval_ms`. Replaces any previous interval.
pub fn start(config: OverlayConfig) {
    refresh(&config);

    let Some(window) = web_sys::window() else {
        return;
    };

    SYNC_INTERVAL_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            old.window.clear_interval_with_handle(old.interval_id);
        }
    });

    let callback = Closure::<dyn Fn()>::new({
        let config = config.clone();
        move || refresh(&config)
    });
    let Ok(interval_id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        config.refresh_interval_ms as i32,
    ) else {
        return;
    };
    SYNC_INTERVAL_BINDING.with(|slot| {
        *slot.borrow_mut() = Some(SyncIntervalBinding {
            window: window.clone(),
            interval_id,
            _callback: callback,
        });
    });
}

/// One polling cycle. A failed fetch leaves the badges and the rank
/// baseline exactly as they were.
fn refresh(config: &OverlayConfig) {
    let config = config.clone();
    spawn_local(async move {
        let api = Api::new(&config);
        if let Ok(snapshot) = api.fetch_me().await {
            apply_snapshot(&snapshot, config.show_rankup_celebration);
        }
    });
}

/// Fold a successfully fetched snapshot into the page: mini badges, the
/// state store, and (on a detected transition) the celebration. Shared
/// with the rank panel's loader; both paths race last-write-wins, and
/// `record_snapshot` guarantees a given rank celebrates at most once.
pub fn apply_snapshot(snapshot: &RankSnapshot, celebration_enabled: bool) {
    inject::update_mini_badges(snapshot);
    if let Some(new_rank) = state::record_snapshot(snapshot)
        && celebration_enabled
    {
        celebrate::show(&new_rank, &snapshot.rank_icon);
    }
}

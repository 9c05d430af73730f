use gloo_timers::future::TimeoutFuture;

use crate::host;

/// 60 × 500 ms ≈ 30 s of patience for the host client to boot.
pub const MAX_ATTEMPTS: u32 = 60;
pub const POLL_INTERVAL_MS: u32 = 500;

/// Poll the host readiness predicate at a fixed interval, bounded by
/// `max_attempts`. Returns `true` as soon as the host is usable. On
/// exhaustion it logs once and returns `false`; the caller stays inert,
/// there is no open-ended retry.
pub async fn await_host_ready(max_attempts: u32, interval_ms: u32) -> bool {
    for attempt in 0..max_attempts {
        if host::is_ready() {
            return true;
        }
        if attempt + 1 < max_attempts {
            TimeoutFuture::new(interval_ms).await;
        }
    }
    web_sys::console::warn_1(&"[WatchRanks] Timed out waiting for the host ApiClient.".into());
    false
}

//! Client-side state for the page session: who the user is, the last rank
//! we have ever observed for them (durable), and the most recent backend
//! snapshots. One thread-local cell; these accessor functions are the only
//! read/write points.

use std::cell::RefCell;

use gloo_storage::{LocalStorage, Storage};

use watchranks_shared::{RankSnapshot, XpConfig};

use crate::host;

const LAST_RANK_KEY: &str = "watchranks_lastRank";
const USER_ID_KEY: &str = "watchranks_userId";

#[derive(Default)]
struct StateCell {
    user_id: Option<String>,
    last_rank: Option<String>,
    latest_snapshot: Option<RankSnapshot>,
    latest_config: Option<XpConfig>,
}

thread_local! {
    static STATE: RefCell<StateCell> = RefCell::new(StateCell::default());
}

/// True when the freshly fetched rank differs from the last one we knew.
/// A missing baseline (first run on this browser) is not a transition.
fn is_transition(last_known: Option<&str>, fetched: &str) -> bool {
    match last_known {
        Some(last) => last != fetched,
        None => false,
    }
}

/// Resolve identity and the persisted rank baseline. Called once per page
/// load, after the readiness gate.
pub fn init() {
    let user_id = match host::current_user_id() {
        Some(id) => {
            // Refresh the durable fallback so a later load can still
            // identify the user if the host accessor is unavailable.
            let _ = LocalStorage::set(USER_ID_KEY, &id);
            Some(id)
        }
        None => LocalStorage::get::<String>(USER_ID_KEY).ok(),
    };
    let last_rank = LocalStorage::get::<String>(LAST_RANK_KEY).ok();

    STATE.with(|cell| {
        let mut cell = cell.borrow_mut();
        cell.user_id = user_id;
        cell.last_rank = last_rank;
    });
}

pub fn user_id() -> Option<String> {
    STATE.with(|cell| cell.borrow().user_id.clone())
}

/// Record a successfully fetched snapshot. Updates the stored snapshot and
/// the durable rank baseline, and returns the new rank name when this
/// fetch revealed a transition. Only ever called on success, so a failed
/// cycle can never move the baseline. Both the background loop and the
/// rank panel call this; whichever response lands last wins, and a rank
/// already recorded here cannot produce a second transition.
pub fn record_snapshot(snapshot: &RankSnapshot) -> Option<String> {
    let transition = STATE.with(|cell| {
        let mut cell = cell.borrow_mut();
        let changed = is_transition(cell.last_rank.as_deref(), &snapshot.rank_name);
        cell.last_rank = Some(snapshot.rank_name.clone());
        cell.latest_snapshot = Some(snapshot.clone());
        changed
    });

    let _ = LocalStorage::set(LAST_RANK_KEY, &snapshot.rank_name);

    transition.then(|| snapshot.rank_name.clone())
}

pub fn latest_snapshot() -> Option<RankSnapshot> {
    STATE.with(|cell| cell.borrow().latest_snapshot.clone())
}

pub fn record_config(config: &XpConfig) {
    STATE.with(|cell| cell.borrow_mut().latest_config = Some(config.clone()));
}

pub fn latest_config() -> Option<XpConfig> {
    STATE.with(|cell| cell.borrow().latest_config.clone())
}

#[cfg(test)]
mod tests {
    use super::is_transition;

    #[test]
    fn different_rank_is_a_transition() {
        assert!(is_transition(Some("Gold"), "Platinum"));
    }

    #[test]
    fn same_rank_is_not_a_transition() {
        assert!(!is_transition(Some("Gold"), "Gold"));
    }

    #[test]
    fn missing_baseline_is_not_a_transition() {
        assert!(!is_transition(None, "Bronze"));
    }
}

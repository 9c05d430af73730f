//! Idempotent injection of the two persistent affordances (sidebar entry,
//! header badge) into host-owned containers. The host rebuilds its chrome
//! on internal navigation, so injection re-runs after every `viewshow`;
//! the element ids double as idempotency keys. Host elements are never
//! replaced or removed, only appended to.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element};

use watchranks_shared::{RankSnapshot, rank_color};

use crate::config::OverlayConfig;
use crate::{host, overlay, state};

const SIDEBAR_BTN_ID: &str = "watchranks-sidebar-btn";
const SIDEBAR_BADGE_ID: &str = "watchranks-sidebar-badge";
const NAV_BADGE_ID: &str = "watchranks-nav-badge";

/// Candidate containers, tried in order; the host ships several skins.
const SIDEBAR_CONTAINERS: [&str; 3] = [
    ".mainDrawer-scrollContainer",
    ".navMenuContainer",
    "[data-role=\"navigation\"]",
];
const HEADER_CONTAINERS: [&str; 3] = [
    ".headerRight",
    ".skinHeader-withBackground .flex",
    ".headerButtons",
];

/// Grace period after `viewshow` for the host to finish rebuilding its
/// DOM subtree before we try to insert into it.
const REINJECT_DELAY_MS: u32 = 300;

struct AffordanceBinding {
    _element: Element,
    _onclick: Closure<dyn Fn()>,
}

thread_local! {
    static SIDEBAR_BINDING: RefCell<Option<AffordanceBinding>> = const { RefCell::new(None) };
    static NAV_BADGE_BINDING: RefCell<Option<AffordanceBinding>> = const { RefCell::new(None) };
}

fn resolve_container(document: &Document, selectors: &[&str]) -> Option<Element> {
    selectors
        .iter()
        .find_map(|sel| document.query_selector(sel).ok().flatten())
}

/// Make sure both affordances exist. Safe to call any number of times:
/// an affordance that is still in the tree is left untouched, and when no
/// candidate container matches (unknown host skin) this is a silent no-op.
pub fn ensure_affordances(config: &OverlayConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    ensure_sidebar_entry(&document, config);
    if config.show_nav_badge {
        ensure_nav_badge(&document, config);
    }

    // A freshly rebuilt header starts with placeholder badges; seed them
    // from the last completed fetch instead of waiting for the next tick.
    if let Some(snapshot) = state::latest_snapshot() {
        update_mini_badges(&snapshot);
    }
}

fn ensure_sidebar_entry(document: &Document, config: &OverlayConfig) {
    if document.get_element_by_id(SIDEBAR_BTN_ID).is_some() {
        return;
    }
    let Some(container) = resolve_container(document, &SIDEBAR_CONTAINERS) else {
        return;
    };
    let Ok(button) = document.create_element("button") else {
        return;
    };
    button.set_id(SIDEBAR_BTN_ID);

    for (text, class) in [("⚔️", ""), ("Watch Ranks", ""), ("…", "wr-badge")] {
        let Ok(span) = document.create_element("span") else {
            return;
        };
        span.set_text_content(Some(text));
        if !class.is_empty() {
            span.set_class_name(class);
            span.set_id(SIDEBAR_BADGE_ID);
        }
        let _ = button.append_child(&span);
    }

    let onclick = open_dashboard_closure(config);
    let _ = button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref());
    if container.append_child(&button).is_ok() {
        SIDEBAR_BINDING.with(|slot| {
            *slot.borrow_mut() = Some(AffordanceBinding {
                _element: button,
                _onclick: onclick,
            });
        });
    }
}

fn ensure_nav_badge(document: &Document, config: &OverlayConfig) {
    if document.get_element_by_id(NAV_BADGE_ID).is_some() {
        return;
    }
    let Some(container) = resolve_container(document, &HEADER_CONTAINERS) else {
        return;
    };
    let Ok(badge) = document.create_element("span") else {
        return;
    };
    badge.set_id(NAV_BADGE_ID);
    badge.set_text_content(Some("⚔️ …"));
    let _ = badge.set_attribute("title", "Open the Watch Ranks dashboard");

    let onclick = open_dashboard_closure(config);
    let _ = badge.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref());
    if container
        .insert_before(&badge, container.first_child().as_ref())
        .is_ok()
    {
        NAV_BADGE_BINDING.with(|slot| {
            *slot.borrow_mut() = Some(AffordanceBinding {
                _element: badge,
                _onclick: onclick,
            });
        });
    }
}

fn open_dashboard_closure(config: &OverlayConfig) -> Closure<dyn Fn()> {
    let config = config.clone();
    Closure::<dyn Fn()>::new(move || {
        overlay::open_dashboard(config.clone());
    })
}

/// Refresh both mini badges from a fetched snapshot. Badges that are not
/// currently in the tree (navigation tore them down, or the header badge
/// is disabled) are skipped, not an error.
pub fn update_mini_badges(snapshot: &RankSnapshot) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let color = rank_color(&snapshot.rank_name);
    let text = format!("{} {}", snapshot.rank_icon, snapshot.rank_name);

    if let Some(badge) = document.get_element_by_id(NAV_BADGE_ID) {
        badge.set_text_content(Some(&text));
        if let Some(el) = badge.dyn_ref::<web_sys::HtmlElement>() {
            let style = el.style();
            let _ = style.set_property("color", color);
            let _ = style.set_property("border-color", color);
            let _ = style.set_property("background", &format!("{color}20"));
        }
    }
    if let Some(badge) = document.get_element_by_id(SIDEBAR_BADGE_ID) {
        badge.set_text_content(Some(&text));
    }
}

/// Subscribe to the host's navigation signal; each `viewshow` schedules
/// one delayed `ensure_affordances` pass.
pub fn subscribe_navigation(config: OverlayConfig) {
    host::on_view_show(move || {
        let config = config.clone();
        Timeout::new(REINJECT_DELAY_MS, move || {
            ensure_affordances(&config);
        })
        .forget();
    });
}

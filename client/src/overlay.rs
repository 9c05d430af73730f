//! The dashboard modal: open/close lifecycle, tab switching, and the
//! shared per-panel load state. The modal is a Leptos tree mounted into a
//! root we append to `<body>`; closing drops the mount handle and removes
//! the root, and the Escape binding lives exactly as long as the overlay.

use std::any::Any;
use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::catalog_panel::CatalogPanel;
use crate::config::OverlayConfig;
use crate::leaderboard_panel::LeaderboardPanel;
use crate::rank_panel::RankPanel;
use crate::settings_panel::SettingsPanel;

const OVERLAY_ID: &str = "watchranks-overlay";
const BACKDROP_ID: &str = "watchranks-backdrop";

/// Load state shared by all four panels. Each panel fetches lazily on
/// first activation and keeps its result for the rest of the overlay
/// session; a failure stays inside the panel that owns it.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashTab {
    Rank,
    Leaderboard,
    Catalog,
    Settings,
}

struct EscapeBinding {
    window: web_sys::Window,
    _handler: Closure<dyn Fn(web_sys::KeyboardEvent)>,
}

thread_local! {
    static MOUNT_HANDLE: RefCell<Option<Box<dyn Any>>> = const { RefCell::new(None) };
    static ESCAPE_BINDING: RefCell<Option<EscapeBinding>> = const { RefCell::new(None) };
}

/// Open the dashboard. No-op while one is already open (single instance,
/// keyed by element id).
pub fn open_dashboard(config: OverlayConfig) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if document.get_element_by_id(OVERLAY_ID).is_some() {
        return;
    }
    let Some(body) = document.body() else {
        return;
    };

    let Ok(root) = document.create_element("div") else {
        return;
    };
    root.set_id(OVERLAY_ID);
    if body.append_child(&root).is_err() {
        return;
    }
    let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    let handle = mount_to(root, move || view! { <Dashboard config=config.clone() /> });
    MOUNT_HANDLE.with(|slot| {
        *slot.borrow_mut() = Some(Box::new(handle));
    });

    // Escape closes the dashboard; registered for the overlay lifetime
    // only so repeated open/close cycles cannot pile up listeners.
    ESCAPE_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old.window.remove_event_listener_with_callback(
                "keydown",
                old._handler.as_ref().unchecked_ref(),
            );
        }
    });
    let handler =
        Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
            if e.key() == "Escape" {
                close_dashboard();
            }
        });
    if window
        .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        ESCAPE_BINDING.with(|slot| {
            *slot.borrow_mut() = Some(EscapeBinding {
                window: window.clone(),
                _handler: handler,
            });
        });
    }
}

/// Close the dashboard: unregister the Escape binding, remove the overlay
/// element, and dispose the Leptos tree. Disposal is deferred one timer
/// turn because close is usually triggered from inside one of the tree's
/// own event handlers.
pub fn close_dashboard() {
    ESCAPE_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old.window.remove_event_listener_with_callback(
                "keydown",
                old._handler.as_ref().unchecked_ref(),
            );
        }
    });

    if let Some(document) = web_sys::window().and_then(|w| w.document())
        && let Some(root) = document.get_element_by_id(OVERLAY_ID)
    {
        root.remove();
    }

    Timeout::new(0, || {
        MOUNT_HANDLE.with(|slot| {
            let _ = slot.borrow_mut().take();
        });
    })
    .forget();
}

#[component]
fn Dashboard(config: OverlayConfig) -> impl IntoView {
    let tab = RwSignal::new(DashTab::Rank);

    let on_backdrop = move |e: leptos::ev::MouseEvent| {
        let clicked_backdrop = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|el| el.id() == BACKDROP_ID);
        if clicked_backdrop {
            close_dashboard();
        }
    };

    let active_rank = Memo::new(move |_| tab.get() == DashTab::Rank);
    let active_leaderboard = Memo::new(move |_| tab.get() == DashTab::Leaderboard);
    let active_catalog = Memo::new(move |_| tab.get() == DashTab::Catalog);
    let active_settings = Memo::new(move |_| tab.get() == DashTab::Settings);

    let show_celebration = config.show_rankup_celebration;

    view! {
        <div id=BACKDROP_ID on:click=on_backdrop>
            <div class="wr-modal">
                <div class="wr-header">
                    <span style="font-size: 1.6rem">"⚔️"</span>
                    <div>
                        <h2>"Watch Ranks"</h2>
                        <div class="wr-header-sub">"Watch History · RPG Experience"</div>
                    </div>
                    <button class="wr-close-btn" on:click=move |_| close_dashboard()>
                        "✕"
                    </button>
                </div>
                <div class="wr-tabs">
                    <TabButton tab=tab target=DashTab::Rank label="My Rank" />
                    <TabButton tab=tab target=DashTab::Leaderboard label="🏆 Leaderboard" />
                    <TabButton tab=tab target=DashTab::Catalog label="📋 All Ranks" />
                    <TabButton tab=tab target=DashTab::Settings label="🔥 XP Settings" />
                </div>
                <div class="wr-body">
                    <section
                        class="wr-panel"
                        class:active=move || active_rank.get()
                    >
                        <RankPanel
                            active=active_rank
                            config=config.clone()
                            show_celebration=show_celebration
                        />
                    </section>
                    <section
                        class="wr-panel"
                        class:active=move || active_leaderboard.get()
                    >
                        <LeaderboardPanel active=active_leaderboard config=config.clone() />
                    </section>
                    <section
                        class="wr-panel"
                        class:active=move || active_catalog.get()
                    >
                        <CatalogPanel active=active_catalog config=config.clone() />
                    </section>
                    <section
                        class="wr-panel"
                        class:active=move || active_settings.get()
                    >
                        <SettingsPanel active=active_settings config=config.clone() />
                    </section>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TabButton(tab: RwSignal<DashTab>, target: DashTab, label: &'static str) -> impl IntoView {
    view! {
        <button
            class="wr-tab"
            class:active=move || tab.get() == target
            on:click=move |_| tab.set(target)
        >
            {label}
        </button>
    }
}

/// Spinner shown while a panel's first load is in flight.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="wr-loading">
            <div class="wr-spinner"></div>
            "Loading…"
        </div>
    }
}

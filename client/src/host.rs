//! Surface of the host (Jellyfin) web client that the overlay consumes:
//! the `ApiClient` global, its current-user accessor, and the `viewshow`
//! event the host fires on internal navigation.

use std::cell::RefCell;

use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

thread_local! {
    // Keeps the `viewshow` handler alive for the page lifetime.
    static VIEW_SHOW_BINDING: RefCell<Option<Closure<dyn Fn()>>> = const { RefCell::new(None) };
}

fn api_client() -> Option<JsValue> {
    let window = web_sys::window()?;
    let client = Reflect::get(window.as_ref(), &JsValue::from_str("ApiClient")).ok()?;
    if client.is_undefined() || client.is_null() {
        return None;
    }
    Some(client)
}

/// The host's own session accessor: `ApiClient.getCurrentUserId()`.
/// `None` when the client object or the method is missing, or when the
/// call returns an empty value (host still booting).
pub fn current_user_id() -> Option<String> {
    let client = api_client()?;
    let method = Reflect::get(&client, &JsValue::from_str("getCurrentUserId"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    let id = method.call0(&client).ok()?.as_string()?;
    if id.is_empty() { None } else { Some(id) }
}

/// Readiness predicate: the host client exists and already knows who is
/// logged in.
pub fn is_ready() -> bool {
    current_user_id().is_some()
}

/// Register `handler` for the host's `viewshow` navigation event. One
/// retained subscription for the page lifetime; calling again is a no-op.
pub fn on_view_show(handler: impl Fn() + 'static) {
    let already_bound = VIEW_SHOW_BINDING.with(|slot| slot.borrow().is_some());
    if already_bound {
        return;
    }
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let closure = Closure::<dyn Fn()>::new(handler);
    if document
        .add_event_listener_with_callback("viewshow", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        VIEW_SHOW_BINDING.with(|slot| {
            *slot.borrow_mut() = Some(closure);
        });
    }
}

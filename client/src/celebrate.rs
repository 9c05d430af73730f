//! Full-screen rank-up celebration: popup card plus a batch of particles
//! that animate once and remove themselves. Dismissed only by the user
//! (button or backdrop click); there is no auto-timeout.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, MouseEvent};

const RANKUP_ID: &str = "watchranks-rankup";
const RANKUP_BOX_ID: &str = "watchranks-rankup-box";

const PARTICLE_COUNT: usize = 28;
const PARTICLE_PALETTE: [&str; 5] = ["#ffd700", "#e94560", "#00e676", "#40c4ff", "#aa00ff"];

struct CelebrationBinding {
    element: Element,
    _on_close: Closure<dyn Fn()>,
    _on_backdrop: Closure<dyn Fn(MouseEvent)>,
}

thread_local! {
    static CELEBRATION_BINDING: RefCell<Option<CelebrationBinding>> = const { RefCell::new(None) };
}

/// Show the celebration for a newly reached rank. No-op while one is
/// already on screen (single instance, keyed by element id).
pub fn show(rank_name: &str, rank_icon: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(RANKUP_ID).is_some() {
        return;
    }
    let Some(body) = document.body() else {
        return;
    };

    let Ok(backdrop) = document.create_element("div") else {
        return;
    };
    backdrop.set_id(RANKUP_ID);

    let Ok(card) = document.create_element("div") else {
        return;
    };
    card.set_id(RANKUP_BOX_ID);
    card.set_class_name("wr-rankup-box");

    // Text nodes are set via textContent; backend-provided names need no
    // manual escaping this way.
    for (tag, class, text) in [
        ("div", "wr-rankup-title", "🎉 Rank up!"),
        ("div", "wr-rankup-icon", rank_icon),
        ("div", "wr-rankup-name", rank_name),
    ] {
        let Ok(el) = document.create_element(tag) else {
            return;
        };
        el.set_class_name(class);
        el.set_text_content(Some(text));
        let _ = card.append_child(&el);
    }

    let Ok(actions) = document.create_element("div") else {
        return;
    };
    actions.set_class_name("wr-rankup-actions");
    let Ok(close_btn) = document.create_element("button") else {
        return;
    };
    close_btn.set_class_name("wr-btn wr-btn-primary");
    close_btn.set_text_content(Some("Awesome! 🎊"));
    let _ = actions.append_child(&close_btn);
    let _ = card.append_child(&actions);
    let _ = backdrop.append_child(&card);

    let on_close = Closure::<dyn Fn()>::new(dismiss);
    let _ = close_btn.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref());

    let on_backdrop = {
        let backdrop = backdrop.clone();
        Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
            let clicked_backdrop = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| el == backdrop);
            if clicked_backdrop {
                dismiss();
            }
        })
    };
    let _ =
        backdrop.add_event_listener_with_callback("click", on_backdrop.as_ref().unchecked_ref());

    if body.append_child(&backdrop).is_err() {
        return;
    }
    spawn_particles(&document, &card);

    CELEBRATION_BINDING.with(|slot| {
        *slot.borrow_mut() = Some(CelebrationBinding {
            element: backdrop,
            _on_close: on_close,
            _on_backdrop: on_backdrop,
        });
    });
}

pub fn dismiss() {
    CELEBRATION_BINDING.with(|slot| {
        if let Some(binding) = slot.borrow_mut().take() {
            binding.element.remove();
        }
    });
}

/// One fixed-size batch of particles with randomized size, position,
/// drift, color, and timing. Each removes itself when its animation ends.
fn spawn_particles(document: &Document, card: &Element) {
    for i in 0..PARTICLE_COUNT {
        let Ok(particle) = document.create_element("div") else {
            return;
        };
        particle.set_class_name("wr-particle");

        let size = 5.0 + js_sys::Math::random() * 7.0;
        let style = format!(
            "width:{size:.1}px;height:{size:.1}px;background:{};left:{:.1}%;bottom:{:.1}%;\
             --dx:{:.1}px;animation-duration:{:.2}s;animation-delay:{:.2}s",
            PARTICLE_PALETTE[i % PARTICLE_PALETTE.len()],
            js_sys::Math::random() * 100.0,
            js_sys::Math::random() * 35.0,
            (js_sys::Math::random() - 0.5) * 100.0,
            0.8 + js_sys::Math::random() * 0.7,
            js_sys::Math::random() * 0.25,
        );
        let _ = particle.set_attribute("style", &style);

        let cleanup = Closure::once_into_js({
            let particle = particle.clone();
            move || particle.remove()
        });
        let _ = particle
            .add_event_listener_with_callback("animationend", cleanup.unchecked_ref());
        let _ = card.append_child(&particle);
    }
}

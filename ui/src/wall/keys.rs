//! Cancel key for the detail modal.
//!
//! On web the key is caught at the window, so it works wherever focus is.
//! Native windows rely on the wall's own `onkeydown`, which sees the key
//! because the modal takes focus when it mounts.

use dioxus::prelude::*;

use crate::core::{Memorial, Session, WallEvent};

const CANCEL_KEY: &str = "Escape";

pub(crate) fn is_cancel_key(key: &str) -> bool {
    key == CANCEL_KEY
}

/// Next session after a cancel key, or `None` when no modal is open.
pub(crate) fn cancelled(current: &Session, memorial: &Memorial) -> Option<Session> {
    current
        .modal
        .is_open()
        .then(|| current.clone().apply(WallEvent::ModalDismissed, memorial))
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn use_window_cancel(session: Signal<Session>, memorial: Memorial) {
    use wasm_bindgen::{closure::Closure, JsCast};

    use_hook(move || {
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |evt: web_sys::KeyboardEvent| {
                if !is_cancel_key(&evt.key()) {
                    return;
                }
                // The wall may be gone by now.
                if let Ok(mut current) = session.try_write() {
                    if let Some(next) = cancelled(&current, &memorial) {
                        *current = next;
                    }
                }
            },
        );

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn use_window_cancel(_session: Signal<Session>, _memorial: Memorial) {}

//! Reusable hooks for the counter UI.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Current viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl WindowSize {
    fn read() -> Self {
        let window = gloo_utils::window();
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        WindowSize { width, height }
    }
}

/// Track the window size across resize events.
///
/// Reads the dimensions at mount, re-reads on every `resize` event, and
/// unsubscribes when the calling component unmounts.
#[hook]
pub fn use_window_size() -> WindowSize {
    let size = use_state(WindowSize::read);

    {
        let size = size.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut()>::new(move || size.set(WindowSize::read()));
            let callback: &js_sys::Function = listener.as_ref().unchecked_ref();
            if gloo_utils::window()
                .add_event_listener_with_callback("resize", callback)
                .is_err()
            {
                log::debug!("resize listener could not be registered");
            }
            move || {
                let callback: &js_sys::Function = listener.as_ref().unchecked_ref();
                let _ = gloo_utils::window().remove_event_listener_with_callback("resize", callback);
            }
        });
    }

    *size
}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::model::{AppId, Viewport};

const FALLBACK_WIDTH: i32 = 1024;
const FALLBACK_HEIGHT: i32 = 768;

/// DOM id a window's primary text field renders so it can receive focus when the window opens.
pub fn window_primary_input_dom_id(window_id: &AppId) -> String {
    format!("window-input-{window_id}")
}

pub(super) fn focus_window_input(window_id: &AppId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dom_id = window_primary_input_dom_id(window_id);
        // Deferred so the element exists after the window's first render.
        let callback = Closure::once_into_js(move || {
            let element = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&dom_id))
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(element) = element {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

pub(super) fn desktop_viewport(taskbar_height: i32) -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_WIDTH);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_HEIGHT);

            return Viewport {
                width,
                height,
                taskbar_height,
            };
        }
    }

    Viewport {
        width: FALLBACK_WIDTH,
        height: FALLBACK_HEIGHT,
        taskbar_height,
    }
}

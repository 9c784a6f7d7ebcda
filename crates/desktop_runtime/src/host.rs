//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! The reducer stays free of browser APIs; everything it asks for (animation frames, keyboard
//! focus, viewport size) goes through [`DesktopHostContext`].

mod frames;
mod host_ui;

use std::{cell::Cell, rc::Rc};

use leptos::{
    ev, leptos_dom::helpers::AnimationFrameRequestHandle, on_cleanup, window_event_listener,
    Callable, Callback,
};

use crate::{
    model::{AppId, Viewport},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

pub use host_ui::window_primary_input_dom_id;

#[derive(Clone, Default)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    /// Animation-frame callback scheduled for the active gesture, if any.
    frame: Rc<Cell<Option<AnimationFrameRequestHandle>>>,
}

impl DesktopHostContext {
    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::RequestAnimationFrame => {
                frames::request_frame(self.frame.clone(), runtime.dispatch)
            }
            RuntimeEffect::CancelAnimationFrame => frames::cancel_frame(&self.frame),
            RuntimeEffect::FocusWindowInput(window_id) => self.focus_window_input(&window_id),
        }
    }

    /// Moves keyboard focus to the window's primary input, when the window renders one.
    pub fn focus_window_input(&self, window_id: &AppId) {
        host_ui::focus_window_input(window_id);
    }

    /// Returns the browser viewport with the taskbar strip reserved at the bottom.
    pub fn desktop_viewport(&self, taskbar_height: i32) -> Viewport {
        host_ui::desktop_viewport(taskbar_height)
    }

    /// Re-dispatches the viewport whenever the browser window is resized.
    pub fn install_viewport_sync(&self, dispatch: Callback<DesktopAction>) {
        let host = self.clone();
        let listener = window_event_listener(ev::resize, move |_| {
            // The reducer keeps its configured taskbar height.
            dispatch.call(DesktopAction::SetViewport {
                viewport: host.desktop_viewport(0),
            });
        });
        on_cleanup(move || listener.remove());
    }
}

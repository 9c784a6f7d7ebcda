use std::{cell::Cell, rc::Rc};

use leptos::{leptos_dom::helpers::AnimationFrameRequestHandle, Callback};
#[cfg(target_arch = "wasm32")]
use leptos::{logging, request_animation_frame_with_handle, Callable};

use crate::reducer::DesktopAction;

type FrameSlot = Rc<Cell<Option<AnimationFrameRequestHandle>>>;

/// Schedules one [`DesktopAction::AnimationFrame`] dispatch, replacing any callback still queued.
pub(super) fn request_frame(slot: FrameSlot, dispatch: Callback<DesktopAction>) {
    cancel_frame(&slot);

    #[cfg(target_arch = "wasm32")]
    {
        let fired = slot.clone();
        match request_animation_frame_with_handle(move || {
            fired.set(None);
            dispatch.call(DesktopAction::AnimationFrame);
        }) {
            Ok(handle) => slot.set(Some(handle)),
            Err(err) => logging::warn!("request animation frame failed: {err:?}"),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = dispatch;
}

pub(super) fn cancel_frame(slot: &FrameSlot) {
    if let Some(handle) = slot.take() {
        handle.cancel();
    }
}

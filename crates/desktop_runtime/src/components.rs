//! Desktop shell UI composition and interaction surfaces.

mod a11y;
mod desktop_icons;
mod dialogs;
mod menus;
mod taskbar;
mod taskbar_input;
mod window;
mod window_content;

use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use self::{
    a11y::{focus_element_by_id, focus_first_menu_item, handle_menu_roving_keydown},
    desktop_icons::{DesktopIcon, RubberBandOverlay},
    dialogs::{ErrorDialogView, RunDialog},
    menus::StartMenu,
    taskbar::Taskbar,
    taskbar_input::try_handle_desktop_shortcuts,
    window::DesktopWindow,
};

use crate::{
    apps,
    model::{AppId, Point, PointerInput, PointerKind, ResizeEdge},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell UI and routes global pointer input into the reducer.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let interaction = runtime.interaction;

    // Gestures keep receiving samples after the pointer leaves the element that started them.
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if interaction.get_untracked().is_idle() {
            return;
        }
        runtime.dispatch_action(DesktopAction::PointerMove {
            input: pointer_input_from_event(&ev),
        });
    });
    let up_listener = window_event_listener(ev::pointerup, move |ev| {
        if interaction.get_untracked().is_idle() {
            return;
        }
        runtime.dispatch_action(DesktopAction::PointerUp {
            input: pointer_input_from_event(&ev),
        });
    });
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        if !interaction.get_untracked().is_idle() {
            runtime.dispatch_action(DesktopAction::CancelGesture);
        }
    });
    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if !ev.default_prevented() {
            try_handle_desktop_shortcuts(runtime, &ev);
        }
    });
    on_cleanup(move || {
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
        key_listener.remove();
        let active = interaction
            .try_get_untracked()
            .is_some_and(|current| !current.is_idle());
        if active {
            runtime.dispatch_action(DesktopAction::CancelGesture);
        }
    });

    let on_background_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::DesktopPointerDown {
            input: pointer_input_from_event(&ev),
        });
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            style=move || {
                format!("--taskbar-height:{}px;", state.get().viewport.taskbar_height)
            }
        >
            <div class="desktop-surface" on:pointerdown=on_background_pointerdown>
                <For
                    each=move || state.get().icons.positions().to_vec()
                    key=|icon| icon.id.clone()
                    let:icon
                >
                    <DesktopIcon icon_id=icon.id />
                </For>
                <RubberBandOverlay />
            </div>

            <div class="desktop-window-layer">
                <For
                    each=move || state.get().windows.windows().to_vec()
                    key=|win| win.id.clone()
                    let:win
                >
                    <DesktopWindow window_id=win.id />
                </For>
            </div>

            <StartMenu />
            <RunDialog />
            <ErrorDialogView />
            <Taskbar />
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Left mouse button, or the primary touch/pen contact.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn pointer_input_from_event(ev: &web_sys::PointerEvent) -> PointerInput {
    let kind = match ev.pointer_type().as_str() {
        "touch" => PointerKind::Touch,
        "pen" => PointerKind::Pen,
        _ => PointerKind::Mouse,
    };
    PointerInput {
        position: Point::new(ev.client_x(), ev.client_y()),
        kind,
        additive: ev.ctrl_key() || ev.meta_key(),
        time_ms: ev.time_stamp(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}

fn taskbar_button_dom_id(window_id: &AppId) -> String {
    format!("taskbar-window-button-{window_id}")
}

fn icon_class(icon: &str) -> String {
    format!("xp-icon xp-icon-{icon}")
}

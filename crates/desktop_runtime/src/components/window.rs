use super::*;
use crate::{apps::WindowContent, window_manager::Window};

use super::window_content::WindowBody;

const ALL_EDGES: [ResizeEdge; 8] = [
    ResizeEdge::North,
    ResizeEdge::South,
    ResizeEdge::East,
    ResizeEdge::West,
    ResizeEdge::NorthEast,
    ResizeEdge::NorthWest,
    ResizeEdge::SouthEast,
    ResizeEdge::SouthWest,
];

fn window_style(win: &Window<WindowContent>, taskbar_height: i32) -> String {
    if win.is_maximized {
        format!(
            "left:0;top:0;width:100%;height:calc(100% - {taskbar_height}px);z-index:{};",
            win.z_index
        )
    } else {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            win.position.x, win.position.y, win.size.width, win.size.height, win.z_index
        )
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = {
        let window_id = window_id.clone();
        Signal::derive(move || state.with(|desktop| desktop.windows.get(&window_id).cloned()))
    };
    let is_focused = {
        let window_id = window_id.clone();
        Signal::derive(move || {
            state.with(|desktop| desktop.focused_window_id() == Some(&window_id))
        })
    };

    let focus = {
        let window_id = window_id.clone();
        move |_: web_sys::PointerEvent| {
            if !is_focused.get_untracked() {
                runtime.dispatch_action(DesktopAction::FocusWindow {
                    window_id: window_id.clone(),
                });
            }
        }
    };
    let begin_move = {
        let window_id = window_id.clone();
        move |ev: web_sys::PointerEvent| {
            if !is_primary_press(&ev) {
                return;
            }
            try_set_pointer_capture(&ev);
            ev.prevent_default();
            ev.stop_propagation();
            runtime.dispatch_action(DesktopAction::BeginMove {
                window_id: window_id.clone(),
                pointer: pointer_input_from_event(&ev).position,
            });
        }
    };
    let toggle_maximize = {
        let window_id = window_id.clone();
        move || {
            runtime.dispatch_action(DesktopAction::ToggleMaximize {
                window_id: window_id.clone(),
            })
        }
    };
    let minimize = {
        let window_id = window_id.clone();
        move || {
            runtime.dispatch_action(DesktopAction::ToggleMinimize {
                window_id: window_id.clone(),
            })
        }
    };
    let close = {
        let window_id = window_id.clone();
        move || {
            runtime.dispatch_action(DesktopAction::CloseWindow {
                window_id: window_id.clone(),
            })
        }
    };
    let titlebar_double_click = {
        let toggle_maximize = toggle_maximize.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            toggle_maximize();
        }
    };

    let title = Signal::derive(move || window.with(|w| w.as_ref().map(|w| w.title.clone())));
    let icon = Signal::derive(move || {
        window.with(|w| w.as_ref().map(|w| icon_class(&w.icon)).unwrap_or_default())
    });
    let flag = move |read: fn(&Window<WindowContent>) -> bool| {
        Signal::derive(move || window.with(|w| w.as_ref().is_some_and(read)))
    };
    let hide_chrome = flag(|w| w.hide_chrome);
    let maximized = flag(|w| w.is_maximized);
    let minimized = flag(|w| w.is_minimized);
    let maximize_label = Signal::derive(move || {
        if maximized.get() {
            "Restore"
        } else {
            "Maximize"
        }
    });

    view! {
        <section
            class="desktop-window"
            class:focused=move || is_focused.get()
            class:minimized=move || minimized.get()
            class:maximized=move || maximized.get()
            style=move || {
                let taskbar_height = state.with(|desktop| desktop.viewport.taskbar_height);
                window
                    .with(|w| w.as_ref().map(|w| window_style(w, taskbar_height)))
                    .unwrap_or_default()
            }
            role="dialog"
            aria-label=move || title.get().unwrap_or_default()
            on:pointerdown=focus
        >
            <Show when=move || !hide_chrome.get() fallback=|| ()>
                <header
                    class="titlebar"
                    on:pointerdown=begin_move.clone()
                    on:dblclick=titlebar_double_click.clone()
                >
                    <div class="titlebar-title">
                        <span class=move || icon.get() aria-hidden="true"></span>
                        <span>{move || title.get().unwrap_or_default()}</span>
                    </div>
                    <div class="titlebar-controls">
                        <TitlebarButton
                            label="Minimize"
                            class_name="minimize"
                            on_press=minimize.clone()
                        />
                        <TitlebarButton
                            label=maximize_label
                            class_name="maximize"
                            on_press=toggle_maximize.clone()
                        />
                        <TitlebarButton label="Close" class_name="close" on_press=close.clone() />
                    </div>
                </header>
            </Show>
            <div class="window-body">
                <WindowBody window_id=window_id.clone() />
            </div>
            <Show when=move || !maximized.get() fallback=|| ()>
                {
                    let window_id = window_id.clone();
                    ALL_EDGES
                        .into_iter()
                        .map(|edge| {
                            view! { <WindowResizeHandle window_id=window_id.clone() edge=edge /> }
                        })
                        .collect_view()
                }
            </Show>
        </section>
    }
}

#[component]
fn TitlebarButton<F>(
    #[prop(into)] label: MaybeSignal<&'static str>,
    class_name: &'static str,
    on_press: F,
) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    view! {
        <button
            class=format!("titlebar-button {class_name}")
            aria-label=move || label.get()
            on:pointerdown=move |ev: web_sys::PointerEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            }
            on:mousedown=move |ev| stop_mouse_event(&ev)
            on:click=move |ev| {
                stop_mouse_event(&ev);
                on_press();
            }
        ></button>
    }
}

#[component]
fn WindowResizeHandle(window_id: AppId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: window_id.clone(),
            edge,
            pointer: pointer_input_from_event(&ev).position,
        });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

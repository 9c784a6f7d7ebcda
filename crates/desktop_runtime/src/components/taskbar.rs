use std::time::Duration;

use super::*;
use crate::taskbar::{format_tray_clock, taskbar_button_aria_label, taskbar_buttons, TaskbarButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrayClockSnapshot {
    hour: u32,
    minute: u32,
}

impl TrayClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

fn taskbar_button_class(button: &TaskbarButton) -> &'static str {
    match (button.active, button.minimized) {
        (_, true) => "taskbar-button minimized",
        (true, false) => "taskbar-button active",
        (false, false) => "taskbar-button",
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(TrayClockSnapshot::now());
    let dragging = create_rw_signal(None::<AppId>);
    let volume_open = create_rw_signal(false);

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TrayClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if volume_open.get_untracked() {
            volume_open.set(false);
        }
        if runtime.state.get_untracked().start_menu_open {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let buttons = create_memo(move |_| state.with(taskbar_buttons));

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Taskbar"
            aria-keyshortcuts="Control+Escape Alt+1 Alt+2 Alt+3 Alt+4 Alt+5 Alt+6 Alt+7 Alt+8 Alt+9"
            on:mousedown=move |ev| ev.stop_propagation()
            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
        >
            <button
                id="start-button"
                class="start-button"
                aria-haspopup="menu"
                aria-controls="start-menu"
                aria-expanded=move || state.with(|desktop| desktop.start_menu_open).to_string()
                aria-keyshortcuts="Control+Escape"
                on:click=move |_| {
                    volume_open.set(false);
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                <span class=icon_class("windows") aria-hidden="true"></span>
                <span>"start"</span>
            </button>

            <div class="taskbar-running-strip" role="group" aria-label="Running windows">
                <For each=move || buttons.get() key=|button| button.id.clone() let:button>
                    <TaskbarWindowButton window_id=button.id buttons=buttons dragging=dragging />
                </For>
            </div>

            <div class="system-tray" role="group" aria-label="Notification area">
                <TrayVolume open=volume_open />
                <span
                    class="tray-clock"
                    role="timer"
                    aria-live="off"
                >
                    {move || {
                        let now = clock_now.get();
                        format_tray_clock(now.hour, now.minute)
                    }}
                </span>
            </div>
        </footer>
    }
}

#[component]
fn TaskbarWindowButton(
    window_id: AppId,
    buttons: Memo<Vec<TaskbarButton>>,
    dragging: RwSignal<Option<AppId>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let button = {
        let window_id = window_id.clone();
        Signal::derive(move || {
            buttons.with(|all| all.iter().find(|button| button.id == window_id).cloned())
        })
    };

    let on_click = {
        let window_id = window_id.clone();
        move |_| {
            runtime.dispatch_action(DesktopAction::ActivateTaskbarButton {
                window_id: window_id.clone(),
            });
        }
    };
    let on_dragstart = {
        let window_id = window_id.clone();
        move |ev: web_sys::DragEvent| {
            if let Some(transfer) = ev.data_transfer() {
                let _ = transfer.set_data("text/plain", window_id.as_str());
            }
            dragging.set(Some(window_id.clone()));
        }
    };
    let on_drop = {
        let window_id = window_id.clone();
        move |ev: web_sys::DragEvent| {
            ev.prevent_default();
            let Some(dragged) = dragging.get_untracked() else {
                return;
            };
            dragging.set(None);
            if dragged == window_id {
                return;
            }
            let target = buttons.with_untracked(|all| {
                all.iter().position(|button| button.id == window_id)
            });
            if let Some(index) = target {
                runtime.dispatch_action(DesktopAction::ReorderTaskbarButton {
                    window_id: dragged,
                    index,
                });
            }
        }
    };

    view! {
        <button
            id=taskbar_button_dom_id(&window_id)
            class=move || button.with(|b| b.as_ref().map(taskbar_button_class).unwrap_or_default())
            draggable="true"
            aria-pressed=move || button.with(|b| b.as_ref().is_some_and(|b| b.active)).to_string()
            aria-label=move || {
                button.with(|b| b.as_ref().map(taskbar_button_aria_label).unwrap_or_default())
            }
            on:click=on_click
            on:dragstart=on_dragstart
            on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
            on:drop=on_drop
            on:dragend=move |_| dragging.set(None)
        >
            <span
                class=move || {
                    button.with(|b| b.as_ref().map(|b| icon_class(&b.icon)).unwrap_or_default())
                }
                aria-hidden="true"
            ></span>
            <span class="taskbar-button-label">
                {move || button.with(|b| b.as_ref().map(|b| b.title.clone()).unwrap_or_default())}
            </span>
        </button>
    }
}

#[component]
fn TrayVolume(open: RwSignal<bool>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let volume = runtime.volume;

    view! {
        <div class="tray-volume" on:mousedown=move |ev| ev.stop_propagation()>
            <button
                class="tray-icon"
                aria-label=move || format!("Volume {}%", volume.with(|v| v.level()))
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|value| *value = !*value)
            >
                <span
                    class=move || icon_class(volume.with(|v| v.glyph()))
                    aria-hidden="true"
                ></span>
            </button>
            <Show when=move || open.get() fallback=|| ()>
                <div class="volume-popup" role="dialog" aria-label="Volume">
                    <input
                        type="range"
                        min="0"
                        max="100"
                        aria-label="Volume level"
                        prop:value=move || volume.with(|v| v.level()).to_string()
                        on:input=move |ev| {
                            if let Ok(level) = event_target_value(&ev).parse::<i32>() {
                                runtime.set_volume(level);
                            }
                        }
                    />
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || volume.with(|v| v.is_muted())
                            on:change=move |_| runtime.toggle_mute()
                        />
                        "Mute"
                    </label>
                </div>
            </Show>
        </div>
    }
}

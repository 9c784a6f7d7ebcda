use super::*;
use crate::icon_layout::IconGesture;

#[component]
pub(super) fn DesktopIcon(icon_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let interaction = runtime.interaction;
    let is_recycle_bin = icon_id == apps::recycle_bin_id();
    let title = apps::title_for(&icon_id);
    let icon = apps::descriptor_by_id(&icon_id)
        .map(|descriptor| descriptor.icon)
        .unwrap_or("file");

    let position = {
        let icon_id = icon_id.clone();
        Signal::derive(move || {
            let gesture = interaction.with(|ui| ui.icon_gesture.clone());
            state.with(|desktop| desktop.icons.preview_position(&icon_id, gesture.as_ref()))
        })
    };
    let selected = {
        let icon_id = icon_id.clone();
        Signal::derive(move || state.with(|desktop| desktop.icons.is_selected(&icon_id)))
    };
    let drop_target = Signal::derive(move || is_recycle_bin && interaction.get().recycle_hover);
    let recycle_full = Signal::derive(move || state.with(|desktop| !desktop.recycle.is_empty()));

    let on_pointerdown = {
        let icon_id = icon_id.clone();
        move |ev: web_sys::PointerEvent| {
            if !is_primary_press(&ev) {
                return;
            }
            try_set_pointer_capture(&ev);
            ev.prevent_default();
            ev.stop_propagation();
            runtime.dispatch_action(DesktopAction::IconPointerDown {
                icon_id: icon_id.clone(),
                input: pointer_input_from_event(&ev),
            });
        }
    };
    let on_dblclick = {
        let icon_id = icon_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(DesktopAction::ActivateIcon {
                icon_id: icon_id.clone(),
            });
        }
    };
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::ActivateIcon {
                icon_id: icon_id.clone(),
            });
        }
    };

    view! {
        <div
            class="desktop-icon"
            class:selected=move || selected.get()
            class:drop-target=move || drop_target.get()
            role="button"
            tabindex="0"
            aria-label=title.clone()
            style=move || {
                position
                    .get()
                    .map(|origin| format!("left:{}px;top:{}px;", origin.x, origin.y))
                    .unwrap_or_else(|| "display:none;".to_string())
            }
            on:pointerdown=on_pointerdown
            on:dblclick=on_dblclick
            on:keydown=on_keydown
        >
            <span
                class=move || {
                    if is_recycle_bin && recycle_full.get() {
                        icon_class("recycle-bin-full")
                    } else {
                        icon_class(icon)
                    }
                }
                aria-hidden="true"
            ></span>
            <span class="desktop-icon-label">{title}</span>
        </div>
    }
}

#[component]
pub(super) fn RubberBandOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let band = Signal::derive(move || {
        runtime
            .interaction
            .with(|ui| match &ui.icon_gesture {
                Some(IconGesture::RubberBand(band)) => Some(band.rect()),
                _ => None,
            })
    });

    view! {
        {move || {
            band.get()
                .map(|rect| {
                    view! {
                        <div
                            class="rubber-band"
                            aria-hidden="true"
                            style=format!(
                                "left:{}px;top:{}px;width:{}px;height:{}px;",
                                rect.x,
                                rect.y,
                                rect.width,
                                rect.height
                            )
                        />
                    }
                })
        }}
    }
}

use super::*;

#[component]
pub(super) fn RunDialog() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let command = create_rw_signal(String::new());
    let open = Signal::derive(move || runtime.state.with(|desktop| desktop.run_dialog_open));

    create_effect(move |was_open: Option<bool>| {
        let is_open = open.get();
        if is_open && was_open != Some(true) {
            command.set(String::new());
            let _ = focus_element_by_id("run-dialog-input");
        }
        is_open
    });

    let submit = move || {
        runtime.dispatch_action(DesktopAction::RunCommand {
            command: command.get_untracked(),
        });
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="xp-dialog run-dialog"
                role="dialog"
                aria-label="Run"
                on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
            >
                <header class="titlebar">
                    <span>"Run"</span>
                </header>
                <p>
                    "Type the name of a program, folder, document, or Internet resource, and "
                    "Windows will open it for you."
                </p>
                <label>
                    "Open: "
                    <input
                        id="run-dialog-input"
                        type="text"
                        autocomplete="off"
                        prop:value=move || command.get()
                        on:input=move |ev| command.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                            "Enter" => {
                                ev.prevent_default();
                                submit();
                            }
                            "Escape" => {
                                ev.prevent_default();
                                ev.stop_propagation();
                                runtime.dispatch_action(DesktopAction::CloseRunDialog);
                            }
                            _ => {}
                        }
                    />
                </label>
                <div class="dialog-buttons">
                    <button type="button" on:click=move |_| submit()>
                        "OK"
                    </button>
                    <button
                        type="button"
                        on:click=move |_| runtime.dispatch_action(DesktopAction::CloseRunDialog)
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub(super) fn ErrorDialogView() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let error = Signal::derive(move || runtime.state.with(|desktop| desktop.error.clone()));
    let dismiss = move || runtime.dispatch_action(DesktopAction::DismissError);

    create_effect(move |_| {
        if error.with(Option::is_some) {
            let _ = focus_element_by_id("error-dialog-ok");
        }
    });

    view! {
        {move || {
            error
                .get()
                .map(|dialog| {
                    view! {
                        <div class="modal-backdrop">
                            <div
                                class="xp-dialog error-dialog"
                                role="alertdialog"
                                aria-label=dialog.title.clone()
                                on:pointerdown=move |ev: web_sys::PointerEvent| {
                                    ev.stop_propagation()
                                }
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Escape" {
                                        ev.prevent_default();
                                        dismiss();
                                    }
                                }
                            >
                                <header class="titlebar">
                                    <span>{dialog.title}</span>
                                </header>
                                <div class="dialog-body">
                                    <span class=icon_class("error") aria-hidden="true"></span>
                                    <p>{dialog.message}</p>
                                </div>
                                <div class="dialog-buttons">
                                    <button
                                        id="error-dialog-ok"
                                        type="button"
                                        on:click=move |_| dismiss()
                                    >
                                        "OK"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

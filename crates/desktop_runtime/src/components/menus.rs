use super::*;
use crate::taskbar::start_menu_entries;

const START_MENU_ID: &str = "start-menu";

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = Signal::derive(move || runtime.state.with(|desktop| desktop.start_menu_open));
    let query = create_rw_signal(String::new());

    create_effect(move |was_open: Option<bool>| {
        let is_open = open.get();
        if is_open && was_open != Some(true) {
            query.set(String::new());
            let _ = focus_first_menu_item(START_MENU_ID);
        }
        is_open
    });

    let run_search = move || {
        runtime.dispatch_action(DesktopAction::Search {
            query: query.get_untracked(),
        });
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                id=START_MENU_ID
                class="start-menu"
                role="menu"
                aria-label="Start menu"
                on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                on:mousedown=move |ev| ev.stop_propagation()
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if handle_menu_roving_keydown(&ev, START_MENU_ID) {
                        return;
                    }
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                        let _ = focus_element_by_id("start-button");
                    }
                }
            >
                <header class="start-menu-header">
                    <span class=icon_class("user") aria-hidden="true"></span>
                    <strong>"Guest"</strong>
                </header>
                <div class="start-menu-items">
                    {start_menu_entries()
                        .iter()
                        .map(|descriptor| {
                            let app = descriptor.app;
                            view! {
                                <button
                                    id=format!("start-menu-item-{}", descriptor.id)
                                    role="menuitem"
                                    class="start-menu-item"
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        runtime.dispatch_action(DesktopAction::OpenApp { app });
                                    }
                                >
                                    <span
                                        class=icon_class(descriptor.icon)
                                        aria-hidden="true"
                                    ></span>
                                    <span>{descriptor.title}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                    <div class="start-menu-separator" role="separator" aria-hidden="true"></div>
                    <button
                        id="start-menu-item-run"
                        role="menuitem"
                        class="start-menu-item"
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::ToggleRunDialog);
                        }
                    >
                        <span class=icon_class("run") aria-hidden="true"></span>
                        <span>"Run..."</span>
                    </button>
                </div>
                <form
                    class="start-menu-search"
                    role="search"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        run_search();
                    }
                >
                    <input
                        type="search"
                        placeholder="Search programs"
                        aria-label="Search programs"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </form>
            </div>
        </Show>
    }
}

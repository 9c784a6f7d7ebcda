//! Window bodies for each [`WindowContent`] variant.

use super::*;
use crate::{
    apps::{DesktopApp, WindowContent},
    commands::{self, PromptOutcome},
    host::window_primary_input_dom_id,
};

const PROJECTS: &[(&str, &str)] = &[
    (
        "Retro Desktop",
        "A browser desktop with draggable windows, a taskbar and a working recycle bin.",
    ),
    (
        "Rust Web Services",
        "Small HTTP services written in Rust with typed configuration and structured logs.",
    ),
    (
        "Command Line Tools",
        "Utilities for file processing and automation built around composable commands.",
    ),
];

const EXPERIENCES: &[(&str, &str, &str)] = &[
    ("Software Engineer", "2022 - present", "Frontend platforms and developer tooling."),
    ("Junior Developer", "2020 - 2022", "Web applications and internal dashboards."),
];

#[component]
pub(super) fn WindowBody(window_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let content = {
        let window_id = window_id.clone();
        create_memo(move |_| {
            runtime
                .state
                .with(|desktop| desktop.windows.get(&window_id).map(|w| w.content.clone()))
        })
    };

    view! {
        <div class="window-body-content">
            {move || match content.get() {
                Some(WindowContent::AboutMe) => view! { <AboutMeView /> }.into_view(),
                Some(WindowContent::Projects { highlight }) => {
                    view! { <ProjectsView highlight=highlight /> }.into_view()
                }
                Some(WindowContent::Experiences) => view! { <ExperiencesView /> }.into_view(),
                Some(WindowContent::Resume) => view! { <ResumeView /> }.into_view(),
                Some(WindowContent::Contact) => view! { <ContactView /> }.into_view(),
                Some(WindowContent::CommandPrompt) => {
                    view! { <CommandPromptView window_id=window_id.clone() /> }.into_view()
                }
                Some(WindowContent::RecycleBin) => view! { <RecycleBinView /> }.into_view(),
                Some(WindowContent::SearchResults { query }) => {
                    view! { <SearchResultsView query=query /> }.into_view()
                }
                None => view! { <p>"Closed"</p> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn AboutMeView() -> impl IntoView {
    view! {
        <article class="app-about">
            <h1>"Hello!"</h1>
            <p>
                "I build software for the web and the terminal. This desktop is my portfolio: "
                "open the icons to look around, drag them, or throw them in the Recycle Bin."
            </p>
        </article>
    }
}

#[component]
fn ProjectsView(highlight: Option<String>) -> impl IntoView {
    let needle = highlight.as_deref().map(str::to_lowercase);
    let entries = PROJECTS
        .iter()
        .map(|(name, summary)| {
            let matched = needle.as_deref().is_some_and(|needle| {
                name.to_lowercase().contains(needle) || summary.to_lowercase().contains(needle)
            });
            view! {
                <li class="project" class:highlighted=matched>
                    <strong>{*name}</strong>
                    <p>{*summary}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="app-projects">
            {highlight
                .map(|query| {
                    view! { <p class="search-note">"Matches for \"" {query} "\""</p> }
                })}
            <ul>{entries}</ul>
        </section>
    }
}

#[component]
fn ExperiencesView() -> impl IntoView {
    view! {
        <section class="app-experiences">
            <ul>
                {EXPERIENCES
                    .iter()
                    .map(|(role, period, summary)| {
                        view! {
                            <li>
                                <strong>{*role}</strong>
                                <span class="period">{*period}</span>
                                <p>{*summary}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn ResumeView() -> impl IntoView {
    view! {
        <section class="app-resume">
            <object data="/resume.pdf" type="application/pdf" width="100%" height="100%">
                <a href="/resume.pdf">"Download resume"</a>
            </object>
        </section>
    }
}

#[component]
fn ContactView() -> impl IntoView {
    view! {
        <section class="app-contact">
            <p>"The quickest way to reach me is email."</p>
            <a href="mailto:hello@example.com">"hello@example.com"</a>
        </section>
    }
}

#[component]
fn CommandPromptView(window_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let scrollback = create_rw_signal(vec![
        "Microsoft Windows XP [Version 5.1.2600]".to_string(),
        "Type \"help\" for a list of commands.".to_string(),
    ]);
    let input = create_rw_signal(String::new());

    let submit = move || {
        let line = input.get_untracked();
        input.set(String::new());
        let echo = format!("C:\\> {line}");
        match commands::interpret_prompt_line(&line) {
            PromptOutcome::Clear => scrollback.set(Vec::new()),
            PromptOutcome::Print(lines) => scrollback.update(|history| {
                history.push(echo);
                history.extend(lines);
            }),
            PromptOutcome::Launch(app) => {
                scrollback.update(|history| {
                    history.push(echo);
                    history.push(format!("Starting {}...", app.title()));
                });
                runtime.dispatch_action(DesktopAction::OpenApp { app });
            }
        }
    };

    view! {
        <div class="app-cmd">
            <pre class="cmd-scrollback">{move || scrollback.get().join("\n")}</pre>
            <label class="cmd-line">
                <span>"C:\\>"</span>
                <input
                    id=window_primary_input_dom_id(&window_id)
                    type="text"
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    }
                />
            </label>
        </div>
    }
}

#[component]
fn RecycleBinView() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let items = Signal::derive(move || {
        runtime
            .state
            .with(|desktop| desktop.recycle.items().to_vec())
    });

    view! {
        <section class="app-recycle-bin">
            <div class="app-toolbar">
                <button
                    type="button"
                    disabled=move || items.with(Vec::is_empty)
                    on:click=move |_| runtime.dispatch_action(DesktopAction::EmptyRecycleBin)
                >
                    "Empty Recycle Bin"
                </button>
            </div>
            <Show
                when=move || !items.with(Vec::is_empty)
                fallback=|| view! { <p class="empty-note">"The Recycle Bin is empty."</p> }
            >
                <ul class="recycle-items">
                    <For each=move || items.get() key=|item| item.id.clone() let:item>
                        {{
                            let restore_id = item.id.clone();
                            let delete_id = item.id.clone();
                            view! {
                                <li class="recycle-item">
                                    <span class=icon_class(&item.icon) aria-hidden="true"></span>
                                    <span class="recycle-item-title">{item.title.clone()}</span>
                                    <button
                                        type="button"
                                        on:click=move |_| {
                                            runtime.dispatch_action(DesktopAction::RestoreRecycled {
                                                icon_id: restore_id.clone(),
                                            })
                                        }
                                    >
                                        "Restore"
                                    </button>
                                    <button
                                        type="button"
                                        on:click=move |_| {
                                            runtime.dispatch_action(DesktopAction::DeleteRecycled {
                                                icon_id: delete_id.clone(),
                                            })
                                        }
                                    >
                                        "Delete"
                                    </button>
                                </li>
                            }
                        }}
                    </For>
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn SearchResultsView(query: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let matches: Vec<DesktopApp> = commands::search(&query)
        .into_iter()
        .map(|descriptor| descriptor.app)
        .collect();
    let summary = match matches.len() {
        0 => format!("No results for \"{query}\"."),
        1 => format!("1 result for \"{query}\"."),
        count => format!("{count} results for \"{query}\"."),
    };

    view! {
        <section class="app-search">
            <p>{summary}</p>
            <ul>
                {matches
                    .into_iter()
                    .map(|app| {
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class="search-result"
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::OpenApp { app })
                                    }
                                >
                                    <span class=icon_class(app.icon()) aria-hidden="true"></span>
                                    <span>{app.title()}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

use desktop_runtime::{DesktopConfig, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

/// Query parameter carrying a partial JSON [`DesktopConfig`] override.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const CONFIG_QUERY_PARAM: &str = "config";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Windows XP Portfolio" />
        <Meta
            name="description"
            content="A personal portfolio presented as a Windows XP desktop."
        />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider config=config_override()>
            <DesktopShell />
        </DesktopProvider>
    }
}

fn config_override() -> Option<DesktopConfig> {
    let raw = config_query_value()?;
    match DesktopConfig::from_json(&raw) {
        Ok(config) => Some(config),
        Err(err) => {
            logging::warn!("ignoring invalid desktop config override: {err}");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn config_query_value() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(CONFIG_QUERY_PARAM)
}

#[cfg(not(target_arch = "wasm32"))]
fn config_query_value() -> Option<String> {
    None
}

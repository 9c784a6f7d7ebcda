//! Leptos context that ties the reducer to reactive signals.
//!
//! [`DesktopProvider`] owns the desktop and interaction state, the queue of [`RuntimeEffect`]s
//! waiting for the host, and the tray volume service. Components only read signals and dispatch.
#![allow(clippy::clone_on_copy)]

use leptos::*;

use crate::{
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopConfig, DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    volume::VolumeState,
};

#[derive(Clone, Copy)]
/// Handle to the running desktop, provided to every shell component.
pub struct DesktopRuntimeContext {
    /// Browser services used to run effects and query the viewport.
    pub host: StoredValue<DesktopHostContext>,
    pub state: RwSignal<DesktopState>,
    /// Gesture state; changes on every pointer sample while a gesture is active.
    pub interaction: RwSignal<InteractionState>,
    /// Effects emitted by the reducer and not yet executed.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    pub volume: RwSignal<VolumeState>,
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    pub fn set_volume(&self, level: i32) {
        self.volume.update(|volume| volume.set_level(level));
    }

    pub fn toggle_mute(&self) {
        self.volume.update(VolumeState::toggle_mute);
    }
}

/// Writes `next` only when it differs, so unchanged state does not wake subscribers.
fn publish_if_changed<T: PartialEq + 'static>(signal: RwSignal<T>, next: T) {
    if signal.with_untracked(|current| *current != next) {
        signal.set(next);
    }
}

#[component]
/// Builds the desktop runtime and provides it as [`DesktopRuntimeContext`].
pub fn DesktopProvider(
    /// Geometry and timing overrides; defaults apply when absent.
    #[prop(optional_no_strip)]
    config: Option<DesktopConfig>,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::default());
    let config = config.unwrap_or_default();
    let viewport = host.with_value(|host| host.desktop_viewport(config.taskbar_height));
    let state = create_rw_signal(DesktopState::new(config, viewport));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let volume = create_rw_signal(VolumeState::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(emitted) => {
                publish_if_changed(state, desktop);
                publish_if_changed(interaction, ui);
                if !emitted.is_empty() {
                    effects.update(|queue| queue.extend(emitted));
                }
            }
            Err(err) => logging::warn!("desktop action rejected: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        volume,
        dispatch,
    };
    provide_context(runtime.clone());

    host.with_value(|host| host.install_viewport_sync(dispatch));
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

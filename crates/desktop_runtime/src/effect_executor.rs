//! Runs queued [`RuntimeEffect`](crate::reducer::RuntimeEffect)s against the host.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Drains the effect queue whenever it fills, in emission order.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }
        // Taking the batch first lets effects that dispatch (animation frames) queue new ones.
        let batch = runtime
            .effects
            .try_update(std::mem::take)
            .unwrap_or_default();
        let host = runtime.host.get_value();
        for effect in batch {
            host.run_runtime_effect(runtime, effect);
        }
    });
}

//! Runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::PhoneRuntimeContext;

/// Installs the executor that drains queued runtime effects in emission order.
pub fn install(runtime: PhoneRuntimeContext) {
    // Take the batch before running it so effects that dispatch again queue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_runtime_effect(runtime, effect);
        }
    });
}

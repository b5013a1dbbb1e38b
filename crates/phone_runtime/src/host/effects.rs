//! Runtime-effect dispatch for the phone host boundary.

use leptos::{logging, set_timeout, spawn_local};

use crate::{
    host::{host_ui, PhoneHostContext},
    persistence,
    reducer::{PhoneAction, RuntimeEffect},
    runtime_context::PhoneRuntimeContext,
};

pub(super) fn run_runtime_effect(
    host: PhoneHostContext,
    runtime: PhoneRuntimeContext,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::PersistSkipLock(enabled) => persist_skip_lock(host, enabled),
        RuntimeEffect::ScheduleFailureReset { attempt, delay } => {
            set_timeout(
                move || runtime.dispatch_action(PhoneAction::ClearFailedAttempt { attempt }),
                delay,
            );
        }
        RuntimeEffect::Vibrate => host_ui::vibrate(),
    }
}

fn persist_skip_lock(host: PhoneHostContext, enabled: bool) {
    spawn_local(async move {
        if let Err(err) = persistence::persist_skip_lock(&host, enabled).await {
            logging::warn!("persist skip-lock preference failed: {err}");
        }
    });
}

//! Runtime provider and context wiring for the phone shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and host boot
//! wiring. UI composition stays in [`crate::components`].

use leptos::*;
use phone_app_contract::{AppCommand, AppId, AppServices, Skin};
use platform_host::{unix_time_ms_now, HostServices};

use crate::{
    apps::{builtin_registry, AppRegistry},
    effect_executor,
    host::PhoneHostContext,
    model::PhoneState,
    reducer::{reduce_phone, PhoneAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading phone runtime state and dispatching [`PhoneAction`] values.
pub struct PhoneRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<PhoneHostContext>,
    /// Static app table.
    pub registry: StoredValue<AppRegistry>,
    /// Reactive phone state signal.
    pub state: RwSignal<PhoneState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<PhoneAction>,
}

impl PhoneRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: PhoneAction) {
        self.dispatch.call(action);
    }

    /// Builds the service handle injected into `app_id` when it mounts.
    pub fn app_services(&self, app_id: AppId) -> AppServices {
        let runtime = *self;
        let state = self.state;
        let host = self.host.get_value();
        AppServices::new(
            Callback::new(move |command: AppCommand| {
                runtime.dispatch_action(app_command_action(app_id, command, unix_time_ms_now()));
            }),
            Signal::derive(move || state.with(|state| state.skip_lock_enabled)),
            Signal::derive(move || state.with(|state| state.theme.skin)),
            host.repository_service(),
            host.repository_query(),
        )
    }
}

/// Maps an app request onto the reducer action that serves it.
pub fn app_command_action(app_id: AppId, command: AppCommand, now_ms: u64) -> PhoneAction {
    match command {
        AppCommand::Close => PhoneAction::CloseApp,
        AppCommand::Notify { title, body } => PhoneAction::PushNotification {
            title,
            body,
            app_id: Some(app_id),
            posted_at_ms: now_ms,
        },
        AppCommand::SetSkipLock { enabled } => PhoneAction::SetSkipLock { enabled },
        AppCommand::LockNow => PhoneAction::Lock,
        AppCommand::SetSkin { skin } => PhoneAction::SetSkin { skin },
    }
}

#[component]
/// Provides [`PhoneRuntimeContext`] to descendant components and boots persisted state.
pub fn PhoneProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Initial skin, usually chosen by route.
    #[prop(optional)]
    skin: Skin,
    children: Children,
) -> impl IntoView {
    let host = store_value(PhoneHostContext::new(host_services));
    let registry = store_value(builtin_registry());
    let state = create_rw_signal(PhoneState::new(skin));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: PhoneAction| {
        let mut phone = state.get_untracked();
        let previous = phone.clone();

        let result = registry.with_value(|registry| reduce_phone(&mut phone, registry, action));
        match result {
            Ok(new_effects) => {
                if phone != previous {
                    state.set(phone);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("phone reducer error: {err}"),
        }
    });

    let runtime = PhoneRuntimeContext {
        host,
        registry,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);

    host.get_value().install_boot_hydration(dispatch);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`PhoneRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`PhoneProvider`].
pub fn use_phone_runtime() -> PhoneRuntimeContext {
    use_context::<PhoneRuntimeContext>().expect("PhoneRuntimeContext not provided")
}

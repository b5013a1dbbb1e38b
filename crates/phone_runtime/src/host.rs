//! Host-side runtime helpers for executing reducer effects and reaching injected host services.
//!
//! The reducer stays pure; everything that touches storage, timers, or browser APIs goes through
//! [`PhoneHostContext`], which wraps the [`HostServices`] bundle chosen by the entry layer.

mod boot;
mod effects;
mod host_ui;

use std::rc::Rc;

use leptos::Callback;
use platform_host::{HostServices, PrefsStore, RepositoryQuery, RepositoryService};

use crate::{
    reducer::{PhoneAction, RuntimeEffect},
    runtime_context::PhoneRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for phone runtime side effects.
pub struct PhoneHostContext {
    services: HostServices,
}

impl PhoneHostContext {
    /// Wraps the injected host services.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Returns the configured repository listing service.
    pub fn repository_service(&self) -> Rc<dyn RepositoryService> {
        self.services.repositories.clone()
    }

    /// Returns the accounts the Projects app lists.
    pub fn repository_query(&self) -> RepositoryQuery {
        self.services.repository_query.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Reads persisted preferences once and reports them to the reducer.
    pub fn install_boot_hydration(&self, dispatch: Callback<PhoneAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: PhoneRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }
}

//! Shared host-bundle model for browser and headless runtime composition.

use std::rc::Rc;

use crate::{
    MemoryPrefsStore, MemoryRepositoryService, PrefsStore, RepositoryQuery, RepositoryService,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// In-memory adapters, used off-browser and in tests.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle injected into the phone runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `phone_runtime`, which keeps the runtime and app crates decoupled from adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight typed preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Repository listing service.
    pub repositories: Rc<dyn RepositoryService>,
    /// Accounts listed by the Projects app.
    pub repository_query: RepositoryQuery,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle of in-memory adapters.
    pub fn headless() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            repositories: Rc::new(MemoryRepositoryService::default()),
            repository_query: RepositoryQuery::default(),
            host_strategy: HostStrategy::Headless,
        }
    }
}

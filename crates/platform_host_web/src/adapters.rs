use std::rc::Rc;

use platform_host::{
    HostServices, HostStrategy, MemoryPrefsStore, MemoryRepositoryService, PrefsStore,
    PrefsStoreFuture, Repository, RepositoryError, RepositoryFuture, RepositoryQuery,
    RepositoryService, RepositorySource,
};

use crate::{WebPrefsStore, WebRepositoryService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone)]
pub enum PrefsStoreAdapter {
    /// Browser-backed `localStorage` preferences.
    Browser(WebPrefsStore),
    /// Session-only preferences.
    Headless(MemoryPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Headless(store) => store.load_pref(key),
        }
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw_json),
            Self::Headless(store) => store.save_pref(key, raw_json),
        }
    }
}

/// Adapter enum that erases the concrete repository backend behind [`RepositoryService`].
#[derive(Debug, Clone)]
pub enum RepositoryServiceAdapter {
    /// Browser `fetch` against the public REST APIs.
    Browser(WebRepositoryService),
    /// Canned in-memory listings.
    Headless(MemoryRepositoryService),
}

impl RepositoryService for RepositoryServiceAdapter {
    fn list_repositories<'a>(
        &'a self,
        source: RepositorySource,
        query: &'a RepositoryQuery,
    ) -> RepositoryFuture<'a, Result<Vec<Repository>, RepositoryError>> {
        match self {
            Self::Browser(service) => service.list_repositories(source, query),
            Self::Headless(service) => service.list_repositories(source, query),
        }
    }
}

/// Builds the preference store for the selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Headless => PrefsStoreAdapter::Headless(MemoryPrefsStore::default()),
    }
}

/// Builds the repository service for the selected host strategy.
pub fn repository_service() -> RepositoryServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => RepositoryServiceAdapter::Browser(WebRepositoryService),
        HostStrategy::Headless => {
            RepositoryServiceAdapter::Headless(MemoryRepositoryService::default())
        }
    }
}

/// Assembles the host service bundle handed to `phone_runtime`.
pub fn build_host_services() -> HostServices {
    HostServices {
        prefs: Rc::new(prefs_store()),
        repositories: Rc::new(repository_service()),
        repository_query: RepositoryQuery::default(),
        host_strategy: selected_host_strategy(),
    }
}

//! Typed host-domain contracts and shared models used by the phone runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the lightweight
//! preference store, the repository listing contract used by the Projects app, and time helpers,
//! while concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod profile;
pub mod repos;
pub mod storage;
pub mod time;

pub use host::{HostServices, HostStrategy};
pub use profile::{OwnerProfile, OWNER};
pub use repos::service::{
    fetch_all_repositories_with, MemoryRepositoryService, RepositoryFuture, RepositoryListing,
    RepositoryService,
};
pub use repos::types::{
    merge_repositories, parse_repositories, GitHubRepository, GitLabProject, Repository,
    RepositoryError, RepositoryQuery, RepositorySource, DEFAULT_GITHUB_USER, DEFAULT_GITLAB_USER,
    DEFAULT_REPOSITORIES_PER_PAGE,
};
pub use storage::prefs::{
    load_pref_with, load_skip_lock_pref, save_pref_with, save_skip_lock_pref, MemoryPrefsStore,
    PrefsStore, PrefsStoreFuture, SKIP_LOCK_PREF_KEY,
};
pub use time::{unix_time_ms_now, WallClock};

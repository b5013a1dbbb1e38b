//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate wires the two host services the phone shell needs in a browser: the
//! `localStorage`-backed preference store and the `fetch`-backed repository listing service.
//! Off-browser builds compile to inert fallbacks so the runtime stays testable natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod interop;
pub mod repos;
pub mod storage;

pub use adapters::{
    build_host_services, host_strategy_name, prefs_store, repository_service,
    selected_host_strategy, PrefsStoreAdapter, RepositoryServiceAdapter,
};
pub use repos::WebRepositoryService;
pub use storage::local_prefs::WebPrefsStore;

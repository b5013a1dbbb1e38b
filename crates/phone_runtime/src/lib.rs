//! Phone shell runtime: lock, navigation, and overlay state machines behind a single reducer,
//! plus the Leptos provider and shell view that drive them.

pub mod apps;
pub mod components;
mod effect_executor;
pub mod host;
pub mod lock;
pub mod model;
pub mod navigator;
pub mod notifications;
pub mod overlay;
pub mod persistence;
pub mod reducer;
mod runtime_context;

pub use apps::{builtin_registry, AppDescriptor, AppRegistry};
pub use components::{use_phone_runtime, PhoneProvider, PhoneRuntimeContext, PhoneShell};
pub use model::*;
pub use reducer::{reduce_phone, PhoneAction, ReducerError, RuntimeEffect};

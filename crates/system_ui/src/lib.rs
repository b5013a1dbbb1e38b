//! Shared UI primitive library for the phone shell and its built-in apps.
//!
//! The crate owns reusable Leptos primitives, a centralized glyph-based icon API, and the
//! stable `data-ui-*` DOM contract consumed by the skin stylesheets. Apps compose these
//! primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    AppIconButton, AppScreen, Button, ButtonVariant, Dock, EmptyState, HomeGrid, ListRow,
    NavigationBar, OverlaySheet, PhoneFrame, QuickTile, RangeField, StatusBar, Switch, ToggleRow,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppIconButton, AppScreen, Button, ButtonVariant, Dock, EmptyState, HomeGrid, Icon,
        IconName, IconSize, ListRow, NavigationBar, OverlaySheet, PhoneFrame, QuickTile,
        RangeField, StatusBar, Switch, ToggleRow,
    };
}

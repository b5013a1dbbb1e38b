//! Shared phone chrome, overlay, and control primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod overlays;
mod shell;

pub use controls::{Button, EmptyState, ListRow, RangeField, Switch, ToggleRow};
pub use overlays::{OverlaySheet, QuickTile};
pub use shell::{AppIconButton, AppScreen, Dock, HomeGrid, NavigationBar, PhoneFrame, StatusBar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/flat button.
    Quiet,
    /// Danger/destructive button.
    Danger,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("keypad-key")),
            "ui-button keypad-key"
        );
    }

    #[test]
    fn icon_tokens_are_unique() {
        let icons = [
            IconName::About,
            IconName::Projects,
            IconName::Music,
            IconName::Phone,
            IconName::Messages,
            IconName::Clock,
            IconName::Settings,
            IconName::Folder,
            IconName::Wifi,
            IconName::Bluetooth,
            IconName::Airplane,
            IconName::DoNotDisturb,
            IconName::Flashlight,
            IconName::Bell,
            IconName::Lock,
            IconName::Home,
            IconName::Back,
            IconName::Recents,
            IconName::Backspace,
            IconName::Play,
            IconName::Pause,
            IconName::Star,
            IconName::Fork,
            IconName::Close,
            IconName::Battery,
            IconName::Signal,
            IconName::Brightness,
        ];
        let mut tokens: Vec<_> = icons.iter().map(|icon| icon.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), icons.len());
    }
}

//! Overlay manager: a single slot for transient full-screen overlays.

use serde::{Deserialize, Serialize};

use crate::navigator::ShellState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Home-screen folders.
pub enum FolderId {
    /// Phone and Messages.
    Contact,
    /// Clock and Settings.
    Utilities,
}

impl FolderId {
    /// Folder title.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::Utilities => "Utilities",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Transient overlay kinds.
pub enum Overlay {
    /// Expanded home-screen folder.
    Folder(FolderId),
    /// Quick-settings tiles and brightness.
    ControlCenter,
    /// Notification list.
    NotificationCenter,
    /// Recent-apps cards.
    AppSwitcher,
}

impl Overlay {
    /// Stable token for `data-ui-variant`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Folder(_) => "folder",
            Self::ControlCenter => "control-center",
            Self::NotificationCenter => "notification-center",
            Self::AppSwitcher => "app-switcher",
        }
    }

    /// Whether the overlay belongs to the home screen and hides behind a foregrounded app.
    pub const fn is_home_only(self) -> bool {
        matches!(self, Self::Folder(_))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// At most one overlay is active at a time.
pub struct OverlayState {
    active: Option<Overlay>,
}

impl OverlayState {
    /// Active overlay, regardless of what the navigator shows.
    pub fn active(&self) -> Option<Overlay> {
        self.active
    }

    /// Replaces the active overlay.
    pub fn open(&mut self, overlay: Overlay) {
        self.active = Some(overlay);
    }

    /// Clears the slot.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// Opens `overlay`, or closes it when it is already the active one.
    pub fn toggle(&mut self, overlay: Overlay) {
        if self.active == Some(overlay) {
            self.close();
        } else {
            self.open(overlay);
        }
    }

    /// Overlay the view layer should render given the navigator state.
    pub fn visible(&self, shell: &ShellState) -> Option<Overlay> {
        self.active
            .filter(|overlay| !(overlay.is_home_only() && !shell.is_home()))
    }
}

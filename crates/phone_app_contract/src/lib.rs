//! Shared contract types between the phone shell runtime and in-shell apps.
//!
//! Apps receive an [`AppServices`] handle at mount. Every request an app makes of the shell goes
//! through a single [`AppCommand`] callback, so apps never reach into runtime state directly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{rc::Rc, time::Duration};

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::{on_cleanup, set_interval_with_handle, Callable, Callback, Signal};
use platform_host::{RepositoryQuery, RepositoryService};
use serde::{Deserialize, Serialize};

/// Closed set of in-shell apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    /// Profile and contact links.
    About,
    /// GitHub/GitLab repository listing.
    Projects,
    /// Music player.
    Music,
    /// Dialer.
    Phone,
    /// Message threads.
    Messages,
    /// Clock, stopwatch and timer.
    Clock,
    /// Shell settings.
    Settings,
}

impl AppId {
    /// Every app id, in home-screen order.
    pub const ALL: [Self; 7] = [
        Self::About,
        Self::Projects,
        Self::Music,
        Self::Phone,
        Self::Messages,
        Self::Clock,
        Self::Settings,
    ];

    /// Stable string form used in the DOM and URLs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Music => "music",
            Self::Phone => "phone",
            Self::Messages => "messages",
            Self::Clock => "clock",
            Self::Settings => "settings",
        }
    }

    /// Parses a stable string id. Unknown ids yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == raw)
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual skin of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Skin {
    /// Chinese OEM style: compact header, dock, rounded-square icons.
    #[default]
    HyperOs,
    /// Korean OEM style: large clock header, squircle icons, roomy spacing.
    OneUi,
}

impl Skin {
    /// Both skins.
    pub const ALL: [Self; 2] = [Self::HyperOs, Self::OneUi];

    /// Stable id written to `data-skin`.
    pub const fn css_id(self) -> &'static str {
        match self {
            Self::HyperOs => "hyperos",
            Self::OneUi => "oneui",
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::HyperOs => "HyperOS",
            Self::OneUi => "One UI",
        }
    }

    /// Parses a `data-skin` id.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|skin| skin.css_id() == raw)
    }
}

/// Requests an app can make of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Leave the app and return to the home screen.
    Close,
    /// Post an entry to the notification centre.
    Notify {
        /// Notification title.
        title: String,
        /// Notification body.
        body: String,
    },
    /// Persist the skip-lock preference.
    SetSkipLock {
        /// New preference value.
        enabled: bool,
    },
    /// Lock the shell now (no-op while skip-lock is enabled).
    LockNow,
    /// Switch skin.
    SetSkin {
        /// Target skin.
        skin: Skin,
    },
}

/// Service handle injected into every mounted app.
#[derive(Clone)]
pub struct AppServices {
    sender: Callback<AppCommand>,
    skip_lock: Signal<bool>,
    skin: Signal<Skin>,
    repositories: Rc<dyn RepositoryService>,
    repository_query: RepositoryQuery,
}

impl AppServices {
    /// Creates service handles from the runtime command callback and read-only shell signals.
    pub fn new(
        sender: Callback<AppCommand>,
        skip_lock: Signal<bool>,
        skin: Signal<Skin>,
        repositories: Rc<dyn RepositoryService>,
        repository_query: RepositoryQuery,
    ) -> Self {
        Self {
            sender,
            skip_lock,
            skin,
            repositories,
            repository_query,
        }
    }

    /// Sends a raw command.
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }

    /// Returns to the home screen.
    pub fn close(&self) {
        self.send(AppCommand::Close);
    }

    /// Posts a notification.
    pub fn notify(&self, title: impl Into<String>, body: impl Into<String>) {
        self.send(AppCommand::Notify {
            title: title.into(),
            body: body.into(),
        });
    }

    /// Current skip-lock preference.
    pub fn skip_lock(&self) -> Signal<bool> {
        self.skip_lock
    }

    /// Persists the skip-lock preference.
    pub fn set_skip_lock(&self, enabled: bool) {
        self.send(AppCommand::SetSkipLock { enabled });
    }

    /// Locks the shell.
    pub fn lock_now(&self) {
        self.send(AppCommand::LockNow);
    }

    /// Current skin.
    pub fn skin(&self) -> Signal<Skin> {
        self.skin
    }

    /// Switches skin.
    pub fn set_skin(&self, skin: Skin) {
        self.send(AppCommand::SetSkin { skin });
    }

    /// Repository listing service.
    pub fn repositories(&self) -> Rc<dyn RepositoryService> {
        self.repositories.clone()
    }

    /// Accounts the Projects app lists.
    pub fn repository_query(&self) -> &RepositoryQuery {
        &self.repository_query
    }
}

/// Repeating timer that is cleared when dropped.
#[derive(Debug)]
pub struct ScopedTicker {
    handle: IntervalHandle,
}

impl ScopedTicker {
    /// Starts calling `on_tick` every `period`. Returns `None` when the host has no timers.
    pub fn start(period: Duration, on_tick: impl Fn() + 'static) -> Option<Self> {
        set_interval_with_handle(on_tick, period)
            .ok()
            .map(|handle| Self { handle })
    }
}

impl Drop for ScopedTicker {
    fn drop(&mut self) {
        self.handle.clear();
    }
}

/// Starts a [`ScopedTicker`] owned by the current reactive scope.
///
/// The ticker is released when the owning view unmounts, so `on_tick` never runs against a
/// disposed view.
pub fn use_ticker(period: Duration, on_tick: impl Fn() + 'static) {
    if let Some(ticker) = ScopedTicker::start(period, on_tick) {
        on_cleanup(move || drop(ticker));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_ids_round_trip_through_their_string_form() {
        for id in AppId::ALL {
            assert_eq!(AppId::parse(id.as_str()), Some(id));
        }
        assert_eq!(AppId::parse("about"), Some(AppId::About));
        assert_eq!(AppId::parse("camera"), None);
        assert_eq!(AppId::parse("About"), None);
    }

    #[test]
    fn app_id_serde_form_matches_dom_form() {
        let raw = serde_json::to_string(&AppId::Projects).expect("serialize");
        assert_eq!(raw, "\"projects\"");
    }

    #[test]
    fn skins_parse_their_css_ids() {
        for skin in Skin::ALL {
            assert_eq!(Skin::parse(skin.css_id()), Some(skin));
        }
        assert_eq!(Skin::parse("miui"), None);
        assert_eq!(Skin::default(), Skin::HyperOs);
    }
}

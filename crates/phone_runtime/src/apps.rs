//! App registry: the compile-time table of in-shell apps and the home-screen layout.

mod placeholders;

use leptos::*;
use phone_app_about::AboutApp;
use phone_app_clock::ClockApp;
use phone_app_contract::{AppId, AppServices};
use phone_app_projects::ProjectsApp;
use phone_app_settings::SettingsApp;
use system_ui::IconName;

use crate::overlay::FolderId;

#[derive(Debug, Clone, Copy)]
/// Static metadata and mount function for one app.
pub struct AppDescriptor {
    /// Registry key.
    pub id: AppId,
    /// Label under the home-screen icon and in the app title bar.
    pub display_name: &'static str,
    /// Launcher glyph.
    pub icon: IconName,
    /// Mounts the app view.
    pub render: fn(AppServices) -> View,
}

impl AppDescriptor {
    /// Mounts the app with the injected services.
    pub fn mount(&self, services: AppServices) -> View {
        (self.render)(services)
    }
}

#[derive(Debug, Clone)]
/// Ordered app table handed to the navigator. Ids are unique.
pub struct AppRegistry {
    apps: Vec<AppDescriptor>,
}

impl AppRegistry {
    /// Builds a registry, keeping the first descriptor for any duplicated id.
    pub fn new(descriptors: impl IntoIterator<Item = AppDescriptor>) -> Self {
        let mut apps: Vec<AppDescriptor> = Vec::new();
        for descriptor in descriptors {
            if !apps.iter().any(|app| app.id == descriptor.id) {
                apps.push(descriptor);
            }
        }
        Self { apps }
    }

    /// Finds the descriptor registered for `app_id`.
    pub fn lookup(&self, app_id: AppId) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| app.id == app_id)
    }

    /// Resolves a DOM or URL id. Unknown strings yield `None`.
    pub fn lookup_str(&self, raw: &str) -> Option<&AppDescriptor> {
        AppId::parse(raw).and_then(|app_id| self.lookup(app_id))
    }

    /// Registered apps in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.iter()
    }
}

fn mount_about(services: AppServices) -> View {
    view! { <AboutApp services=services /> }.into_view()
}

fn mount_projects(services: AppServices) -> View {
    view! { <ProjectsApp services=services /> }.into_view()
}

fn mount_clock(services: AppServices) -> View {
    view! { <ClockApp services=services /> }.into_view()
}

fn mount_settings(services: AppServices) -> View {
    view! { <SettingsApp services=services /> }.into_view()
}

/// Registry of every built-in app.
pub fn builtin_registry() -> AppRegistry {
    AppRegistry::new([
        AppDescriptor {
            id: AppId::About,
            display_name: "About",
            icon: IconName::About,
            render: mount_about,
        },
        AppDescriptor {
            id: AppId::Projects,
            display_name: "Projects",
            icon: IconName::Projects,
            render: mount_projects,
        },
        AppDescriptor {
            id: AppId::Music,
            display_name: "Music",
            icon: IconName::Music,
            render: placeholders::mount_music,
        },
        AppDescriptor {
            id: AppId::Phone,
            display_name: "Phone",
            icon: IconName::Phone,
            render: placeholders::mount_phone,
        },
        AppDescriptor {
            id: AppId::Messages,
            display_name: "Messages",
            icon: IconName::Messages,
            render: placeholders::mount_messages,
        },
        AppDescriptor {
            id: AppId::Clock,
            display_name: "Clock",
            icon: IconName::Clock,
            render: mount_clock,
        },
        AppDescriptor {
            id: AppId::Settings,
            display_name: "Settings",
            icon: IconName::Settings,
            render: mount_settings,
        },
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One home-grid cell.
pub enum HomeEntry {
    App(AppId),
    Folder(FolderId),
}

/// Home-grid cells in display order.
pub const HOME_GRID: [HomeEntry; 5] = [
    HomeEntry::App(AppId::About),
    HomeEntry::App(AppId::Projects),
    HomeEntry::App(AppId::Music),
    HomeEntry::Folder(FolderId::Contact),
    HomeEntry::Folder(FolderId::Utilities),
];

/// Dock row (HyperOS skin only).
pub const DOCK_APPS: [AppId; 4] = [AppId::Phone, AppId::Messages, AppId::Projects, AppId::Settings];

/// Apps grouped inside a folder.
pub const fn folder_apps(folder: FolderId) -> &'static [AppId] {
    match folder {
        FolderId::Contact => &[AppId::Phone, AppId::Messages],
        FolderId::Utilities => &[AppId::Clock, AppId::Settings],
    }
}

#[cfg(test)]
fn mount_nothing(_: AppServices) -> View {
    ().into_view()
}

#[cfg(test)]
/// Registry holding only `ids`, with inert mount functions.
pub(crate) fn test_registry(ids: &[AppId]) -> AppRegistry {
    AppRegistry::new(ids.iter().map(|id| AppDescriptor {
        id: *id,
        display_name: id.as_str(),
        icon: IconName::Folder,
        render: mount_nothing,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_covers_every_app_once() {
        let registry = builtin_registry();
        for app_id in AppId::ALL {
            assert_eq!(registry.lookup(app_id).map(|app| app.id), Some(app_id));
        }
        assert_eq!(registry.iter().count(), AppId::ALL.len());
    }

    #[test]
    fn string_lookup_ignores_unknown_ids() {
        let registry = test_registry(&AppId::ALL);
        assert_eq!(registry.lookup_str("about").map(|app| app.id), Some(AppId::About));
        assert!(registry.lookup_str("camera").is_none());
    }

    #[test]
    fn duplicate_ids_keep_the_first_descriptor() {
        let mut descriptors: Vec<_> = test_registry(&[AppId::Clock]).iter().copied().collect();
        descriptors.push(AppDescriptor {
            display_name: "Second clock",
            ..descriptors[0]
        });
        let registry = AppRegistry::new(descriptors);
        assert_eq!(registry.iter().count(), 1);
        assert_eq!(registry.lookup(AppId::Clock).map(|app| app.display_name), Some("clock"));
    }

    #[test]
    fn folders_and_dock_reference_registered_apps() {
        let registry = builtin_registry();
        for folder in [FolderId::Contact, FolderId::Utilities] {
            assert!(folder_apps(folder).iter().all(|id| registry.lookup(*id).is_some()));
        }
        assert!(DOCK_APPS.iter().all(|id| registry.lookup(*id).is_some()));
    }
}

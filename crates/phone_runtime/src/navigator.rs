//! Shell navigator: which app is foregrounded and the recent-apps list.
//!
//! Navigation is single-level. Opening an app while another is foregrounded replaces it; there
//! is no back stack, and the recents list is for display only.

use phone_app_contract::AppId;

use crate::apps::{AppDescriptor, AppRegistry};

/// Maximum entries kept in the recent-apps list.
pub const RECENT_APPS_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Foreground app and recents. A foreground id is always registered.
pub struct ShellState {
    foreground_app_id: Option<AppId>,
    recent_app_ids: Vec<AppId>,
}

impl ShellState {
    /// App currently full-screen; `None` while the home screen shows.
    pub fn foreground_app_id(&self) -> Option<AppId> {
        self.foreground_app_id
    }

    /// Whether the home screen is showing.
    pub fn is_home(&self) -> bool {
        self.foreground_app_id.is_none()
    }

    /// Recently opened app ids, most recent first.
    pub fn recent_app_ids(&self) -> &[AppId] {
        &self.recent_app_ids
    }

    /// Foregrounds `app_id` and moves it to the front of recents.
    ///
    /// Returns `false` without touching state when `app_id` is not in `registry`.
    pub fn open_app(&mut self, registry: &AppRegistry, app_id: AppId) -> bool {
        if registry.lookup(app_id).is_none() {
            return false;
        }
        self.foreground_app_id = Some(app_id);
        self.recent_app_ids.retain(|id| *id != app_id);
        self.recent_app_ids.insert(0, app_id);
        self.recent_app_ids.truncate(RECENT_APPS_LIMIT);
        true
    }

    /// Shows the home screen. Recents are untouched.
    pub fn go_home(&mut self) {
        self.foreground_app_id = None;
    }

    /// In-app back/close control; same as [`Self::go_home`].
    pub fn close_app(&mut self) {
        self.go_home();
    }

    /// Resolves recents against `registry`, dropping ids it no longer knows.
    pub fn recent_apps<'r>(&self, registry: &'r AppRegistry) -> Vec<&'r AppDescriptor> {
        self.recent_app_ids
            .iter()
            .filter_map(|id| registry.lookup(*id))
            .collect()
    }

    /// Removes one entry from recents. Removing the foreground app also returns home.
    pub fn remove_recent(&mut self, app_id: AppId) -> bool {
        let before = self.recent_app_ids.len();
        self.recent_app_ids.retain(|id| *id != app_id);
        if self.foreground_app_id == Some(app_id) {
            self.go_home();
        }
        self.recent_app_ids.len() != before
    }

    /// Empties recents and returns home.
    pub fn clear_recents(&mut self) {
        self.recent_app_ids.clear();
        self.go_home();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::apps::test_registry;

    #[test]
    fn open_app_foregrounds_and_records_recent() {
        let registry = test_registry(&AppId::ALL);
        for app_id in AppId::ALL {
            let mut shell = ShellState::default();
            assert!(shell.open_app(&registry, app_id));
            assert_eq!(shell.foreground_app_id(), Some(app_id));
            assert_eq!(shell.recent_app_ids()[0], app_id);
        }
    }

    #[test]
    fn unregistered_app_leaves_state_unchanged() {
        let registry = test_registry(&[AppId::About]);
        let mut shell = ShellState::default();
        shell.open_app(&registry, AppId::About);
        let before = shell.clone();

        assert!(!shell.open_app(&registry, AppId::Music));
        assert_eq!(shell, before);
    }

    #[test]
    fn go_home_is_idempotent_and_keeps_recents() {
        let registry = test_registry(&AppId::ALL);
        let mut shell = ShellState::default();
        shell.open_app(&registry, AppId::About);

        shell.go_home();
        let once = shell.clone();
        shell.go_home();
        assert_eq!(shell, once);
        assert!(shell.is_home());
        assert_eq!(shell.recent_app_ids(), &[AppId::About]);
    }

    #[test]
    fn recents_are_bounded_and_deduplicated() {
        let registry = test_registry(&AppId::ALL);
        let mut shell = ShellState::default();
        let sequence = [
            AppId::About,
            AppId::Music,
            AppId::About,
            AppId::Phone,
            AppId::Clock,
            AppId::Settings,
            AppId::Messages,
            AppId::Projects,
            AppId::Music,
        ];
        for app_id in sequence {
            shell.open_app(&registry, app_id);
            let recents = shell.recent_app_ids();
            assert!(recents.len() <= RECENT_APPS_LIMIT);
            let mut unique = recents.to_vec();
            unique.sort_by_key(|id| id.as_str());
            unique.dedup();
            assert_eq!(unique.len(), recents.len());
        }
        assert_eq!(
            shell.recent_app_ids(),
            &[
                AppId::Music,
                AppId::Projects,
                AppId::Messages,
                AppId::Settings,
                AppId::Clock,
            ]
        );
    }

    #[test]
    fn opening_another_app_replaces_foreground_without_stacking() {
        let registry = test_registry(&AppId::ALL);
        let mut shell = ShellState::default();
        shell.open_app(&registry, AppId::About);
        shell.open_app(&registry, AppId::Projects);
        shell.close_app();
        assert_eq!(shell.foreground_app_id(), None);
    }

    #[test]
    fn recent_apps_drop_ids_missing_from_registry() {
        let full = test_registry(&AppId::ALL);
        let mut shell = ShellState::default();
        shell.open_app(&full, AppId::About);
        shell.open_app(&full, AppId::Music);

        let partial = test_registry(&[AppId::About]);
        let resolved: Vec<_> = shell
            .recent_apps(&partial)
            .into_iter()
            .map(|app| app.id)
            .collect();
        assert_eq!(resolved, vec![AppId::About]);
    }

    #[test]
    fn removing_foreground_recent_returns_home() {
        let registry = test_registry(&AppId::ALL);
        let mut shell = ShellState::default();
        shell.open_app(&registry, AppId::About);
        shell.open_app(&registry, AppId::Clock);

        assert!(shell.remove_recent(AppId::Clock));
        assert!(shell.is_home());
        assert_eq!(shell.recent_app_ids(), &[AppId::About]);
        assert!(!shell.remove_recent(AppId::Clock));

        shell.clear_recents();
        assert!(shell.recent_app_ids().is_empty());
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        #[derive(Debug, Clone, Copy)]
        enum NavStep {
            Open(AppId),
            Home,
            Remove(AppId),
        }

        fn app_id() -> impl Strategy<Value = AppId> {
            proptest::sample::select(AppId::ALL.to_vec())
        }

        fn nav_step() -> impl Strategy<Value = NavStep> {
            prop_oneof![
                3 => app_id().prop_map(NavStep::Open),
                1 => Just(NavStep::Home),
                1 => app_id().prop_map(NavStep::Remove),
            ]
        }

        proptest! {
            #[test]
            fn recents_stay_bounded_unique_and_led_by_last_open(
                steps in proptest::collection::vec(nav_step(), 0..40)
            ) {
                let registry = test_registry(&AppId::ALL);
                let mut shell = ShellState::default();
                for step in steps {
                    match step {
                        NavStep::Open(app_id) => {
                            prop_assert!(shell.open_app(&registry, app_id));
                            prop_assert_eq!(shell.foreground_app_id(), Some(app_id));
                            prop_assert_eq!(shell.recent_app_ids().first().copied(), Some(app_id));
                        }
                        NavStep::Home => shell.go_home(),
                        NavStep::Remove(app_id) => {
                            shell.remove_recent(app_id);
                            prop_assert!(!shell.recent_app_ids().contains(&app_id));
                        }
                    }
                    let recents = shell.recent_app_ids();
                    prop_assert!(recents.len() <= RECENT_APPS_LIMIT);
                    for (index, app_id) in recents.iter().enumerate() {
                        prop_assert!(!recents[index + 1..].contains(app_id));
                    }
                }
            }

            #[test]
            fn go_home_is_idempotent_after_any_history(
                opened in proptest::collection::vec(app_id(), 0..12)
            ) {
                let registry = test_registry(&AppId::ALL);
                let mut shell = ShellState::default();
                for app_id in opened {
                    shell.open_app(&registry, app_id);
                }
                shell.go_home();
                let once = shell.clone();
                shell.go_home();
                prop_assert_eq!(shell, once);
            }

            #[test]
            fn unregistered_ids_never_change_state(
                registered in proptest::sample::subsequence(AppId::ALL.to_vec(), 0..AppId::ALL.len()),
                target in app_id(),
            ) {
                let registry = test_registry(&registered);
                let mut shell = ShellState::default();
                for app_id in &registered {
                    shell.open_app(&registry, *app_id);
                }
                let before = shell.clone();
                let opened = shell.open_app(&registry, target);
                prop_assert_eq!(opened, registered.contains(&target));
                if !opened {
                    prop_assert_eq!(shell, before);
                }
            }
        }
    }
}

//! Reducer actions, side-effect intents, and transition logic for the phone runtime.

mod control_center;

use std::time::Duration;

use phone_app_contract::{AppId, Skin};
use thiserror::Error;

use crate::{
    apps::AppRegistry,
    lock::{LockOutcome, LockState, FAILED_ATTEMPT_DISPLAY},
    model::{PhoneState, QuickSetting},
    notifications::NotificationId,
    overlay::{FolderId, Overlay},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_phone`] to mutate [`PhoneState`].
pub enum PhoneAction {
    /// Persisted preferences have been read; raises or drops the lock screen accordingly.
    BootHydrated {
        /// Stored skip-lock preference.
        skip_lock: bool,
    },
    /// Keypad digit on the lock screen.
    SubmitDigit {
        /// Pressed key.
        digit: char,
    },
    /// Keypad backspace.
    DeleteDigit,
    /// Delayed reset of the failed-attempt indicator.
    ClearFailedAttempt {
        /// Failure the reset was scheduled for.
        attempt: u64,
    },
    /// Lock the shell (no-op while skip-lock is enabled).
    Lock,
    /// Change the skip-lock preference.
    SetSkipLock {
        /// New value.
        enabled: bool,
    },
    /// Foreground an app.
    OpenApp {
        /// App to open.
        app_id: AppId,
    },
    /// Show the home screen.
    GoHome,
    /// In-app back/close control.
    CloseApp,
    /// Return home and expand a folder.
    OpenFolder {
        /// Folder to expand.
        folder: FolderId,
    },
    /// Replace the active overlay.
    OpenOverlay {
        /// Overlay to show.
        overlay: Overlay,
    },
    /// Open an overlay or close it when already active.
    ToggleOverlay {
        /// Overlay to toggle.
        overlay: Overlay,
    },
    /// Dismiss the active overlay.
    CloseOverlay,
    /// Drop one entry from the recent-apps list.
    RemoveRecent {
        /// App to drop.
        app_id: AppId,
    },
    /// Empty the recent-apps list.
    ClearRecents,
    /// Post a notification.
    PushNotification {
        /// Title line.
        title: String,
        /// Body text.
        body: String,
        /// Posting app.
        app_id: Option<AppId>,
        /// Unix milliseconds at posting time.
        posted_at_ms: u64,
    },
    /// Remove one notification.
    DismissNotification {
        /// Notification to remove.
        id: NotificationId,
    },
    /// Remove every notification.
    ClearNotifications,
    /// Flip a control-centre toggle.
    ToggleQuickSetting {
        /// Toggle to flip.
        setting: QuickSetting,
    },
    /// Set control-centre brightness.
    SetBrightness {
        /// Requested value; clamped to the valid range.
        value: u8,
    },
    /// Switch skin.
    SetSkin {
        /// Target skin.
        skin: Skin,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_phone`] for the runtime to execute.
pub enum RuntimeEffect {
    /// Write the skip-lock preference to the prefs store.
    PersistSkipLock(bool),
    /// Dispatch [`PhoneAction::ClearFailedAttempt`] after `delay`.
    ScheduleFailureReset {
        /// Failure to clear.
        attempt: u64,
        /// Delay before clearing.
        delay: Duration,
    },
    /// Short haptic pulse on hosts that support it.
    Vibrate,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The target notification id was not found in the notification centre.
    #[error("notification {0:?} not found")]
    NotificationNotFound(NotificationId),
}

/// Applies a [`PhoneAction`] to the phone runtime state and collects resulting side effects.
///
/// Navigation requests for ids missing from `registry` leave the state untouched.
///
/// # Errors
///
/// Returns [`ReducerError::NotificationNotFound`] when dismissing an unknown notification. The
/// state is left unchanged in that case.
pub fn reduce_phone(
    state: &mut PhoneState,
    registry: &AppRegistry,
    action: PhoneAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    if control_center::reduce_control_center_action(state, &action) {
        return Ok(effects);
    }

    match action {
        PhoneAction::BootHydrated { skip_lock } => {
            state.skip_lock_enabled = skip_lock;
            state.lock = LockState::initialize(skip_lock);
            state.boot_complete = true;
        }
        PhoneAction::SubmitDigit { digit } => {
            let outcome = state.lock.submit_digit(digit);
            push_lock_outcome_effects(outcome, &mut effects);
        }
        PhoneAction::DeleteDigit => {
            state.lock.delete_digit();
        }
        PhoneAction::ClearFailedAttempt { attempt } => {
            state.lock.clear_failure(attempt);
        }
        PhoneAction::Lock => {
            if state.lock.lock(state.skip_lock_enabled) {
                state.overlay.close();
            }
        }
        PhoneAction::SetSkipLock { enabled } => {
            state.skip_lock_enabled = enabled;
            effects.push(RuntimeEffect::PersistSkipLock(enabled));
        }
        PhoneAction::OpenApp { app_id } => {
            if state.shell.open_app(registry, app_id) {
                state.overlay.close();
            }
        }
        PhoneAction::GoHome => {
            state.shell.go_home();
            state.overlay.close();
        }
        PhoneAction::CloseApp => {
            state.shell.close_app();
        }
        PhoneAction::OpenFolder { folder } => {
            state.shell.go_home();
            state.overlay.open(Overlay::Folder(folder));
        }
        PhoneAction::OpenOverlay { overlay } => {
            state.overlay.open(overlay);
        }
        PhoneAction::ToggleOverlay { overlay } => {
            state.overlay.toggle(overlay);
        }
        PhoneAction::CloseOverlay => {
            state.overlay.close();
        }
        PhoneAction::RemoveRecent { app_id } => {
            state.shell.remove_recent(app_id);
        }
        PhoneAction::ClearRecents => {
            state.shell.clear_recents();
            state.overlay.close();
        }
        PhoneAction::PushNotification {
            title,
            body,
            app_id,
            posted_at_ms,
        } => {
            state
                .notifications
                .push(title, body, app_id, posted_at_ms);
            if !state.quick_settings.do_not_disturb {
                effects.push(RuntimeEffect::Vibrate);
            }
        }
        PhoneAction::DismissNotification { id } => {
            if !state.notifications.dismiss(id) {
                return Err(ReducerError::NotificationNotFound(id));
            }
        }
        PhoneAction::ClearNotifications => {
            state.notifications.clear();
        }
        PhoneAction::ToggleQuickSetting { .. }
        | PhoneAction::SetBrightness { .. }
        | PhoneAction::SetSkin { .. } => {}
    }

    Ok(effects)
}

fn push_lock_outcome_effects(outcome: LockOutcome, effects: &mut Vec<RuntimeEffect>) {
    if let LockOutcome::Rejected { attempt } = outcome {
        effects.push(RuntimeEffect::ScheduleFailureReset {
            attempt,
            delay: FAILED_ATTEMPT_DISPLAY,
        });
        effects.push(RuntimeEffect::Vibrate);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::apps::test_registry;

    fn booted(skip_lock: bool) -> (PhoneState, AppRegistry) {
        let registry = test_registry(&AppId::ALL);
        let mut state = PhoneState::default();
        reduce_phone(&mut state, &registry, PhoneAction::BootHydrated { skip_lock })
            .expect("boot");
        (state, registry)
    }

    fn dispatch(
        state: &mut PhoneState,
        registry: &AppRegistry,
        action: PhoneAction,
    ) -> Vec<RuntimeEffect> {
        reduce_phone(state, registry, action).expect("reduce")
    }

    fn enter(state: &mut PhoneState, registry: &AppRegistry, digits: &str) -> Vec<RuntimeEffect> {
        digits
            .chars()
            .flat_map(|digit| dispatch(state, registry, PhoneAction::SubmitDigit { digit }))
            .collect()
    }

    #[test]
    fn fresh_session_opens_about_and_returns_home() {
        let (mut state, registry) = booted(false);
        assert!(state.lock.is_locked());

        let about = AppId::parse("about").expect("about id");
        dispatch(&mut state, &registry, PhoneAction::OpenApp { app_id: about });
        assert_eq!(state.shell.foreground_app_id(), Some(AppId::About));

        dispatch(&mut state, &registry, PhoneAction::GoHome);
        assert_eq!(state.shell.foreground_app_id(), None);
        assert_eq!(state.shell.recent_app_ids(), &[AppId::About]);
    }

    #[test]
    fn boot_with_skip_lock_starts_unlocked() {
        let (state, _) = booted(true);
        assert!(state.boot_complete);
        assert!(!state.lock.is_locked());
        assert!(state.skip_lock_enabled);
    }

    #[test]
    fn correct_passcode_unlocks_without_effects() {
        let (mut state, registry) = booted(false);
        let effects = enter(&mut state, &registry, "1234");
        assert_eq!(effects, Vec::new());
        assert!(!state.lock.is_locked());
        assert_eq!(state.lock.entered_digits(), "");
    }

    #[test]
    fn wrong_passcode_schedules_failure_reset() {
        let (mut state, registry) = booted(false);
        let effects = enter(&mut state, &registry, "9999");
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::ScheduleFailureReset {
                    attempt: 1,
                    delay: FAILED_ATTEMPT_DISPLAY,
                },
                RuntimeEffect::Vibrate,
            ]
        );
        assert!(state.lock.is_locked());
        assert!(state.lock.last_attempt_failed());

        dispatch(
            &mut state,
            &registry,
            PhoneAction::ClearFailedAttempt { attempt: 1 },
        );
        assert!(!state.lock.last_attempt_failed());
    }

    #[test]
    fn lock_respects_skip_lock_preference() {
        let (mut state, registry) = booted(true);
        dispatch(&mut state, &registry, PhoneAction::Lock);
        assert!(!state.lock.is_locked());

        let effects = dispatch(
            &mut state,
            &registry,
            PhoneAction::SetSkipLock { enabled: false },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistSkipLock(false)]);
        assert!(!state.lock.is_locked());

        dispatch(
            &mut state,
            &registry,
            PhoneAction::OpenOverlay {
                overlay: Overlay::ControlCenter,
            },
        );
        dispatch(&mut state, &registry, PhoneAction::Lock);
        assert!(state.lock.is_locked());
        assert_eq!(state.overlay.active(), None);
    }

    #[test]
    fn unknown_app_leaves_state_unchanged() {
        let registry = test_registry(&[AppId::About, AppId::Clock]);
        let mut state = PhoneState::default();
        dispatch(
            &mut state,
            &registry,
            PhoneAction::OpenApp {
                app_id: AppId::About,
            },
        );
        let before = state.clone();

        dispatch(
            &mut state,
            &registry,
            PhoneAction::OpenApp {
                app_id: AppId::Music,
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn open_folder_goes_home_first() {
        let (mut state, registry) = booted(true);
        dispatch(
            &mut state,
            &registry,
            PhoneAction::OpenApp {
                app_id: AppId::Projects,
            },
        );
        dispatch(
            &mut state,
            &registry,
            PhoneAction::OpenFolder {
                folder: FolderId::Contact,
            },
        );
        assert!(state.shell.is_home());
        assert_eq!(
            state.overlay.visible(&state.shell),
            Some(Overlay::Folder(FolderId::Contact))
        );

        dispatch(
            &mut state,
            &registry,
            PhoneAction::OpenApp {
                app_id: AppId::Phone,
            },
        );
        assert_eq!(state.overlay.active(), None);
    }

    #[test]
    fn later_overlay_replaces_earlier_one() {
        let (mut state, registry) = booted(true);
        dispatch(
            &mut state,
            &registry,
            PhoneAction::OpenOverlay {
                overlay: Overlay::NotificationCenter,
            },
        );
        dispatch(
            &mut state,
            &registry,
            PhoneAction::OpenOverlay {
                overlay: Overlay::AppSwitcher,
            },
        );
        assert_eq!(state.overlay.active(), Some(Overlay::AppSwitcher));
    }

    #[test]
    fn rapid_open_app_calls_resolve_to_last_write() {
        let (mut state, registry) = booted(true);
        for app_id in [AppId::Music, AppId::Clock, AppId::Settings] {
            dispatch(&mut state, &registry, PhoneAction::OpenApp { app_id });
        }
        assert_eq!(state.shell.foreground_app_id(), Some(AppId::Settings));
        assert_eq!(
            state.shell.recent_app_ids(),
            &[AppId::Settings, AppId::Clock, AppId::Music]
        );
    }

    #[test]
    fn dismissing_unknown_notification_is_an_error() {
        let (mut state, registry) = booted(true);
        dispatch(
            &mut state,
            &registry,
            PhoneAction::PushNotification {
                title: "Timer".to_string(),
                body: "Done".to_string(),
                app_id: Some(AppId::Clock),
                posted_at_ms: 10,
            },
        );
        let id = state.notifications.entries()[0].id;

        assert_eq!(
            reduce_phone(
                &mut state,
                &registry,
                PhoneAction::DismissNotification {
                    id: NotificationId(99),
                },
            ),
            Err(ReducerError::NotificationNotFound(NotificationId(99)))
        );
        assert_eq!(state.notifications.len(), 1);

        dispatch(&mut state, &registry, PhoneAction::DismissNotification { id });
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn do_not_disturb_silences_notification_vibration() {
        let (mut state, registry) = booted(true);
        let push = |title: &str| PhoneAction::PushNotification {
            title: title.to_string(),
            body: String::new(),
            app_id: None,
            posted_at_ms: 0,
        };
        assert_eq!(
            dispatch(&mut state, &registry, push("a")),
            vec![RuntimeEffect::Vibrate]
        );

        dispatch(
            &mut state,
            &registry,
            PhoneAction::ToggleQuickSetting {
                setting: QuickSetting::DoNotDisturb,
            },
        );
        assert_eq!(dispatch(&mut state, &registry, push("b")), Vec::new());
    }

    #[test]
    fn clear_recents_returns_home_and_closes_switcher() {
        let (mut state, registry) = booted(true);
        dispatch(
            &mut state,
            &registry,
            PhoneAction::OpenApp {
                app_id: AppId::Clock,
            },
        );
        dispatch(
            &mut state,
            &registry,
            PhoneAction::OpenOverlay {
                overlay: Overlay::AppSwitcher,
            },
        );
        dispatch(&mut state, &registry, PhoneAction::ClearRecents);
        assert!(state.shell.is_home());
        assert!(state.shell.recent_app_ids().is_empty());
        assert_eq!(state.overlay.active(), None);
    }
}

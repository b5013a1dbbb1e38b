//! Hardware keyboard shortcuts for the lock-screen keypad and overlays.

use crate::{model::PhoneState, reducer::PhoneAction};

/// Maps a `KeyboardEvent.key` value to the action it triggers in the current state.
pub(super) fn shell_key_action(state: &PhoneState, key: &str) -> Option<PhoneAction> {
    if !state.boot_complete {
        return None;
    }

    if state.lock.is_locked() {
        let mut chars = key.chars();
        return match (chars.next(), chars.next()) {
            (Some(digit), None) if digit.is_ascii_digit() => {
                Some(PhoneAction::SubmitDigit { digit })
            }
            _ if key == "Backspace" => Some(PhoneAction::DeleteDigit),
            _ => None,
        };
    }

    match key {
        "Escape" if state.overlay.active().is_some() => Some(PhoneAction::CloseOverlay),
        "Escape" if !state.shell.is_home() => Some(PhoneAction::CloseApp),
        _ => None,
    }
}

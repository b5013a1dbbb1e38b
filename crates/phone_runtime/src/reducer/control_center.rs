//! Reducer helpers for control-centre toggles and skin changes.

use crate::{model::PhoneState, reducer::PhoneAction};

/// Applies quick-setting and appearance actions. Returns `false` for actions it does not own.
pub(super) fn reduce_control_center_action(state: &mut PhoneState, action: &PhoneAction) -> bool {
    match action {
        PhoneAction::ToggleQuickSetting { setting } => {
            state.quick_settings.toggle(*setting);
        }
        PhoneAction::SetBrightness { value } => {
            state.quick_settings.set_brightness(*value);
        }
        PhoneAction::SetSkin { skin } => {
            state.theme.skin = *skin;
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use phone_app_contract::Skin;

    use super::*;
    use crate::model::{QuickSetting, MAX_BRIGHTNESS};

    #[test]
    fn owns_only_control_center_actions() {
        let mut state = PhoneState::default();
        assert!(reduce_control_center_action(
            &mut state,
            &PhoneAction::SetSkin { skin: Skin::OneUi }
        ));
        assert_eq!(state.theme.skin, Skin::OneUi);

        assert!(reduce_control_center_action(
            &mut state,
            &PhoneAction::SetBrightness { value: 180 }
        ));
        assert_eq!(state.quick_settings.brightness, MAX_BRIGHTNESS);

        assert!(reduce_control_center_action(
            &mut state,
            &PhoneAction::ToggleQuickSetting {
                setting: QuickSetting::Flashlight
            }
        ));
        assert!(state.quick_settings.flashlight);

        assert!(!reduce_control_center_action(&mut state, &PhoneAction::GoHome));
    }
}

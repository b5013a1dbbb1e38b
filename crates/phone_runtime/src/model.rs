use phone_app_contract::Skin;
use serde::{Deserialize, Serialize};

use crate::{
    lock::LockState, navigator::ShellState, notifications::NotificationCenterState,
    overlay::OverlayState,
};

/// Default control-centre brightness.
pub const DEFAULT_BRIGHTNESS: u8 = 70;
/// Upper brightness bound.
pub const MAX_BRIGHTNESS: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Control-centre toggles.
pub enum QuickSetting {
    Wifi,
    Bluetooth,
    AirplaneMode,
    DoNotDisturb,
    Flashlight,
}

impl QuickSetting {
    pub const ALL: [Self; 5] = [
        Self::Wifi,
        Self::Bluetooth,
        Self::AirplaneMode,
        Self::DoNotDisturb,
        Self::Flashlight,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Wifi => "Wi-Fi",
            Self::Bluetooth => "Bluetooth",
            Self::AirplaneMode => "Airplane",
            Self::DoNotDisturb => "Do not disturb",
            Self::Flashlight => "Flashlight",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Cosmetic quick-settings values shown in the control centre and status bar.
pub struct QuickSettings {
    pub wifi: bool,
    pub bluetooth: bool,
    pub airplane_mode: bool,
    pub do_not_disturb: bool,
    pub flashlight: bool,
    pub brightness: u8,
}

impl Default for QuickSettings {
    fn default() -> Self {
        Self {
            wifi: true,
            bluetooth: false,
            airplane_mode: false,
            do_not_disturb: false,
            flashlight: false,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl QuickSettings {
    pub fn is_enabled(&self, setting: QuickSetting) -> bool {
        match setting {
            QuickSetting::Wifi => self.wifi,
            QuickSetting::Bluetooth => self.bluetooth,
            QuickSetting::AirplaneMode => self.airplane_mode,
            QuickSetting::DoNotDisturb => self.do_not_disturb,
            QuickSetting::Flashlight => self.flashlight,
        }
    }

    /// Flips one toggle. Enabling airplane mode switches the radios off.
    pub fn toggle(&mut self, setting: QuickSetting) {
        match setting {
            QuickSetting::Wifi => self.wifi = !self.wifi,
            QuickSetting::Bluetooth => self.bluetooth = !self.bluetooth,
            QuickSetting::AirplaneMode => {
                self.airplane_mode = !self.airplane_mode;
                if self.airplane_mode {
                    self.wifi = false;
                    self.bluetooth = false;
                }
            }
            QuickSetting::DoNotDisturb => self.do_not_disturb = !self.do_not_disturb,
            QuickSetting::Flashlight => self.flashlight = !self.flashlight,
        }
    }

    pub fn set_brightness(&mut self, value: u8) {
        self.brightness = value.min(MAX_BRIGHTNESS);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneTheme {
    pub skin: Skin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Whole-shell runtime state owned by the provider.
pub struct PhoneState {
    /// `false` until the persisted skip-lock preference has been read.
    pub boot_complete: bool,
    pub lock: LockState,
    pub shell: ShellState,
    pub overlay: OverlayState,
    pub notifications: NotificationCenterState,
    pub quick_settings: QuickSettings,
    pub theme: PhoneTheme,
    /// Session copy of the persisted "skip lock screen" preference.
    pub skip_lock_enabled: bool,
}

impl Default for PhoneState {
    fn default() -> Self {
        Self::new(Skin::default())
    }
}

impl PhoneState {
    /// Pre-boot state for `skin`. The lock screen is raised until boot hydration decides otherwise.
    pub fn new(skin: Skin) -> Self {
        Self {
            boot_complete: false,
            lock: LockState::initialize(false),
            shell: ShellState::default(),
            overlay: OverlayState::default(),
            notifications: NotificationCenterState::default(),
            quick_settings: QuickSettings::default(),
            theme: PhoneTheme { skin },
            skip_lock_enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airplane_mode_switches_radios_off() {
        let mut settings = QuickSettings {
            bluetooth: true,
            ..QuickSettings::default()
        };
        settings.toggle(QuickSetting::AirplaneMode);
        assert!(settings.airplane_mode);
        assert!(!settings.wifi);
        assert!(!settings.bluetooth);

        settings.toggle(QuickSetting::AirplaneMode);
        assert!(!settings.airplane_mode);
        assert!(!settings.wifi);
    }

    #[test]
    fn brightness_is_clamped() {
        let mut settings = QuickSettings::default();
        assert_eq!(settings.brightness, DEFAULT_BRIGHTNESS);
        settings.set_brightness(250);
        assert_eq!(settings.brightness, MAX_BRIGHTNESS);
        settings.set_brightness(0);
        assert_eq!(settings.brightness, 0);
    }

    #[test]
    fn fresh_state_is_locked_and_home() {
        let state = PhoneState::new(Skin::OneUi);
        assert!(state.lock.is_locked());
        assert!(state.shell.is_home());
        assert_eq!(state.theme.skin, Skin::OneUi);
        assert!(!state.boot_complete);
    }
}

#[cfg(target_arch = "wasm32")]
const VIBRATE_MS: u32 = 40;

/// Short haptic pulse. Browsers without the Vibration API ignore it.
pub(super) fn vibrate() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let _ = window.navigator().vibrate_with_duration(VIBRATE_MS);
    }
}

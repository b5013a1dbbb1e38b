//! Phone runtime persistence for the one durable preference: skipping the lock screen.

use leptos::logging;
use platform_host::{load_skip_lock_pref, save_skip_lock_pref};

use crate::host::PhoneHostContext;

/// Reads the skip-lock preference. Missing or unreadable values count as `false`.
pub async fn load_skip_lock(host: &PhoneHostContext) -> bool {
    match load_skip_lock_pref(host.prefs_store().as_ref()).await {
        Ok(skip_lock) => skip_lock,
        Err(err) => {
            logging::warn!("skip-lock preference load failed: {err}");
            false
        }
    }
}

/// Writes the skip-lock preference.
///
/// # Errors
///
/// Returns an error string when the configured prefs store rejects the write.
pub async fn persist_skip_lock(host: &PhoneHostContext, enabled: bool) -> Result<(), String> {
    save_skip_lock_pref(host.prefs_store().as_ref(), enabled).await
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use platform_host::{HostServices, MemoryPrefsStore, PrefsStore, SKIP_LOCK_PREF_KEY};

    use super::*;

    fn host_with(prefs: Rc<MemoryPrefsStore>) -> PhoneHostContext {
        PhoneHostContext::new(HostServices {
            prefs,
            ..HostServices::headless()
        })
    }

    #[test]
    fn skip_lock_round_trips_through_the_prefs_store() {
        let prefs = Rc::new(MemoryPrefsStore::default());
        let host = host_with(prefs.clone());

        assert!(!block_on(load_skip_lock(&host)));
        block_on(persist_skip_lock(&host, true)).expect("persist");
        assert_eq!(prefs.raw(SKIP_LOCK_PREF_KEY).as_deref(), Some("true"));
        assert!(block_on(load_skip_lock(&host)));
    }

    #[test]
    fn unreadable_preference_falls_back_to_locked() {
        let prefs = Rc::new(MemoryPrefsStore::default());
        block_on(prefs.save_pref(SKIP_LOCK_PREF_KEY, "\"yes\"")).expect("seed");
        let host = host_with(prefs);

        assert!(!block_on(load_skip_lock(&host)));
    }
}

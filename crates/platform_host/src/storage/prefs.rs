//! Lightweight preference storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Preference key for the "skip lock screen on next load" flag.
///
/// The value is JSON-encoded, which stores the literal strings `true` / `false`.
pub const SKIP_LOCK_PREF_KEY: &str = "phone.skip_lock_screen";

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for lightweight preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads a raw JSON string for a preference key.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Saves a raw JSON string for a preference key.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the raw stored text for `key`, bypassing the async contract.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or store save fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw).await
}

/// Reads the skip-lock preference. A missing key means the lock screen is shown.
///
/// # Errors
///
/// Returns an error when the store fails or the stored text is not `true`/`false`.
pub async fn load_skip_lock_pref<S: PrefsStore + ?Sized>(store: &S) -> Result<bool, String> {
    Ok(load_pref_with::<S, bool>(store, SKIP_LOCK_PREF_KEY)
        .await?
        .unwrap_or(false))
}

/// Writes the skip-lock preference.
///
/// # Errors
///
/// Returns an error when the store rejects the write.
pub async fn save_skip_lock_pref<S: PrefsStore + ?Sized>(
    store: &S,
    enabled: bool,
) -> Result<(), String> {
    save_pref_with(store, SKIP_LOCK_PREF_KEY, &enabled).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_prefs_store_round_trip() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref("pref.key", "{\"k\":1}")).expect("save");
        assert_eq!(
            block_on(store_obj.load_pref("pref.key")).expect("load"),
            Some("{\"k\":1}".to_string())
        );
        assert_eq!(block_on(store_obj.load_pref("other.key")).expect("load"), None);
    }

    #[test]
    fn skip_lock_pref_defaults_to_false_when_missing() {
        let store = MemoryPrefsStore::default();
        assert!(!block_on(load_skip_lock_pref(&store)).expect("load"));
    }

    #[test]
    fn skip_lock_pref_is_stored_as_literal_boolean_text() {
        let store = MemoryPrefsStore::default();

        block_on(save_skip_lock_pref(&store, true)).expect("save");
        assert_eq!(store.raw(SKIP_LOCK_PREF_KEY).as_deref(), Some("true"));
        assert!(block_on(load_skip_lock_pref(&store)).expect("load"));

        block_on(save_skip_lock_pref(&store, false)).expect("save");
        assert_eq!(store.raw(SKIP_LOCK_PREF_KEY).as_deref(), Some("false"));
        assert!(!block_on(load_skip_lock_pref(&store)).expect("load"));
    }

    #[test]
    fn skip_lock_pref_rejects_garbage() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(SKIP_LOCK_PREF_KEY, "yes please")).expect("save raw");
        assert!(block_on(load_skip_lock_pref(&store)).is_err());
    }
}

//! Local Storage Commands
//!
//! `localStorage` backing for the cookie consent flag.

use storefront_core::ConsentStore;

/// Consent flag storage on `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct LocalStorageConsent;

impl LocalStorageConsent {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ConsentStore for LocalStorageConsent {
    fn read_flag(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write_flag(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!(key, "localStorage unavailable, consent not persisted");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!(key, error = ?e, "failed to persist flag");
        }
    }
}

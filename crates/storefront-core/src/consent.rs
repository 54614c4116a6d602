//! Cookie Consent
//!
//! The single persisted flag of the site. Storage is abstracted so the
//! browser can back it with `localStorage` and tests with a map.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key for the consent flag
pub const CONSENT_KEY: &str = "cookiesAccepted";

/// Key/value flag storage
pub trait ConsentStore {
    fn read_flag(&self, key: &str) -> Option<String>;

    /// Best effort; storage may be unavailable (private mode, quota)
    fn write_flag(&self, key: &str, value: &str);
}

/// In-memory store, used when no browser storage is available
#[derive(Debug, Default)]
pub struct MemoryConsentStore {
    flags: RefCell<HashMap<String, String>>,
}

impl ConsentStore for MemoryConsentStore {
    fn read_flag(&self, key: &str) -> Option<String> {
        self.flags.borrow().get(key).cloned()
    }

    fn write_flag(&self, key: &str, value: &str) {
        self.flags.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// Consent state backed by a `ConsentStore`
#[derive(Debug)]
pub struct CookieConsent<S> {
    store: S,
}

impl<S: ConsentStore> CookieConsent<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Any stored value counts as accepted
    pub fn is_accepted(&self) -> bool {
        self.store
            .read_flag(CONSENT_KEY)
            .is_some_and(|v| !v.is_empty())
    }

    pub fn should_show_banner(&self) -> bool {
        !self.is_accepted()
    }

    pub fn accept(&self) {
        self.store.write_flag(CONSENT_KEY, "true");
        tracing::info!("cookie consent accepted");
    }
}

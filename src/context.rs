//! Application Context
//!
//! Explicitly constructed at startup and shared via the Leptos Context API.
//! Holds the site config and the single active notification.

use leptos::prelude::*;
use storefront_core::{Notification, NotificationKind, SiteConfig};

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<SiteConfig>,
    /// Currently displayed toast - read
    pub notification: ReadSignal<Option<Notification>>,
    /// Currently displayed toast - write
    set_notification: WriteSignal<Option<Notification>>,
    next_notification_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(config: SiteConfig) -> Self {
        let (notification, set_notification) = signal(None::<Notification>);
        Self {
            config: StoredValue::new(config),
            notification,
            set_notification,
            next_notification_id: StoredValue::new(0),
        }
    }

    pub fn with_config<T>(&self, f: impl FnOnce(&SiteConfig) -> T) -> T {
        self.config.with_value(f)
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    /// Show a toast, replacing any current one
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let id = self.next_notification_id.get_value();
        self.next_notification_id.set_value(id.wrapping_add(1));
        self.set_notification.set(Some(Notification::new(id, message, kind)));
    }

    /// Remove the toast with this id if it is still the current one
    pub fn dismiss(&self, id: u32) {
        self.set_notification.update(|current| {
            if current.as_ref().is_some_and(|n| n.id == id) {
                *current = None;
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

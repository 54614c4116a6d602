//! Notifications
//!
//! Toast messages shown in the top-right corner. Only one is visible at a time.

use serde::{Deserialize, Serialize};

/// Length of the slide-out animation before a toast is removed
pub const EXIT_ANIMATION_MS: u32 = 300;

/// `slideIn`/`slideOut` keyframes used by toasts and the cookie banner
pub const SLIDE_KEYFRAMES: &str = "\
@keyframes slideIn {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}";

/// `animation` value for a toast entering or leaving
pub fn slide_animation(leaving: bool) -> String {
    let name = if leaving { "slideOut" } else { "slideIn" };
    format!("{} {}ms ease", name, EXIT_ANIMATION_MS)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Info => "#3498DB",
            NotificationKind::Success => "#27AE60",
            NotificationKind::Error => "#E74C3C",
        }
    }

    /// e.g. "notification notification-error"
    pub fn css_class(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// A toast. `id` distinguishes a replacement from the toast it replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(id: u32, message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id,
            message: message.into(),
            kind,
        }
    }
}

//! Storefront Core
//!
//! DOM-free logic behind the storefront pages:
//! - catalog: menu categories and items loaded once per session
//! - filter: category + search visibility engine for the menu page
//! - carousel, navigation, contact, consent, notification: business site widgets
//! - config: site settings with defaults

mod error;
pub mod catalog;
pub mod filter;
pub mod carousel;
pub mod contact;
pub mod consent;
pub mod notification;
pub mod navigation;
pub mod config;

pub use error::{CatalogError, ConfigError};
pub use catalog::{Catalog, CategoryId, MenuCategory, MenuItem};
pub use filter::{compute_visibility, CategorySelector, CategoryVisibility, FilterState, VisibilityResult};
pub use carousel::Carousel;
pub use contact::{ContactDraft, ContactError, ContactField, ContactSubmission, FieldStatus};
pub use consent::{ConsentStore, CookieConsent, MemoryConsentStore};
pub use notification::{Notification, NotificationKind};
pub use navigation::{AnchorTarget, MobileMenu};
pub use config::SiteConfig;

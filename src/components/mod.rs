//! UI Components
//!
//! Leptos components for the business site and the menu page.

mod reveal;
mod notification_toast;
mod cookie_banner;
mod nav_bar;
mod testimonials_carousel;
mod steps_carousel;
mod contact_form;
mod business_page;
mod filter_bar;
mod search_box;
mod menu_category_view;
pub(crate) mod no_results;
mod menu_page;

pub use notification_toast::NotificationToast;
pub use cookie_banner::CookieBanner;
pub use business_page::BusinessPage;
pub use menu_page::MenuPage;

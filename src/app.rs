//! Storefront Frontend App
//!
//! Root component: provides the application context, installs the
//! document-wide anchor scrolling and renders the page for this document.

use leptos::ev;
use leptos::prelude::*;
use storefront_core::notification::SLIDE_KEYFRAMES;
use storefront_core::SiteConfig;

use crate::commands;
use crate::components::{BusinessPage, CookieBanner, MenuPage, NotificationToast};
use crate::context::AppContext;
use crate::models::Page;

#[component]
pub fn App(config: SiteConfig, page: Page) -> impl IntoView {
    // Menu page anchors scroll flush to the top; the business site clears its fixed header
    let header_offset = match page {
        Page::Business => config.header_offset_px,
        Page::Menu => 0.0,
    };

    // Provide context to all children
    provide_context(AppContext::new(config));

    let anchors = window_event_listener(ev::click, move |ev| {
        if commands::handle_anchor_click(&ev, header_offset) {
            ev.prevent_default();
        }
    });
    on_cleanup(move || anchors.remove());

    tracing::info!(?page, "storefront initialized");

    view! {
        // Mounted once per document, shared by toasts and the cookie banner
        <style data-notification="">{SLIDE_KEYFRAMES}</style>
        {match page {
            Page::Business => view! {
                <BusinessPage />
                <CookieBanner />
            }.into_any(),
            Page::Menu => view! { <MenuPage /> }.into_any(),
        }}
        <NotificationToast />
    }
}

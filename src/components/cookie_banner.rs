//! Cookie Banner Component
//!
//! Appears shortly after load unless consent was already given; accepting
//! persists the flag and slides the banner out.

use leptos::prelude::*;
use leptos_autoplay::Delay;
use storefront_core::notification::{slide_animation, EXIT_ANIMATION_MS};
use storefront_core::CookieConsent;

use crate::commands::LocalStorageConsent;
use crate::context::use_app_context;

#[derive(Clone, Copy, PartialEq)]
enum BannerPhase {
    Hidden,
    Shown,
    Leaving,
    Gone,
}

#[component]
pub fn CookieBanner() -> impl IntoView {
    let ctx = use_app_context();
    let consent = CookieConsent::new(LocalStorageConsent);
    let (phase, set_phase) = signal(BannerPhase::Hidden);
    let timer = Delay::new();

    if consent.should_show_banner() {
        let delay = ctx.with_config(|c| c.cookie_banner_delay_ms);
        timer.schedule(delay, move || set_phase.set(BannerPhase::Shown));
    } else {
        set_phase.set(BannerPhase::Gone);
    }

    let accept = move |_| {
        CookieConsent::new(LocalStorageConsent).accept();
        set_phase.set(BannerPhase::Leaving);
        timer.schedule(EXIT_ANIMATION_MS, move || set_phase.set(BannerPhase::Gone));
    };

    let class = move || match phase.get() {
        BannerPhase::Shown => "cookie-banner show",
        _ => "cookie-banner",
    };
    let style = move || match phase.get() {
        BannerPhase::Leaving => format!("animation: {};", slide_animation(true)),
        BannerPhase::Gone => "display: none;".to_string(),
        _ => String::new(),
    };

    view! {
        <div id="cookieBanner" class=class style=style role="dialog" aria-live="polite">
            <p>"We use cookies to improve your experience. By continuing to browse, you agree to our use of cookies."</p>
            <button id="acceptCookies" class="btn btn-primary" on:click=accept>"Accept"</button>
        </div>
    }
}

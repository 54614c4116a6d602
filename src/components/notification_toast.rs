//! Notification Toast Component
//!
//! Renders the current notification and dismisses it after the configured
//! duration with a slide-out animation.

use leptos::prelude::*;
use leptos_autoplay::Delay;
use storefront_core::notification::{slide_animation, EXIT_ANIMATION_MS};

use crate::context::use_app_context;

const TOAST_STYLE: &str = "position: fixed; top: 20px; right: 20px; padding: 16px 24px; color: white; \
    border-radius: 8px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); z-index: 10000; max-width: 400px; \
    font-size: 14px; font-weight: 500;";

#[component]
pub fn NotificationToast() -> impl IntoView {
    let ctx = use_app_context();
    let (leaving, set_leaving) = signal(false);
    let dismiss_timer = Delay::new();
    let remove_timer = Delay::new();
    let duration = ctx.with_config(|c| c.notification_duration_ms);

    // Restart the timers whenever a new toast replaces the current one
    Effect::new(move |_| {
        let Some(id) = ctx.notification.with(|n| n.as_ref().map(|n| n.id)) else {
            return;
        };
        set_leaving.set(false);
        remove_timer.cancel();
        dismiss_timer.schedule(duration, move || {
            set_leaving.set(true);
            remove_timer.schedule(EXIT_ANIMATION_MS, move || ctx.dismiss(id));
        });
    });

    move || {
        ctx.notification.get().map(|toast| {
            let animation = slide_animation(leaving.get());
            let style = format!(
                "{} background-color: {}; animation: {};",
                TOAST_STYLE,
                toast.kind.background(),
                animation
            );
            view! {
                <div class=toast.kind.css_class() style=style role="status">
                    {toast.message}
                </div>
            }
        })
    }
}

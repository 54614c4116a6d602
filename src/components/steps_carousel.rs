//! Steps Carousel Component
//!
//! "How it works" slides driven by pagination dots and auto-advance.

use leptos::prelude::*;
use leptos_autoplay::use_autoplay;
use storefront_core::Carousel;

use crate::context::use_app_context;
use crate::models::Step;

#[component]
pub fn StepsCarousel(steps: Vec<Step>) -> impl IntoView {
    let ctx = use_app_context();
    let count = steps.len();
    let (carousel, set_carousel) = signal(Carousel::new(count));

    if count > 0 {
        let period = ctx.with_config(|c| c.step_interval_ms);
        use_autoplay(period, move || set_carousel.update(|c| c.next()));
    }

    let active_class = move |base: &'static str, i: usize| {
        if carousel.get().is_active(i) { format!("{} active", base) } else { base.to_string() }
    };

    view! {
        <div class="steps-carousel">
            {steps.into_iter().enumerate().map(|(i, step)| view! {
                <div class=move || active_class("step-slide", i)>
                    <span class="step-number">{i + 1}</span>
                    <h3>{step.title}</h3>
                    <p>{step.description}</p>
                </div>
            }).collect_view()}
            <div class="pagination">
                {(0..count).map(|i| view! {
                    <button
                        class=move || active_class("pagination-dot", i)
                        aria-label=format!("Show step {}", i + 1)
                        on:click=move |_| set_carousel.update(|c| c.show(i))
                    ></button>
                }).collect_view()}
            </div>
        </div>
    }
}

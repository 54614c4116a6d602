//! Testimonials Carousel Component
//!
//! Prev/next buttons plus auto-advance.

use leptos::prelude::*;
use leptos_autoplay::use_autoplay;
use storefront_core::Carousel;

use crate::context::use_app_context;
use crate::models::Testimonial;

#[component]
pub fn TestimonialsCarousel(testimonials: Vec<Testimonial>) -> impl IntoView {
    let ctx = use_app_context();
    let (carousel, set_carousel) = signal(Carousel::new(testimonials.len()));

    if !testimonials.is_empty() {
        let period = ctx.with_config(|c| c.testimonial_interval_ms);
        use_autoplay(period, move || set_carousel.update(|c| c.next()));
    }

    view! {
        <div class="testimonials-carousel">
            <button class="carousel-btn prev" aria-label="Previous testimonial" on:click=move |_| set_carousel.update(|c| c.prev())>
                "‹"
            </button>
            {testimonials.into_iter().enumerate().map(|(i, t)| view! {
                <blockquote class=move || if carousel.get().is_active(i) { "testimonial-slide active" } else { "testimonial-slide" }>
                    <p class="testimonial-quote">{t.quote}</p>
                    <footer>
                        <span class="testimonial-author">{t.author}</span>
                        {t.role.map(|role| view! { <span class="testimonial-role">{role}</span> })}
                    </footer>
                </blockquote>
            }).collect_view()}
            <button class="carousel-btn next" aria-label="Next testimonial" on:click=move |_| set_carousel.update(|c| c.next())>
                "›"
            </button>
        </div>
    }
}

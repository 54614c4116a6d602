//! Business Site Component
//!
//! Landing page: navigation, hero, steps, testimonials and contact form.

use leptos::prelude::*;
use storefront_core::NotificationKind;

use crate::commands;
use crate::components::contact_form::ContactForm;
use crate::components::nav_bar::NavBar;
use crate::components::reveal::Reveal;
use crate::components::steps_carousel::StepsCarousel;
use crate::components::testimonials_carousel::TestimonialsCarousel;
use crate::context::use_app_context;
use crate::models::SiteContent;

#[component]
pub fn BusinessPage() -> impl IntoView {
    let ctx = use_app_context();
    let content = commands::load_site_content().unwrap_or_else(|e| {
        tracing::error!(error = %e, "site content unavailable");
        ctx.notify("Some content could not be loaded.", NotificationKind::Error);
        SiteContent::default()
    });
    let SiteContent { title, nav, testimonials, steps } = content;

    view! {
        <header class="site-header">
            <NavBar title=title.clone() links=nav />
        </header>
        <main>
            <section id="home" class="hero">
                <h1>{title}</h1>
                <a href="#contact" class="btn btn-primary">"Get in touch"</a>
            </section>
            <Reveal class="section">
                <section id="how-it-works">
                    <h2>"How it works"</h2>
                    <StepsCarousel steps=steps />
                </section>
            </Reveal>
            <Reveal class="section">
                <section id="testimonials">
                    <h2>"What our clients say"</h2>
                    <TestimonialsCarousel testimonials=testimonials />
                </section>
            </Reveal>
            <Reveal class="section">
                <section id="contact">
                    <h2>"Contact us"</h2>
                    <ContactForm />
                </section>
            </Reveal>
        </main>
    }
}

//! Storefront Frontend Entry Point

mod models;
mod commands;
mod context;
mod store;
mod components;
mod app;
mod logging;

use app::App;
use leptos::prelude::*;
use storefront_core::SiteConfig;

fn main() {
    console_error_panic_hook::set_once();

    // Config decides the log level, so its errors are reported after logging is up
    let (config, config_error) = match commands::load_site_config() {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };
    if let Err(e) = logging::init_logging(&config.log_level) {
        web_sys::console::error_1(&format!("[LOG] {}", e).into());
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "using default site config");
    }

    let page = commands::current_page();
    mount_to_body(move || view! { <App config=config page=page /> });
}

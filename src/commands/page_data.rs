//! Page Data Commands
//!
//! Reads the JSON blocks a page may embed (`<script type="application/json">`)
//! and falls back to the bundled assets.

use storefront_core::{Catalog, SiteConfig};

use crate::models::{Page, SiteContent};

pub const SITE_CONFIG_ID: &str = "site-config";
pub const MENU_DATA_ID: &str = "menu-data";
pub const SITE_CONTENT_ID: &str = "site-content";

const BUNDLED_MENU: &str = include_str!("../../assets/menu.json");
const BUNDLED_CONTENT: &str = include_str!("../../assets/site.json");

/// Text of an embedded script block, if the page has one
fn embedded_json(id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

/// Page kind from `<body data-page="...">`
pub fn current_page() -> Page {
    let attr = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute("data-page"));
    Page::from_attr(attr.as_deref())
}

/// Site config; a missing block means defaults, a malformed one is an error
pub fn load_site_config() -> Result<SiteConfig, String> {
    match embedded_json(SITE_CONFIG_ID) {
        Some(json) => SiteConfig::from_json(&json).map_err(|e| e.to_string()),
        None => Ok(SiteConfig::default()),
    }
}

/// Menu catalog from the page, or the bundled menu
pub fn load_catalog() -> Result<Catalog, String> {
    let json = embedded_json(MENU_DATA_ID);
    Catalog::from_json(json.as_deref().unwrap_or(BUNDLED_MENU)).map_err(|e| e.to_string())
}

/// Business site content from the page, or the bundled content
pub fn load_site_content() -> Result<SiteContent, String> {
    let json = embedded_json(SITE_CONTENT_ID);
    serde_json::from_str(json.as_deref().unwrap_or(BUNDLED_CONTENT))
        .map_err(|e| format!("Failed to parse site content: {}", e))
}

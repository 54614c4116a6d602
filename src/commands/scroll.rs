//! Smooth Scroll Commands
//!
//! In-page anchor navigation that accounts for the fixed header.

use storefront_core::navigation::scroll_offset;
use storefront_core::AnchorTarget;
use wasm_bindgen::JsCast;

/// Handle a document click if it landed on an in-page anchor.
///
/// Returns true when the default navigation should be prevented.
pub fn handle_anchor_click(ev: &web_sys::MouseEvent, header_offset: f64) -> bool {
    let Some(anchor) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("a[href^='#']").ok().flatten())
    else {
        return false;
    };
    let href = anchor.get_attribute("href").unwrap_or_default();

    match AnchorTarget::parse(&href) {
        AnchorTarget::Skip => true,
        AnchorTarget::Element(id) => scroll_to_element(&id, header_offset),
        AnchorTarget::External => false,
    }
}

/// Smooth-scroll so the element sits just below the header; false if not found
pub fn scroll_to_element(id: &str, header_offset: f64) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        tracing::debug!(id, "anchor target not found");
        return false;
    };

    let top = target.get_bounding_client_rect().top();
    let page_y = window.scroll_y().unwrap_or(0.0);

    let options = web_sys::ScrollToOptions::new();
    options.set_top(scroll_offset(top, page_y, header_offset));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

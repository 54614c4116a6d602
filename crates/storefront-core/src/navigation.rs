//! Navigation Helpers
//!
//! Mobile menu toggle state and in-page anchor scrolling.

use percent_encoding::percent_decode_str;

/// Hamburger menu state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// What clicking an `href` should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorTarget {
    /// Bare "#": swallow the click
    Skip,
    /// "#id": scroll to the element with this id
    Element(String),
    /// Not an in-page anchor; let the browser handle it
    External,
}

impl AnchorTarget {
    pub fn parse(href: &str) -> Self {
        match href.strip_prefix('#') {
            Some("") => AnchorTarget::Skip,
            Some(fragment) => {
                AnchorTarget::Element(percent_decode_str(fragment).decode_utf8_lossy().into_owned())
            }
            None => AnchorTarget::External,
        }
    }
}

/// Document scroll position that puts an element just below the fixed header
pub fn scroll_offset(element_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    element_top + page_y_offset - header_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_menu_toggle() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_anchor_parse() {
        assert_eq!(AnchorTarget::parse("#"), AnchorTarget::Skip);
        assert_eq!(AnchorTarget::parse("#contact"), AnchorTarget::Element("contact".to_string()));
        assert_eq!(AnchorTarget::parse("#caf%C3%A9"), AnchorTarget::Element("café".to_string()));
        assert_eq!(AnchorTarget::parse("/menu.html"), AnchorTarget::External);
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(250.0, 1000.0, 80.0), 1170.0);
        assert_eq!(scroll_offset(-40.0, 500.0, 0.0), 460.0);
    }
}

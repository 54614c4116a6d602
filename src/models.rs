//! Frontend Models
//!
//! Page selection and the static content shown by the business site widgets.

use serde::{Deserialize, Serialize};

/// Which site the current document hosts (from `<body data-page="...">`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Business,
    Menu,
}

impl Page {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("menu") => Page::Menu,
            _ => Page::Business,
        }
    }
}

/// Customer quote in the testimonials carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// One slide of the "how it works" steps carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

/// Navigation link; `href` is usually an in-page anchor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Business site content (bundled `assets/site.json` unless overridden)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

//! Menu Filter Engine
//!
//! Combines the active category selector and the free-text search term into
//! a visible/hidden partition of the catalog plus an empty-state flag.
//!
//! `compute_visibility` is pure: the presentation layer calls it once per
//! input event with the whole `FilterState` and applies the result.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CategoryId};

/// Token used by the "All" filter button
pub const ALL_TOKEN: &str = "all";

/// Which categories are eligible for display
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategorySelector {
    /// No category restriction
    #[default]
    All,
    Category(CategoryId),
}

impl CategorySelector {
    /// Parse a filter button token; "all" is the sentinel, anything else an id
    pub fn from_token(token: &str) -> Self {
        if token == ALL_TOKEN {
            CategorySelector::All
        } else {
            CategorySelector::Category(CategoryId::new(token))
        }
    }

    pub fn token(&self) -> &str {
        match self {
            CategorySelector::All => ALL_TOKEN,
            CategorySelector::Category(id) => id.as_str(),
        }
    }

    pub fn matches(&self, id: &CategoryId) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Category(selected) => selected == id,
        }
    }
}

/// The user's current filter inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    active_category: CategorySelector,
    /// Raw search text as typed
    search_term: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_category(&self) -> &CategorySelector {
        &self.active_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Switch category. Always clears the search term.
    pub fn select_category(&mut self, selector: CategorySelector) {
        self.active_category = selector;
        self.search_term.clear();
    }

    pub fn set_search_term(&mut self, raw: impl Into<String>) {
        self.search_term = raw.into();
    }

    /// Trimmed, lowercased search term used for matching
    pub fn normalized_term(&self) -> String {
        self.search_term.trim().to_lowercase()
    }
}

/// Visibility of one category and its items, in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryVisibility {
    pub id: CategoryId,
    pub visible: bool,
    /// Parallel to the category's items
    pub items: Vec<bool>,
}

/// Derived visibility for a whole catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityResult {
    pub categories: Vec<CategoryVisibility>,
    pub any_visible: bool,
}

impl VisibilityResult {
    fn entry(&self, id: &CategoryId) -> Option<&CategoryVisibility> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Unknown ids are reported hidden
    pub fn is_category_visible(&self, id: &CategoryId) -> bool {
        self.entry(id).is_some_and(|c| c.visible)
    }

    pub fn is_item_visible(&self, id: &CategoryId, index: usize) -> bool {
        self.entry(id)
            .and_then(|c| c.items.get(index).copied())
            .unwrap_or(false)
    }

    pub fn visible_item_count(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.items.iter().filter(|v| **v).count())
            .sum()
    }

    pub fn visible_categories(&self) -> impl Iterator<Item = &CategoryId> {
        self.categories.iter().filter(|c| c.visible).map(|c| &c.id)
    }
}

/// Compute which categories and items are shown for the given filter state.
///
/// Never fails: an unknown category id or an empty catalog simply yields
/// nothing visible.
pub fn compute_visibility(catalog: &Catalog, state: &FilterState) -> VisibilityResult {
    let term = state.normalized_term();

    let categories: Vec<CategoryVisibility> = catalog
        .categories()
        .iter()
        .map(|category| {
            if !state.active_category.matches(category.id()) {
                return CategoryVisibility {
                    id: category.id().clone(),
                    visible: false,
                    items: vec![false; category.items().len()],
                };
            }

            let items: Vec<bool> = category
                .items()
                .iter()
                .map(|item| item.matches_normalized(&term))
                .collect();
            CategoryVisibility {
                id: category.id().clone(),
                visible: items.iter().any(|v| *v),
                items,
            }
        })
        .collect();

    let any_visible = categories.iter().any(|c| c.visible);
    let result = VisibilityResult { categories, any_visible };

    tracing::trace!(
        category = state.active_category.token(),
        term = %term,
        visible_items = result.visible_item_count(),
        any_visible,
        "menu visibility computed"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCategory;

    /// Appetizers: Soup, Salad; Mains: Pasta
    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            MenuCategory::new("Appetizers".into(), "Appetizers")
                .with_item("Soup", "chicken soup")
                .with_item("Salad", "greek salad"),
            MenuCategory::new("Mains".into(), "Mains")
                .with_item("Pasta", "tomato pasta"),
        ])
        .expect("unique ids")
    }

    fn state(category: &str, term: &str) -> FilterState {
        let mut state = FilterState::new();
        state.select_category(CategorySelector::from_token(category));
        state.set_search_term(term);
        state
    }

    #[test]
    fn test_all_with_empty_term_shows_everything() {
        let result = compute_visibility(&sample_catalog(), &state("all", ""));

        assert_eq!(result.visible_item_count(), 3);
        assert!(result.is_category_visible(&"Appetizers".into()));
        assert!(result.is_category_visible(&"Mains".into()));
        assert!(result.any_visible);
    }

    #[test]
    fn test_category_selection_hides_other_categories() {
        let result = compute_visibility(&sample_catalog(), &state("Mains", ""));

        assert!(result.is_item_visible(&"Mains".into(), 0));
        assert!(!result.is_category_visible(&"Appetizers".into()));
        assert!(!result.is_item_visible(&"Appetizers".into(), 0));
        assert!(!result.is_item_visible(&"Appetizers".into(), 1));
        assert_eq!(result.visible_item_count(), 1);
        assert!(result.any_visible);
    }

    #[test]
    fn test_search_across_all_categories() {
        let result = compute_visibility(&sample_catalog(), &state("all", "soup"));

        assert!(result.is_item_visible(&"Appetizers".into(), 0));
        assert!(!result.is_item_visible(&"Appetizers".into(), 1));
        assert!(result.is_category_visible(&"Appetizers".into()));
        assert!(!result.is_category_visible(&"Mains".into()));
        assert_eq!(result.visible_item_count(), 1);
        assert!(result.any_visible);
    }

    #[test]
    fn test_search_outside_selected_category_is_empty() {
        let result = compute_visibility(&sample_catalog(), &state("Mains", "soup"));

        assert_eq!(result.visible_item_count(), 0);
        assert_eq!(result.visible_categories().count(), 0);
        assert!(!result.any_visible);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let result = compute_visibility(&sample_catalog(), &state("Desserts", ""));

        assert_eq!(result.visible_item_count(), 0);
        assert!(!result.any_visible);
        // Every catalog category still reported, in order
        let ids: Vec<&str> = result.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["Appetizers", "Mains"]);
    }

    #[test]
    fn test_empty_catalog() {
        let result = compute_visibility(&Catalog::empty(), &FilterState::new());
        assert!(result.categories.is_empty());
        assert!(!result.any_visible);
    }

    #[test]
    fn test_empty_category_is_hidden() {
        let catalog = Catalog::new(vec![
            MenuCategory::new("drinks".into(), "Drinks"),
            MenuCategory::new("mains".into(), "Mains").with_item("Pasta", "tomato pasta"),
        ])
        .unwrap();
        let result = compute_visibility(&catalog, &FilterState::new());

        assert!(!result.is_category_visible(&"drinks".into()));
        assert!(result.is_category_visible(&"mains".into()));
    }

    #[test]
    fn test_whitespace_term_matches_everything() {
        let result = compute_visibility(&sample_catalog(), &state("Appetizers", "   \t "));
        assert!(result.is_item_visible(&"Appetizers".into(), 0));
        assert!(result.is_item_visible(&"Appetizers".into(), 1));
    }

    #[test]
    fn test_term_is_trimmed_and_case_insensitive() {
        let result = compute_visibility(&sample_catalog(), &state("all", "  GREEK "));
        assert!(result.is_item_visible(&"Appetizers".into(), 1));
        assert_eq!(result.visible_item_count(), 1);
    }

    #[test]
    fn test_matches_description_text() {
        let result = compute_visibility(&sample_catalog(), &state("all", "tomato"));
        assert!(result.is_item_visible(&"Mains".into(), 0));
        assert_eq!(result.visible_item_count(), 1);
    }

    #[test]
    fn test_deterministic_and_idempotent() {
        let catalog = sample_catalog();
        let snapshot = catalog.clone();
        let filter = state("all", "sa");

        let first = compute_visibility(&catalog, &filter);
        let second = compute_visibility(&catalog, &filter);
        assert_eq!(first, second);
        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn test_category_visible_iff_some_item_visible() {
        let catalog = sample_catalog();
        for category in ["all", "Appetizers", "Mains", "Desserts"] {
            for term in ["", "soup", "sa", "pasta", "zzz", " A "] {
                let result = compute_visibility(&catalog, &state(category, term));
                for entry in &result.categories {
                    assert_eq!(entry.visible, entry.items.iter().any(|v| *v), "{category}/{term}");
                }
                assert_eq!(result.any_visible, result.visible_item_count() > 0);
            }
        }
    }

    #[test]
    fn test_non_selected_categories_fully_hidden() {
        let catalog = sample_catalog();
        for term in ["", "soup", "a"] {
            let result = compute_visibility(&catalog, &state("Appetizers", term));
            let mains = result.categories.iter().find(|c| c.id.as_str() == "Mains").unwrap();
            assert!(!mains.visible);
            assert!(mains.items.iter().all(|v| !*v));
        }
    }

    #[test]
    fn test_select_category_clears_search() {
        let mut filter = FilterState::new();
        filter.set_search_term("soup");
        filter.select_category(CategorySelector::from_token("Mains"));

        assert_eq!(filter.search_term(), "");
        assert_eq!(filter.active_category(), &CategorySelector::Category("Mains".into()));

        filter.select_category(CategorySelector::All);
        assert_eq!(filter.active_category().token(), "all");
    }
}

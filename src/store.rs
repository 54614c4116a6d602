//! Menu Page State Store
//!
//! One `FilterState` per page session, held in a reactive_stores Store.
//! Visibility is never stored: it is derived from the store by a Memo.

use leptos::prelude::*;
use reactive_stores::Store;
use storefront_core::{compute_visibility, Catalog, CategorySelector, FilterState, VisibilityResult};

/// Menu page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MenuState {
    /// Loaded once, read-only afterwards
    pub catalog: Catalog,
    pub filter: FilterState,
}

impl MenuState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: FilterState::new(),
        }
    }
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Category button activated (also clears the search box)
pub fn store_select_category(store: &MenuStore, selector: CategorySelector) {
    store.filter().write().select_category(selector);
}

/// Search text changed
pub fn store_set_search(store: &MenuStore, raw: String) {
    store.filter().write().set_search_term(raw);
}

pub fn store_active_category(store: &MenuStore) -> CategorySelector {
    store.filter().read().active_category().clone()
}

pub fn store_search_term(store: &MenuStore) -> String {
    store.filter().read().search_term().to_string()
}

/// Recomputes visibility whenever the filter changes
pub fn visibility_memo(store: MenuStore) -> Memo<VisibilityResult> {
    Memo::new(move |_| {
        let catalog = store.catalog().read();
        let filter = store.filter().read();
        let result = compute_visibility(&catalog, &filter);
        tracing::debug!(
            category = filter.active_category().token(),
            term = filter.search_term(),
            visible_items = result.visible_item_count(),
            "menu filters applied"
        );
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::no_results::empty_state_shown;
    use storefront_core::{CategoryId, MenuCategory};

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            MenuCategory::new("soups".into(), "Soups").with_item("Tomato Soup", "Slow-roasted tomatoes"),
            MenuCategory::new("mains".into(), "Mains")
                .with_item("Steak", "Grilled sirloin")
                .with_item("Risotto", "Wild mushrooms"),
        ])
        .unwrap()
    }

    fn setup() -> (Owner, MenuStore, Memo<VisibilityResult>) {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(MenuState::new(sample_catalog()));
        let visibility = visibility_memo(store);
        (owner, store, visibility)
    }

    fn expected(store: &MenuStore) -> VisibilityResult {
        let catalog = store.catalog().read_untracked();
        let filter = store.filter().read_untracked();
        compute_visibility(&catalog, &filter)
    }

    #[test]
    fn test_search_updates_visibility() {
        let (_owner, store, visibility) = setup();
        assert_eq!(visibility.get_untracked().visible_item_count(), 3);

        store_set_search(&store, "SOUP ".to_string());
        let result = visibility.get_untracked();
        assert_eq!(result, expected(&store));
        assert_eq!(result.visible_item_count(), 1);
        assert!(result.is_category_visible(&CategoryId::from("soups")));
        assert!(!result.is_category_visible(&CategoryId::from("mains")));
    }

    #[test]
    fn test_select_category_clears_search_in_one_write() {
        let (_owner, store, visibility) = setup();
        store_set_search(&store, "soup".to_string());
        assert_eq!(visibility.get_untracked().visible_item_count(), 1);

        store_select_category(&store, CategorySelector::from_token("mains"));
        assert_eq!(store_search_term(&store), "");
        assert_eq!(store_active_category(&store), CategorySelector::from_token("mains"));

        // The memo sees the new category together with the cleared term
        let result = visibility.get_untracked();
        assert_eq!(result, expected(&store));
        assert_eq!(result.visible_item_count(), 2);
        assert!(!result.is_category_visible(&CategoryId::from("soups")));
    }

    #[test]
    fn test_empty_state_follows_any_visible() {
        let (_owner, store, visibility) = setup();
        assert!(!visibility.with_untracked(empty_state_shown));

        store_set_search(&store, "pizza".to_string());
        assert!(visibility.with_untracked(empty_state_shown));

        store_set_search(&store, String::new());
        assert!(!visibility.with_untracked(empty_state_shown));

        store_select_category(&store, CategorySelector::from_token("brunch"));
        let result = visibility.get_untracked();
        assert!(!result.any_visible);
        assert!(visibility.with_untracked(empty_state_shown));
    }
}

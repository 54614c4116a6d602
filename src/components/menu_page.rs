//! Menu Page Component
//!
//! Builds the page's menu store, derives visibility and wires the filter
//! inputs to the category/item views.

use leptos::prelude::*;
use reactive_stores::Store;
use storefront_core::{Catalog, CategorySelector, MenuCategory, NotificationKind};

use crate::commands;
use crate::components::filter_bar::{FilterBar, FilterButton};
use crate::components::menu_category_view::MenuCategoryView;
use crate::components::no_results::NoResults;
use crate::components::search_box::SearchBox;
use crate::context::use_app_context;
use crate::store::{visibility_memo, MenuState};

fn filter_buttons(categories: &[MenuCategory]) -> Vec<FilterButton> {
    let mut buttons = vec![(CategorySelector::All, "All".to_string())];
    buttons.extend(categories.iter().map(|c| {
        let label = if c.title().is_empty() { c.id().to_string() } else { c.title().to_string() };
        (CategorySelector::Category(c.id().clone()), label)
    }));
    buttons
}

#[component]
pub fn MenuPage() -> impl IntoView {
    let ctx = use_app_context();

    let catalog = commands::load_catalog().unwrap_or_else(|e| {
        tracing::error!(error = %e, "menu data unavailable");
        ctx.notify("The menu could not be loaded.", NotificationKind::Error);
        Catalog::empty()
    });
    tracing::info!(
        items = catalog.item_count(),
        categories = catalog.categories().len(),
        "menu system initialized"
    );

    let buttons = filter_buttons(catalog.categories());
    let categories = catalog.categories().to_vec();

    let store = Store::new(MenuState::new(catalog));
    provide_context(store);
    let visibility = visibility_memo(store);

    view! {
        <header class="menu-header">
            <h1>"Our Menu"</h1>
        </header>
        <div class="menu-controls">
            <FilterBar buttons=buttons />
            <SearchBox />
        </div>
        <main id="menu-container" class="menu-container">
            {categories.into_iter().map(|category| view! {
                <MenuCategoryView category=category visibility=visibility />
            }).collect_view()}
            <NoResults visibility=visibility />
        </main>
    }
}

//! Filter Bar Component
//!
//! "All" plus one button per menu category. Exactly one button is active.

use leptos::prelude::*;
use storefront_core::CategorySelector;

use crate::store::{store_active_category, store_select_category, use_menu_store};

/// (selector, label) for each button, "All" first
pub type FilterButton = (CategorySelector, String);

#[component]
pub fn FilterBar(buttons: Vec<FilterButton>) -> impl IntoView {
    let store = use_menu_store();

    view! {
        <div class="filter-buttons" role="toolbar">
            {buttons.into_iter().map(|(selector, label)| {
                let token = selector.token().to_string();
                let for_class = selector.clone();
                let is_active = move || store_active_category(&store) == for_class;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        data-category=token
                        on:click=move |_| store_select_category(&store, selector.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

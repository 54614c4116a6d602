//! Search Box Component
//!
//! Free-text menu search. Cleared whenever the category changes.

use leptos::prelude::*;

use crate::store::{store_search_term, store_set_search, use_menu_store};

#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_menu_store();

    view! {
        <div class="search-container">
            <input
                type="search"
                id="searchInput"
                placeholder="Search menu items..."
                autocomplete="off"
                prop:value=move || store_search_term(&store)
                on:input=move |ev| store_set_search(&store, event_target_value(&ev))
            />
        </div>
    }
}

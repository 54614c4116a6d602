//! No Results Component
//!
//! Empty-state notice, rendered only while nothing is visible.

use leptos::prelude::*;
use storefront_core::VisibilityResult;

/// The notice is shown exactly when no item survives the filters
pub fn empty_state_shown(visibility: &VisibilityResult) -> bool {
    !visibility.any_visible
}

#[component]
pub fn NoResults(visibility: Memo<VisibilityResult>) -> impl IntoView {
    view! {
        <Show when=move || visibility.with(empty_state_shown)>
            <div class="no-results">
                <h2>"No items found"</h2>
                <p>"Try adjusting your search or filter criteria"</p>
            </div>
        </Show>
    }
}

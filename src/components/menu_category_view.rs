//! Menu Category Component
//!
//! A category section and its items; visibility comes from the filter memo.

use leptos::prelude::*;
use storefront_core::{MenuCategory, VisibilityResult};

use crate::components::reveal::{Reveal, MENU_ROOT_MARGIN};

#[component]
pub fn MenuCategoryView(
    category: MenuCategory,
    visibility: Memo<VisibilityResult>,
) -> impl IntoView {
    let id = category.id().clone();
    let category_id = id.clone();
    let section_class = move || {
        if visibility.with(|v| v.is_category_visible(&category_id)) {
            "menu-category"
        } else {
            "menu-category hidden"
        }
    };

    view! {
        <section class=section_class data-category=id.to_string()>
            <h2 class="category-title">{category.title().to_string()}</h2>
            <div class="menu-items">
                {category.items().iter().enumerate().map(|(index, item)| {
                    let item_category = id.clone();
                    let name = item.name().to_string();
                    let data_name = name.clone();
                    let price = item.price().map(str::to_string);
                    let description = item.description().to_string();
                    let item_class = move || {
                        if visibility.with(|v| v.is_item_visible(&item_category, index)) {
                            "menu-item"
                        } else {
                            "menu-item hidden"
                        }
                    };
                    view! {
                        <article class=item_class data-name=data_name>
                            <Reveal root_margin=MENU_ROOT_MARGIN class="menu-item-body">
                                <div class="menu-item-header">
                                    <h3>{name}</h3>
                                    {price.map(|p| view! { <span class="price">{p}</span> })}
                                </div>
                                <p class="description">{description}</p>
                            </Reveal>
                        </article>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

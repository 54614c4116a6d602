//! Navigation Bar Component
//!
//! Site links with a hamburger toggle for small screens. The mobile menu
//! closes on link click and on any click outside the toggle and links.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use storefront_core::MobileMenu;
use wasm_bindgen::JsCast;

use crate::models::NavLink;

/// Hamburger bar transforms (top, middle opacity, bottom) while open
const OPEN_SPANS: [&str; 3] = [
    "transform: rotate(45deg) translate(5px, 5px);",
    "opacity: 0;",
    "transform: rotate(-45deg) translate(7px, -6px);",
];

#[component]
pub fn NavBar(
    #[prop(into)] title: String,
    links: Vec<NavLink>,
) -> impl IntoView {
    let (menu, set_menu) = signal(MobileMenu::default());
    let toggle_ref = NodeRef::<html::Button>::new();
    let links_ref = NodeRef::<html::Ul>::new();

    let outside_click = window_event_listener(ev::click, move |ev| {
        if !menu.get_untracked().is_open() {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let inside = |node: Option<web_sys::Node>| node.is_some_and(|n| n.contains(Some(&target)));
        let in_toggle = inside(toggle_ref.get_untracked().map(Into::into));
        let in_links = inside(links_ref.get_untracked().map(Into::into));
        if !in_toggle && !in_links {
            set_menu.update(|m| m.close());
        }
    });
    on_cleanup(move || outside_click.remove());

    let span_style = move |i: usize| if menu.get().is_open() { OPEN_SPANS[i] } else { "" };

    view! {
        <nav class="navbar">
            <a href="#" class="logo">{title}</a>
            <button
                node_ref=toggle_ref
                class="mobile-menu-toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || menu.get().is_open().to_string()
                on:click=move |_| set_menu.update(|m| m.toggle())
            >
                <span style=move || span_style(0)></span>
                <span style=move || span_style(1)></span>
                <span style=move || span_style(2)></span>
            </button>
            <ul
                node_ref=links_ref
                class=move || if menu.get().is_open() { "nav-links active" } else { "nav-links" }
            >
                {links.into_iter().map(|link| view! {
                    <li>
                        <a href=link.href on:click=move |_| set_menu.update(|m| m.close())>
                            {link.label}
                        </a>
                    </li>
                }).collect_view()}
            </ul>
        </nav>
    }
}

//! Reveal Component
//!
//! Fades and slides its children in the first time they scroll into view.

use leptos::html;
use leptos::prelude::*;

use crate::commands::{self, RevealObserver};

/// Root margin used on the business site
pub const SITE_ROOT_MARGIN: &str = "0px 0px -100px 0px";
/// Root margin used on the menu page
pub const MENU_ROOT_MARGIN: &str = "0px 0px -50px 0px";

const HIDDEN_STYLE: &str = "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease;";
const SHOWN_STYLE: &str = "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;";

/// Wrapper that adds `animate-in` once visible
#[component]
pub fn Reveal(
    #[prop(into, optional)] class: String,
    #[prop(default = SITE_ROOT_MARGIN)] root_margin: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);
    let observer = StoredValue::new_local(None::<RevealObserver>);

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else { return };
        if observer.with_value(|o| o.is_some()) || revealed.get_untracked() {
            return;
        }
        match commands::observe_once(&element, 0.1, root_margin, move || set_revealed.set(true)) {
            Ok(handle) => observer.set_value(Some(handle)),
            Err(e) => {
                // No observer support: show immediately
                tracing::warn!(error = %e, "scroll reveal disabled");
                set_revealed.set(true);
            }
        }
    });

    let class = move || {
        if revealed.get() {
            format!("{} animate-in", class)
        } else {
            class.clone()
        }
    };

    view! {
        <div
            node_ref=node_ref
            class=class
            style=move || if revealed.get() { SHOWN_STYLE } else { HIDDEN_STYLE }
        >
            {children()}
        </div>
    }
}

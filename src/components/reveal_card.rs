//! Reveal Card Component
//!
//! Plain container that fades in the first time it scrolls into view.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_scroll_reveal;

#[component]
pub fn RevealCard(#[prop(into)] class: String, children: Children) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    use_scroll_reveal(node_ref);

    view! {
        <div class=class node_ref=node_ref>
            {children()}
        </div>
    }
}

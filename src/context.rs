//! Application Context
//!
//! Controller state created once at startup and provided via the Leptos
//! Context API, so every component reaches the same instances.

use leptos::html;
use leptos::prelude::*;
use web_sys::Element;

use crate::controllers::{FilterState, NavState, Pagination, ScrollReveal};
use crate::fallback;

/// App-wide controller handles
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active project category filter
    pub filter: RwSignal<FilterState>,
    /// "See more" expansion of the project grid
    pub pagination: RwSignal<Pagination>,
    /// Mobile menu, active link, navbar elevation
    pub nav: RwSignal<NavState>,
    /// Shared intersection observer (None if the browser refused one)
    reveal: StoredValue<Option<ScrollReveal>, LocalStorage>,
}

impl AppContext {
    pub fn new() -> Self {
        let reveal = match ScrollReveal::new() {
            Ok(reveal) => Some(reveal),
            Err(e) => {
                web_sys::console::error_1(
                    &format!("[REVEAL] IntersectionObserver unavailable, revealing immediately: {:?}", e).into(),
                );
                None
            }
        };

        Self {
            filter: RwSignal::new(FilterState::default()),
            pagination: RwSignal::new(Pagination::new(fallback::projects().len())),
            nav: RwSignal::new(NavState::default()),
            reveal: StoredValue::new_local(reveal),
        }
    }

    /// Register an element for scroll-triggered reveal
    pub fn observe(&self, element: &Element) {
        self.reveal.with_value(|reveal| match reveal {
            Some(reveal) => reveal.observe(element),
            None => ScrollReveal::reveal_now(element),
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Observe the referenced element once it is mounted
pub fn use_scroll_reveal(node_ref: NodeRef<html::Div>) {
    let ctx = use_app_context();
    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            ctx.observe(&el);
        }
    });
}

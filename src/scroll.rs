//! In-page anchor scrolling shared by the navbar and the hero buttons.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// Scroll position that puts a section's top edge just below the fixed navbar
pub fn section_scroll_top(section_top: i32, nav_height: i32) -> f64 {
    (section_top - nav_height).max(0) as f64
}

/// Smooth-scroll to the section with `id`. Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let doc = document();
    let Some(target) = doc
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let nav_height = doc
        .query_selector(".navbar")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height())
        .unwrap_or(0);

    let options = ScrollToOptions::new();
    options.set_top(section_scroll_top(target.offset_top(), nav_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

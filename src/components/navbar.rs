//! Navbar Component
//!
//! Section links with smooth scrolling, active-section highlighting and the
//! mobile hamburger menu.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::context::use_app_context;
use crate::controllers::SectionBounds;
use crate::scroll::scroll_to_section;

/// (section id, link label)
const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("achievements", "Achievements"),
    ("services", "Services"),
    ("contact", "Contact"),
];

const ELEVATED_SHADOW: &str = "box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);";
const RESTING_SHADOW: &str = "box-shadow: 0 1px 2px 0 rgba(0, 0, 0, 0.05);";

/// Current bounds of every `section[id]` on the page
fn read_sections() -> Vec<SectionBounds> {
    let Ok(nodes) = document().query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
        .collect()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();

    // Bound once for the lifetime of the page
    let _ = window_event_listener(ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        let sections = read_sections();
        ctx.nav.update(|nav| nav.on_scroll(scroll_y, &sections));
    });

    let follow_link = move |ev: MouseEvent, id: &'static str| {
        ev.prevent_default();
        ctx.nav.update(|nav| nav.close_menu());
        scroll_to_section(id);
    };

    let menu_open = move || ctx.nav.with(|nav| nav.is_menu_open());

    view! {
        <nav
            class="navbar"
            style=move || if ctx.nav.with(|nav| nav.is_elevated()) { ELEVATED_SHADOW } else { RESTING_SHADOW }
        >
            <div class="nav-container">
                <a href="#home" class="nav-logo" on:click=move |ev| follow_link(ev, "home")>
                    "Portfolio"
                </a>

                <ul class=move || if menu_open() { "nav-menu active" } else { "nav-menu" }>
                    {NAV_LINKS.iter().map(|&(id, label)| {
                        let is_active = move || ctx.nav.with(|nav| nav.is_active(id));
                        view! {
                            <li class="nav-item">
                                <a
                                    href=format!("#{}", id)
                                    class=move || if is_active() { "nav-link active" } else { "nav-link" }
                                    on:click=move |ev| follow_link(ev, id)
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>

                <div
                    class=move || if menu_open() { "hamburger active" } else { "hamburger" }
                    on:click=move |_| ctx.nav.update(|nav| nav.toggle_menu())
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}

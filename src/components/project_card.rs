//! Project Card Component
//!
//! One card in the projects grid. Display follows the active filter and the
//! grid's expansion state.

use leptos::html;
use leptos::prelude::*;

use crate::context::{use_app_context, use_scroll_reveal};
use crate::controllers::is_displayed;
use crate::models::Project;
use crate::render::{card_is_shown, ProjectCardModel};

#[component]
pub fn ProjectCard(card: ProjectCardModel) -> impl IntoView {
    let ctx = use_app_context();
    let node_ref = NodeRef::<html::Div>::new();
    use_scroll_reveal(node_ref);

    let slot = card.slot;
    let base_class = card.base_class();
    let icon = card.placeholder_icon();
    let image = card.image().map(str::to_string);
    let Project { title, description, category, tags, github_url, live_url, .. } = card.project;
    let alt = title.clone();

    let displayed = move || {
        let filter = ctx.filter.with(|f| f.active());
        ctx.pagination.with(|p| is_displayed(slot, filter, p))
    };
    // Only `show` is toggled so classes added by the reveal observer persist
    let shown = move || ctx.pagination.with(|p| card_is_shown(slot, p));

    // Broken images are hidden so the placeholder icon shows through
    let (image_failed, set_image_failed) = signal(false);

    view! {
        <div
            node_ref=node_ref
            class=base_class
            class:show=shown
            data-category=category.as_str()
            style:display=move || if displayed() { "block" } else { "none" }
        >
            <div class="project-image">
                <div class="project-overlay">
                    {github_url.map(|url| view! {
                        <a href=url target="_blank" class="project-link">
                            <i class="fab fa-github"></i>
                        </a>
                    })}
                    {live_url.map(|url| view! {
                        <a href=url target="_blank" class="project-link">
                            <i class="fas fa-external-link-alt"></i>
                        </a>
                    })}
                </div>
                {image.map(|src| view! {
                    <img
                        src=src
                        alt=alt
                        loading="lazy"
                        style:display=move || if image_failed.get() { "none" } else { "" }
                        on:error=move |_| set_image_failed.set(true)
                    />
                })}
                <div class="image-placeholder">
                    <i class=icon></i>
                </div>
            </div>
            <div class="project-info">
                <h3 class="project-title">{title}</h3>
                <p class="project-description">{description}</p>
                <div class="project-tags">
                    {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

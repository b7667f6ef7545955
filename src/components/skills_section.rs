//! Skills Section Component
//!
//! Skills grouped by category, one card per non-empty group.

use leptos::prelude::*;

use super::RevealCard;
use crate::fallback;
use crate::models::Skill;
use crate::render::{group_skills, skill_icon, SkillGroup};
use crate::store::{use_portfolio_store, PortfolioStateStoreFields};

#[component]
fn SkillItem(skill: Skill) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let icon = skill_icon(&skill).to_string();

    view! {
        <div
            class="skill-item"
            style:transform=move || if hovered.get() { "translateX(10px) scale(1.05)" } else { "translateX(0) scale(1)" }
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <i class=icon></i>
            <span>{skill.name}</span>
        </div>
    }
}

#[component]
fn SkillCategoryCard(group: SkillGroup) -> impl IntoView {
    view! {
        <RevealCard class="skill-category">
            <h3 class="category-title">
                <i class=group.icon></i>
                {group.title}
            </h3>
            <div class="skill-items">
                {group.skills.into_iter().map(|skill| view! { <SkillItem skill=skill /> }).collect_view()}
            </div>
        </RevealCard>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let store = use_portfolio_store();
    let groups = Memo::new(move |_| {
        store.skills().with(|state| group_skills(&state.resolve(fallback::skills)))
    });

    view! {
        <section id="skills" class="skills">
            <div class="container">
                <h2 class="section-title">"Skills & Technologies"</h2>
                <div class="skills-container">
                    {move || groups.get().into_iter().map(|group| view! { <SkillCategoryCard group=group /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

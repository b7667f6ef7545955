//! Achievements Section Component

use leptos::prelude::*;

use super::RevealCard;
use crate::fallback;
use crate::models::Achievement;
use crate::render::achievement_icon;
use crate::store::{use_portfolio_store, PortfolioStateStoreFields};

#[component]
fn AchievementCard(achievement: Achievement) -> impl IntoView {
    let icon = achievement_icon(&achievement).to_string();

    view! {
        <RevealCard class="achievement-card">
            <div class="achievement-icon">
                <i class=icon></i>
            </div>
            <h3 class="achievement-title">{achievement.title}</h3>
            <p class="achievement-description">{achievement.description}</p>
            <span class="achievement-date">{achievement.date}</span>
        </RevealCard>
    }
}

#[component]
pub fn AchievementsSection() -> impl IntoView {
    let store = use_portfolio_store();
    let achievements = Memo::new(move |_| {
        store.achievements().with(|state| state.resolve(fallback::achievements))
    });

    view! {
        <section id="achievements" class="achievements">
            <div class="container">
                <h2 class="section-title">"Achievements"</h2>
                <div class="achievements-grid">
                    {move || achievements.get().into_iter().map(|achievement| view! {
                        <AchievementCard achievement=achievement />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

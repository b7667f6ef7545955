//! Portfolio App
//!
//! Root component: resolves configuration, provides context, loads remote
//! content and lays out the page.

use std::future::Future;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{load_content, ContentOutcome};
use crate::components::{
    About, AchievementsSection, ContactSection, Footer, Hero, Navbar, ProjectsSection, Services,
    SkillsSection,
};
use crate::config::SiteConfig;
use crate::context::AppContext;
use crate::models::{Achievement, Project, Skill};
use crate::store::{ContentSink, PortfolioState, PortfolioStore};

/// Delay before the page fades in
const FADE_IN_DELAY_MS: u32 = 100;

/// Await the three loads concurrently. Each outcome is applied as soon as it
/// settles; a failure in one leaves the others untouched.
pub async fn load_portfolio_with<S: ContentSink>(
    sink: &S,
    projects: impl Future<Output = ContentOutcome<Project>>,
    skills: impl Future<Output = ContentOutcome<Skill>>,
    achievements: impl Future<Output = ContentOutcome<Achievement>>,
) {
    let projects = async { sink.apply_projects(projects.await) };
    let skills = async { sink.apply_skills(skills.await) };
    let achievements = async { sink.apply_achievements(achievements.await) };

    futures::join!(projects, skills, achievements);
}

async fn load_portfolio(config: SiteConfig, store: PortfolioStore) {
    load_portfolio_with(
        &store,
        load_content::<Project>(&config),
        load_content::<Skill>(&config),
        load_content::<Achievement>(&config),
    )
    .await;
    web_sys::console::log_1(&"[APP] Content loading settled".into());
}

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load();
    let store = Store::new(PortfolioState::default());

    // Provide context to all children
    provide_context(config.clone());
    provide_context(store);
    provide_context(AppContext::new());

    spawn_local(load_portfolio(config, store));

    let (visible, set_visible) = signal(false);
    Timeout::new(FADE_IN_DELAY_MS, move || set_visible.set(true)).forget();

    view! {
        <div
            class="page"
            style=move || format!(
                "opacity: {}; transition: opacity 0.5s ease;",
                if visible.get() { 1 } else { 0 }
            )
        >
            <Navbar />
            <Hero />
            <About />
            <ProjectsSection />
            <SkillsSection />
            <AchievementsSection />
            <Services />
            <ContactSection />
            <Footer />
        </div>
    }
}

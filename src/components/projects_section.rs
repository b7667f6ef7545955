//! Projects Section Component
//!
//! Filter bar, project grid and the "see more" control.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::ProjectCard;
use crate::context::use_app_context;
use crate::controllers::{ProjectFilter, Toggle, SCROLL_INTO_VIEW_DELAY_MS};
use crate::fallback;
use crate::render::project_cards;
use crate::store::{use_portfolio_store, PortfolioStateStoreFields};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let store = use_portfolio_store();
    let ctx = use_app_context();

    let cards = Memo::new(move |_| {
        project_cards(store.projects().with(|state| state.resolve(fallback::projects)))
    });

    // A new collection starts collapsed
    Effect::new(move |_| {
        let count = cards.with(|c| c.len());
        ctx.pagination.update(|p| p.reset(count));
    });

    let see_more_ref = NodeRef::<html::Button>::new();

    let on_see_more = move |_| {
        let Some(Toggle::Expanding(steps)) = ctx.pagination.try_update(|p| p.toggle()) else {
            return;
        };
        for step in steps {
            Timeout::new(step.delay_ms, move || {
                ctx.pagination.update(|p| {
                    p.reveal(&step);
                });
            })
            .forget();
        }
        Timeout::new(SCROLL_INTO_VIEW_DELAY_MS, move || {
            if let Some(button) = see_more_ref.get_untracked() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Nearest);
                button.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
        .forget();
    };

    let see_more_class = move || {
        ctx.pagination.with(|p| {
            let mut class = String::from("btn see-more-btn");
            if p.is_expanded() {
                class.push_str(" expanded");
            }
            if !p.has_overflow() {
                class.push_str(" hidden");
            }
            class
        })
    };

    view! {
        <section id="projects" class="projects">
            <div class="container">
                <h2 class="section-title">"Featured Projects"</h2>

                <div class="projects-filter">
                    {ProjectFilter::OPTIONS.iter().map(|&filter| {
                        let is_active = move || ctx.filter.with(|f| f.is_active(filter));
                        view! {
                            <button
                                class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                                data-filter=filter.as_str()
                                on:click=move |_| ctx.filter.update(|f| {
                                    f.select(filter);
                                })
                            >
                                {filter.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="projects-grid">
                    {move || cards.get().into_iter().map(|card| view! { <ProjectCard card=card /> }).collect_view()}
                </div>

                <div class="see-more-container">
                    <button
                        id="see-more-projects"
                        node_ref=see_more_ref
                        class=see_more_class
                        on:click=on_see_more
                    >
                        <span class="btn-text">{move || ctx.pagination.with(|p| p.label())}</span>
                    </button>
                </div>
            </div>
        </section>
    }
}

//! Content Store
//!
//! Uses Leptos reactive_stores for per-content-type reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ContentOutcome;
use crate::models::{Achievement, Project, Skill};

/// Which source currently populates one content type
#[derive(Debug, Clone, PartialEq)]
pub enum ContentState<T> {
    /// Page just loaded, static content is showing
    NotFetched,
    /// Remote source was empty or unreachable
    Fallback,
    /// Remote items replaced the static content
    Dynamic(Vec<T>),
}

impl<T> Default for ContentState<T> {
    fn default() -> Self {
        ContentState::NotFetched
    }
}

impl<T: Clone> ContentState<T> {
    /// Apply a load outcome. A dynamic collection is never downgraded.
    pub fn apply(&mut self, outcome: ContentOutcome<T>) {
        match outcome {
            ContentOutcome::Dynamic(items) => *self = ContentState::Dynamic(items),
            ContentOutcome::Fallback => {
                if !self.is_dynamic() {
                    *self = ContentState::Fallback;
                }
            }
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, ContentState::Dynamic(_))
    }

    /// Items to render: either the remote collection or the static one, never both
    pub fn resolve(&self, fallback: impl FnOnce() -> Vec<T>) -> Vec<T> {
        match self {
            ContentState::Dynamic(items) => items.clone(),
            ContentState::NotFetched | ContentState::Fallback => fallback(),
        }
    }
}

/// Page content with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PortfolioState {
    pub projects: ContentState<Project>,
    pub skills: ContentState<Skill>,
    pub achievements: ContentState<Achievement>,
}

/// Type alias for the store
pub type PortfolioStore = Store<PortfolioState>;

/// Get the content store from context
pub fn use_portfolio_store() -> PortfolioStore {
    expect_context::<PortfolioStore>()
}

/// Where settled load outcomes are written, one content type at a time
pub trait ContentSink {
    fn apply_projects(&self, outcome: ContentOutcome<Project>);
    fn apply_skills(&self, outcome: ContentOutcome<Skill>);
    fn apply_achievements(&self, outcome: ContentOutcome<Achievement>);
}

impl ContentSink for PortfolioStore {
    fn apply_projects(&self, outcome: ContentOutcome<Project>) {
        self.projects().write().apply(outcome);
    }

    fn apply_skills(&self, outcome: ContentOutcome<Skill>) {
        self.skills().write().apply(outcome);
    }

    fn apply_achievements(&self, outcome: ContentOutcome<Achievement>) {
        self.achievements().write().apply(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn static_items() -> Vec<&'static str> {
        vec!["static-a", "static-b"]
    }

    #[test]
    fn test_fallback_keeps_static_content() {
        let mut state = ContentState::<&'static str>::NotFetched;
        assert_eq!(state.resolve(static_items), static_items());

        state.apply(ContentOutcome::Fallback);
        assert_eq!(state, ContentState::Fallback);
        assert_eq!(state.resolve(static_items), static_items());
    }

    #[test]
    fn test_dynamic_replaces_static_content() {
        let mut state = ContentState::NotFetched;
        state.apply(ContentOutcome::Dynamic(vec!["remote"]));
        assert_eq!(state.resolve(static_items), vec!["remote"]);
    }

    #[test]
    fn test_dynamic_never_downgraded() {
        let mut state = ContentState::Dynamic(vec!["remote"]);
        state.apply(ContentOutcome::Fallback);
        assert!(state.is_dynamic());
        assert_eq!(state.resolve(static_items), vec!["remote"]);
    }
}

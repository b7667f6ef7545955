//! Project category filter.

use crate::models::ProjectCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    /// Filter buttons, in display order
    pub const OPTIONS: [ProjectFilter; 5] = [
        ProjectFilter::All,
        ProjectFilter::Category(ProjectCategory::Web),
        ProjectFilter::Category(ProjectCategory::Mobile),
        ProjectFilter::Category(ProjectCategory::Api),
        ProjectFilter::Category(ProjectCategory::Other),
    ];

    pub fn matches(&self, category: ProjectCategory) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(wanted) => *wanted == category,
        }
    }

    /// Value of the button's `data-filter` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Category(c) => c.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Category(c) => c.label(),
        }
    }
}

/// The single active filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    active: ProjectFilter,
}

impl FilterState {
    pub fn active(&self) -> ProjectFilter {
        self.active
    }

    pub fn is_active(&self, filter: ProjectFilter) -> bool {
        self.active == filter
    }

    /// Make `filter` the only active one. Returns whether anything changed.
    pub fn select(&mut self, filter: ProjectFilter) -> bool {
        let changed = self.active != filter;
        self.active = filter;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all() {
        let state = FilterState::default();
        assert_eq!(state.active(), ProjectFilter::All);
        assert!(ProjectFilter::All.matches(ProjectCategory::Other));
    }

    #[test]
    fn test_exactly_one_active() {
        let mut state = FilterState::default();
        assert!(state.select(ProjectFilter::Category(ProjectCategory::Api)));
        let active: Vec<_> = ProjectFilter::OPTIONS.iter().filter(|f| state.is_active(**f)).collect();
        assert_eq!(active, vec![&ProjectFilter::Category(ProjectCategory::Api)]);

        assert!(!state.select(ProjectFilter::Category(ProjectCategory::Api)));
    }

    #[test]
    fn test_category_filter_matches_only_its_category() {
        let web = ProjectFilter::Category(ProjectCategory::Web);
        assert!(web.matches(ProjectCategory::Web));
        assert!(!web.matches(ProjectCategory::Mobile));
        assert_eq!(web.as_str(), "web");
    }
}

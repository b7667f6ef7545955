//! "See more projects" expansion.
//!
//! Expanding schedules a staggered reveal of the overflow cards. Each schedule
//! carries the generation it was issued in, so reveals that fire after a
//! collapse (or a re-render) are ignored.

use std::collections::BTreeSet;

use crate::render::PROJECTS_PER_PAGE;

/// Delay between consecutive overflow cards appearing
pub const REVEAL_STAGGER_MS: u32 = 100;
/// Wait before scrolling the control into view after expanding
pub const SCROLL_INTO_VIEW_DELAY_MS: u32 = 300;

const EXPAND_LABEL: &str = "See More Projects";
const COLLAPSE_LABEL: &str = "Show Less Projects";

/// One delayed reveal of an overflow card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub index: usize,
    pub delay_ms: u32,
    pub generation: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// Now expanded; run these reveals
    Expanding(Vec<RevealStep>),
    /// Now collapsed; overflow cards are already hidden
    Collapsed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    card_count: usize,
    expanded: bool,
    generation: u32,
    shown: BTreeSet<usize>,
}

impl Pagination {
    pub fn new(card_count: usize) -> Self {
        Self { card_count, ..Default::default() }
    }

    /// Start over for a freshly rendered collection
    pub fn reset(&mut self, card_count: usize) {
        self.card_count = card_count;
        self.expanded = false;
        self.generation = self.generation.wrapping_add(1);
        self.shown.clear();
    }

    pub fn overflow_count(&self) -> usize {
        self.card_count.saturating_sub(PROJECTS_PER_PAGE)
    }

    /// The control hides itself when there is nothing to expand
    pub fn has_overflow(&self) -> bool {
        self.overflow_count() > 0
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether an overflow card has been revealed
    pub fn is_shown(&self, index: usize) -> bool {
        self.shown.contains(&index)
    }

    pub fn label(&self) -> &'static str {
        if self.expanded {
            COLLAPSE_LABEL
        } else {
            EXPAND_LABEL
        }
    }

    pub fn toggle(&mut self) -> Toggle {
        self.generation = self.generation.wrapping_add(1);
        if self.expanded {
            self.expanded = false;
            self.shown.clear();
            return Toggle::Collapsed;
        }

        self.expanded = true;
        let generation = self.generation;
        let steps = (PROJECTS_PER_PAGE..self.card_count)
            .enumerate()
            .map(|(rank, index)| RevealStep {
                index,
                delay_ms: rank as u32 * REVEAL_STAGGER_MS,
                generation,
            })
            .collect();
        Toggle::Expanding(steps)
    }

    /// Apply a scheduled reveal. Stale steps are dropped.
    pub fn reveal(&mut self, step: &RevealStep) -> bool {
        if !self.expanded || step.generation != self.generation || step.index >= self.card_count {
            return false;
        }
        self.shown.insert(step.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(p: &mut Pagination) -> Vec<RevealStep> {
        match p.toggle() {
            Toggle::Expanding(steps) => steps,
            Toggle::Collapsed => panic!("expected expansion"),
        }
    }

    #[test]
    fn test_stagger_schedule() {
        let mut p = Pagination::new(6);
        let steps = expand(&mut p);

        let plan: Vec<_> = steps.iter().map(|s| (s.index, s.delay_ms)).collect();
        assert_eq!(plan, vec![(3, 0), (4, 100), (5, 200)]);
        assert_eq!(p.label(), "Show Less Projects");
    }

    #[test]
    fn test_collapse_hides_immediately() {
        let mut p = Pagination::new(5);
        for step in expand(&mut p) {
            assert!(p.reveal(&step));
        }
        assert!(p.is_shown(3) && p.is_shown(4));

        assert_eq!(p.toggle(), Toggle::Collapsed);
        assert!(!p.is_shown(3));
        assert!(!p.is_shown(4));
        assert_eq!(p.label(), "See More Projects");
    }

    #[test]
    fn test_late_reveal_after_collapse_ignored() {
        let mut p = Pagination::new(5);
        let steps = expand(&mut p);
        p.reveal(&steps[0]);
        p.toggle();

        assert!(!p.reveal(&steps[1]));
        assert!(!p.is_shown(4));
    }

    #[test]
    fn test_reset_invalidates_schedule() {
        let mut p = Pagination::new(5);
        let steps = expand(&mut p);
        p.reset(7);

        assert!(!p.is_expanded());
        assert!(!p.reveal(&steps[0]));
        assert_eq!(p.overflow_count(), 4);
    }

    #[test]
    fn test_no_overflow_disables_control() {
        assert!(!Pagination::new(3).has_overflow());
        assert!(!Pagination::new(0).has_overflow());
        assert!(Pagination::new(4).has_overflow());
    }
}

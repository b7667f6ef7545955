//! Project card display rule.
//!
//! Filtering and expansion are independent predicates; a card is displayed
//! when both allow it.

use super::{Pagination, ProjectFilter};
use crate::models::ProjectCategory;
use crate::render::PROJECTS_PER_PAGE;

/// Position and category of a rendered project card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub index: usize,
    pub category: ProjectCategory,
}

impl CardSlot {
    /// Hidden until the grid is expanded
    pub fn is_overflow(&self) -> bool {
        self.index >= PROJECTS_PER_PAGE
    }
}

pub fn is_displayed(slot: CardSlot, filter: ProjectFilter, pagination: &Pagination) -> bool {
    let paged_in = !slot.is_overflow() || pagination.is_shown(slot.index);
    filter.matches(slot.category) && paged_in
}

//! Rendering Helpers
//!
//! DOM-free preparation of collections for the section components.

use crate::controllers::{CardSlot, Pagination};
use crate::models::{Achievement, Project, ProjectCategory, Skill, SkillCategory};

/// Projects visible before "see more"
pub const PROJECTS_PER_PAGE: usize = 3;

pub const DEFAULT_SKILL_ICON: &str = "fas fa-code";
pub const DEFAULT_ACHIEVEMENT_ICON: &str = "fas fa-trophy";

/// Placeholder glyph for a project without an image
pub fn project_icon(category: ProjectCategory) -> &'static str {
    match category {
        ProjectCategory::Web => "fas fa-laptop-code",
        ProjectCategory::Mobile => "fas fa-mobile-alt",
        ProjectCategory::Api => "fas fa-server",
        ProjectCategory::Other => "fas fa-code",
    }
}

pub fn skill_icon(skill: &Skill) -> &str {
    skill.icon.as_deref().filter(|i| !i.is_empty()).unwrap_or(DEFAULT_SKILL_ICON)
}

pub fn achievement_icon(achievement: &Achievement) -> &str {
    achievement
        .icon
        .as_deref()
        .filter(|i| !i.is_empty())
        .unwrap_or(DEFAULT_ACHIEVEMENT_ICON)
}

/// One project card, positioned in the grid
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCardModel {
    pub slot: CardSlot,
    pub project: Project,
}

impl ProjectCardModel {
    /// Image to show, if the project has one
    pub fn image(&self) -> Option<&str> {
        self.project.image_url.as_deref().filter(|u| !u.is_empty())
    }

    pub fn placeholder_icon(&self) -> &'static str {
        project_icon(self.project.category)
    }

    /// Classes fixed for the card's lifetime. `show` is toggled separately.
    pub fn base_class(&self) -> &'static str {
        if self.slot.is_overflow() {
            "project-card project-hidden"
        } else {
            "project-card"
        }
    }
}

/// Whether an overflow card carries the `show` class
pub fn card_is_shown(slot: CardSlot, pagination: &Pagination) -> bool {
    slot.is_overflow() && pagination.is_shown(slot.index)
}

/// Position every project; cards past the first page are overflow
pub fn project_cards(projects: Vec<Project>) -> Vec<ProjectCardModel> {
    projects
        .into_iter()
        .enumerate()
        .map(|(index, project)| ProjectCardModel {
            slot: CardSlot { index, category: project.category },
            project,
        })
        .collect()
}

/// Skills of one category with its heading
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: Vec<Skill>,
}

fn category_heading(category: SkillCategory) -> (&'static str, &'static str) {
    match category {
        SkillCategory::Frontend => ("Frontend", "fas fa-code"),
        SkillCategory::Backend => ("Backend", "fas fa-server"),
        SkillCategory::Tools | SkillCategory::Uncategorized => ("Tools & Others", "fas fa-tools"),
    }
}

/// Group skills by category in fixed display order, skipping empty groups.
/// Order within a group follows arrival order.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup> {
    SkillCategory::DISPLAYED
        .iter()
        .filter_map(|&category| {
            let members: Vec<Skill> = skills
                .iter()
                .filter(|s| s.category == category)
                .cloned()
                .collect();
            if members.is_empty() {
                return None;
            }
            let (title, icon) = category_heading(category);
            Some(SkillGroup { category, title, icon, skills: members })
        })
        .collect()
}

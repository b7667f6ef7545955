//! UI Components
//!
//! Page sections and the cards they render.

mod achievements_section;
mod contact_form;
mod footer;
mod navbar;
mod project_card;
mod projects_section;
mod reveal_card;
mod skills_section;
mod static_sections;

pub use achievements_section::AchievementsSection;
pub use contact_form::ContactForm;
pub use footer::Footer;
pub use navbar::Navbar;
pub use project_card::ProjectCard;
pub use projects_section::ProjectsSection;
pub use reveal_card::RevealCard;
pub use skills_section::SkillsSection;
pub use static_sections::{About, ContactSection, Hero, Services};

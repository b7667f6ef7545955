//! Frontend Models
//!
//! Data structures matching the portfolio API payloads.

use serde::{Deserialize, Serialize};

/// Project category (drives filtering and the placeholder icon)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Api,
    #[serde(other)]
    Other,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Api,
        ProjectCategory::Other,
    ];

    /// Value used in `data-category` / `data-filter` attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Api => "api",
            ProjectCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::Api => "API",
            ProjectCategory::Other => "Other",
        }
    }
}

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: ProjectCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

/// Skill group. Group order on the page follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    #[serde(other)]
    Uncategorized,
}

impl SkillCategory {
    /// Groups rendered on the page, in display order
    pub const DISPLAYED: [SkillCategory; 3] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
    ];
}

/// Skill data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Achievement data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-form, displayed as-is
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Validated contact form payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_project_decodes_camel_case_and_defaults() {
        let json = r#"{
            "title": "Portfolio",
            "category": "web",
            "githubUrl": "https://github.com/me/portfolio"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.category, ProjectCategory::Web);
        assert_eq!(project.github_url.as_deref(), Some("https://github.com/me/portfolio"));
        assert!(project.tags.is_empty());
        assert!(project.image_url.is_none());
        assert_eq!(project.description, "");
    }

    #[test]
    fn test_unknown_categories_use_catch_all() {
        let project: Project =
            serde_json::from_str(r#"{"title":"CLI","category":"desktop"}"#).unwrap();
        assert_eq!(project.category, ProjectCategory::Other);

        let skill: Skill = serde_json::from_str(r#"{"name":"Go","category":"devops"}"#).unwrap();
        assert_eq!(skill.category, SkillCategory::Uncategorized);
    }

    #[test]
    fn test_contact_message_wire_shape() {
        let msg = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
        };
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"name":"Ada","email":"ada@example.com","message":"Hi"}"#
        );
    }
}

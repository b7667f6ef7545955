//! Content Source Adapter
//!
//! One read per content type per page load. Every failure and every empty
//! result collapses into `ContentOutcome::Fallback`.

use serde::de::DeserializeOwned;

use super::get_json;
use crate::config::SiteConfig;
use crate::models::{Achievement, Project, Skill, SkillCategory};

/// A collection type served by the portfolio API
pub trait ContentKind: DeserializeOwned + Sized + 'static {
    /// Path under the API base
    const ENDPOINT: &'static str;

    /// Drop entries the page cannot render
    fn normalize(items: Vec<Self>) -> Vec<Self> {
        items
    }
}

impl ContentKind for Project {
    const ENDPOINT: &'static str = "projects";
}

impl ContentKind for Skill {
    const ENDPOINT: &'static str = "skills";

    fn normalize(items: Vec<Self>) -> Vec<Self> {
        items
            .into_iter()
            .filter(|s| s.category != SkillCategory::Uncategorized)
            .collect()
    }
}

impl ContentKind for Achievement {
    const ENDPOINT: &'static str = "achievements";
}

/// Result of one content load
#[derive(Debug, Clone, PartialEq)]
pub enum ContentOutcome<T> {
    /// Keep the statically authored content
    Fallback,
    /// Render these items, in order
    Dynamic(Vec<T>),
}

impl<T: ContentKind> ContentOutcome<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        let items = T::normalize(items);
        if items.is_empty() {
            ContentOutcome::Fallback
        } else {
            ContentOutcome::Dynamic(items)
        }
    }
}

/// Fetch one content type. Never fails: errors are logged and become fallback.
pub async fn load_content<T: ContentKind>(config: &SiteConfig) -> ContentOutcome<T> {
    let url = config.endpoint(T::ENDPOINT);
    web_sys::console::log_1(&format!("[CONTENT] Loading {}", url).into());

    match get_json::<Vec<T>>(&url).await {
        Ok(items) => {
            let outcome = ContentOutcome::from_items(items);
            match &outcome {
                ContentOutcome::Dynamic(items) => web_sys::console::log_1(
                    &format!("[CONTENT] Loaded {} {}", items.len(), T::ENDPOINT).into(),
                ),
                ContentOutcome::Fallback => web_sys::console::log_1(
                    &format!("[CONTENT] No {} in database, keeping defaults", T::ENDPOINT).into(),
                ),
            }
            outcome
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[CONTENT] Error fetching {}: {}", T::ENDPOINT, e).into());
            ContentOutcome::Fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectCategory;

    fn skill(name: &str, category: SkillCategory) -> Skill {
        Skill { name: name.into(), category, icon: None }
    }

    #[test]
    fn test_empty_collection_is_fallback() {
        assert_eq!(ContentOutcome::<Project>::from_items(vec![]), ContentOutcome::Fallback);
        assert_eq!(ContentOutcome::<Achievement>::from_items(vec![]), ContentOutcome::Fallback);
    }

    #[test]
    fn test_non_empty_collection_keeps_order() {
        let projects: Vec<Project> = ["b", "a"]
            .iter()
            .map(|t| Project {
                title: t.to_string(),
                description: String::new(),
                category: ProjectCategory::Api,
                tags: vec![],
                image_url: None,
                github_url: None,
                live_url: None,
            })
            .collect();

        match ContentOutcome::from_items(projects) {
            ContentOutcome::Dynamic(items) => {
                assert_eq!(items[0].title, "b");
                assert_eq!(items[1].title, "a");
            }
            ContentOutcome::Fallback => panic!("expected dynamic"),
        }
    }

    #[test]
    fn test_uncategorized_skills_dropped() {
        let outcome = ContentOutcome::from_items(vec![
            skill("Rust", SkillCategory::Backend),
            skill("Juggling", SkillCategory::Uncategorized),
        ]);
        assert_eq!(outcome, ContentOutcome::Dynamic(vec![skill("Rust", SkillCategory::Backend)]));

        let only_unknown = ContentOutcome::from_items(vec![skill("Juggling", SkillCategory::Uncategorized)]);
        assert_eq!(only_unknown, ContentOutcome::Fallback);
    }
}

//! Static Fallback Content
//!
//! Authored content shown until (or instead of) remote content.

use crate::models::{Achievement, Project, ProjectCategory, Skill, SkillCategory};

fn project(
    title: &str,
    description: &str,
    category: ProjectCategory,
    tags: &[&str],
    github_url: Option<&str>,
    live_url: Option<&str>,
) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image_url: None,
        github_url: github_url.map(str::to_string),
        live_url: live_url.map(str::to_string),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            "E-Commerce Platform",
            "Full-featured online store with cart, checkout and an admin dashboard for inventory.",
            ProjectCategory::Web,
            &["React", "Node.js", "MongoDB"],
            Some("https://github.com"),
            Some("#"),
        ),
        project(
            "Fitness Tracker App",
            "Cross-platform mobile app for logging workouts and tracking progress over time.",
            ProjectCategory::Mobile,
            &["React Native", "Firebase"],
            Some("https://github.com"),
            None,
        ),
        project(
            "Payments Gateway API",
            "REST API handling payment intents, webhooks and idempotent retries.",
            ProjectCategory::Api,
            &["Express", "PostgreSQL", "Stripe"],
            Some("https://github.com"),
            None,
        ),
        project(
            "Task Management Dashboard",
            "Kanban-style board with drag and drop, labels and real-time collaboration.",
            ProjectCategory::Web,
            &["Vue", "Socket.io"],
            Some("https://github.com"),
            Some("#"),
        ),
        project(
            "Weather Companion",
            "Location-aware forecasts with offline caching and severe weather alerts.",
            ProjectCategory::Mobile,
            &["Flutter", "OpenWeather"],
            None,
            Some("#"),
        ),
        project(
            "Dotfiles Toolkit",
            "Scripts and configuration for bootstrapping a development machine.",
            ProjectCategory::Other,
            &["Shell", "Automation"],
            Some("https://github.com"),
            None,
        ),
    ]
}

fn skill(name: &str, category: SkillCategory, icon: &str) -> Skill {
    Skill {
        name: name.to_string(),
        category,
        icon: Some(icon.to_string()),
    }
}

pub fn skills() -> Vec<Skill> {
    vec![
        skill("HTML5", SkillCategory::Frontend, "fab fa-html5"),
        skill("CSS3", SkillCategory::Frontend, "fab fa-css3-alt"),
        skill("JavaScript", SkillCategory::Frontend, "fab fa-js"),
        skill("React", SkillCategory::Frontend, "fab fa-react"),
        skill("Node.js", SkillCategory::Backend, "fab fa-node-js"),
        skill("Python", SkillCategory::Backend, "fab fa-python"),
        skill("MongoDB", SkillCategory::Backend, "fas fa-database"),
        skill("Git", SkillCategory::Tools, "fab fa-git-alt"),
        skill("Docker", SkillCategory::Tools, "fab fa-docker"),
        skill("Figma", SkillCategory::Tools, "fab fa-figma"),
    ]
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            title: "Hackathon Winner".to_string(),
            description: "First place for an accessibility tool built in 48 hours.".to_string(),
            date: "2024".to_string(),
            icon: Some("fas fa-trophy".to_string()),
        },
        Achievement {
            title: "Cloud Certification".to_string(),
            description: "Certified cloud practitioner.".to_string(),
            date: "2023".to_string(),
            icon: Some("fas fa-certificate".to_string()),
        },
        Achievement {
            title: "Open Source Contributor".to_string(),
            description: "Merged contributions to several community projects.".to_string(),
            date: "2023".to_string(),
            icon: None,
        },
    ]
}

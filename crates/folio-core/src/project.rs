//! Project records - the fixed portfolio content rendered by the projects page

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};

/// A single portfolio item. Defined once at build time; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// An external action rendered in a project card footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub label: &'static str,
    pub url: String,
}

impl Project {
    /// Card actions, in render order: GitHub first, then Live Demo.
    /// A link is present if and only if its URL field is set.
    pub fn links(&self) -> Vec<ProjectLink> {
        let mut links = Vec::new();
        if let Some(url) = &self.github_url {
            links.push(ProjectLink {
                label: "GitHub",
                url: url.clone(),
            });
        }
        if let Some(url) = &self.live_url {
            links.push(ProjectLink {
                label: "Live Demo",
                url: url.clone(),
            });
        }
        links
    }

    /// First character of the title, shown on the placeholder tile when no
    /// image is set.
    pub fn initial(&self) -> char {
        self.title.chars().next().unwrap_or('?')
    }
}

/// Ordered project collection with unique ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectList {
    projects: Vec<Project>,
}

impl ProjectList {
    /// Validates id uniqueness; rejects the first duplicate found.
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut seen = Vec::with_capacity(projects.len());
        for project in &projects {
            if seen.contains(&project.id) {
                return Err(FolioError::DuplicateProjectId(project.id));
            }
            seen.push(project.id);
        }
        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// The portfolio content. Ids are unique by construction; the test suite
    /// re-checks through `new`.
    pub fn showcase() -> Self {
        Self {
            projects: showcase_records(),
        }
    }
}

fn showcase_records() -> Vec<Project> {
    fn tech(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    vec![
        Project {
            id: 1,
            title: "E-Commerce Platform".to_string(),
            description: "A full-stack e-commerce application with user authentication, \
                          shopping cart, and payment integration."
                .to_string(),
            technologies: tech(&["Next.js", "TypeScript", "Tailwind CSS", "Stripe"]),
            github_url: Some("https://github.com/yourusername/ecommerce".to_string()),
            live_url: Some("https://your-ecommerce-demo.com".to_string()),
            image_url: None,
        },
        Project {
            id: 2,
            title: "Task Management App".to_string(),
            description: "A collaborative task management tool with real-time updates and \
                          team collaboration features."
                .to_string(),
            technologies: tech(&["React", "Node.js", "MongoDB", "Socket.io"]),
            github_url: Some("https://github.com/yourusername/task-manager".to_string()),
            live_url: Some("https://your-task-app-demo.com".to_string()),
            image_url: None,
        },
        Project {
            id: 3,
            title: "Weather Dashboard".to_string(),
            description: "A beautiful weather dashboard that displays current conditions \
                          and forecasts for multiple cities."
                .to_string(),
            technologies: tech(&["React", "TypeScript", "OpenWeather API", "Chart.js"]),
            github_url: Some("https://github.com/yourusername/weather-dashboard".to_string()),
            live_url: Some("https://your-weather-demo.com".to_string()),
            image_url: None,
        },
        Project {
            id: 4,
            title: "Blog Platform".to_string(),
            description: "A modern blog platform with markdown support, syntax \
                          highlighting, and SEO optimization."
                .to_string(),
            technologies: tech(&["Next.js", "MDX", "Prisma", "PostgreSQL"]),
            github_url: Some("https://github.com/yourusername/blog-platform".to_string()),
            live_url: Some("https://your-blog-demo.com".to_string()),
            image_url: None,
        },
        Project {
            id: 5,
            title: "Social Media Analytics".to_string(),
            description: "Analytics dashboard for tracking social media engagement and \
                          performance metrics."
                .to_string(),
            technologies: tech(&["React", "Python", "Django", "Chart.js"]),
            github_url: Some("https://github.com/yourusername/social-analytics".to_string()),
            live_url: None,
            image_url: None,
        },
        Project {
            id: 6,
            title: "Recipe Finder".to_string(),
            description: "Discover recipes based on ingredients you have, with dietary \
                          filters and nutritional information."
                .to_string(),
            technologies: tech(&["Vue.js", "Node.js", "Express", "Spoonacular API"]),
            github_url: Some("https://github.com/yourusername/recipe-finder".to_string()),
            live_url: Some("https://your-recipe-demo.com".to_string()),
            image_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u32) -> Project {
        Project {
            id,
            title: "Sample".to_string(),
            description: "A sample project".to_string(),
            technologies: vec!["Rust".to_string()],
            github_url: None,
            live_url: None,
            image_url: None,
        }
    }

    #[test]
    fn test_showcase_ids_unique() {
        let showcase = ProjectList::showcase();
        assert!(ProjectList::new(showcase.projects().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = ProjectList::new(vec![sample(1), sample(2), sample(1)]);
        assert!(matches!(
            result,
            Err(FolioError::DuplicateProjectId(1))
        ));
    }

    #[test]
    fn test_links_both_urls() {
        let mut project = sample(1);
        project.github_url = Some("https://github.com/t/t".to_string());
        project.live_url = Some("https://demo.example.com".to_string());

        let links = project.links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].label, "GitHub");
        assert_eq!(links[1].label, "Live Demo");
    }

    #[test]
    fn test_links_github_only() {
        let mut project = sample(1);
        project.github_url = Some("https://github.com/t/t".to_string());

        let links = project.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label, "GitHub");
    }

    #[test]
    fn test_links_none() {
        assert!(sample(1).links().is_empty());
    }

    #[test]
    fn test_initial() {
        let project = sample(1);
        assert_eq!(project.initial(), 'S');
    }

    #[test]
    fn test_optional_urls_default_on_deserialize() {
        let json = r#"{
            "id": 7,
            "title": "Minimal",
            "description": "No links",
            "technologies": ["Rust"]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.github_url.is_none());
        assert!(project.live_url.is_none());
        assert!(project.image_url.is_none());
    }
}

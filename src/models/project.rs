//! Project records and category descriptors.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Classification tag on a project, used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    /// Browser-based applications
    Web,
    /// Mobile applications
    Mobile,
    /// Combined front-end and back-end work
    Fullstack,
}

impl ProjectCategory {
    /// The stable string value used in category tabs and the catalog file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Fullstack => "fullstack",
        }
    }
}

/// A single portfolio project.
///
/// Immutable display entity: loaded once from the embedded catalog and only
/// ever borrowed or cloned afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier within the catalog
    pub id: u32,
    /// Short display title
    pub title: String,
    /// One-or-two sentence card description
    pub description: String,
    /// Longer description shown in the detail popup
    pub full_description: String,
    /// Ordered list of technology names
    pub technologies: Vec<String>,
    /// Source repository URL
    pub github_url: String,
    /// Deployed application URL
    pub live_url: String,
    /// Classification used for filtering
    pub category: ProjectCategory,
}

impl Project {
    /// Validates a project record from the catalog.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            anyhow::bail!("Project {} has an empty title", self.id);
        }
        if self.technologies.is_empty() {
            anyhow::bail!("Project '{}' lists no technologies", self.title);
        }
        Ok(())
    }
}

/// A category filter tab: display label plus the category value it matches.
///
/// The tab at index 0 is the synthetic "All" entry with value `"all"`, which
/// matches every project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTab {
    /// Display label (e.g., "Web Apps")
    pub label: String,
    /// Category value matched against `Project::category` (or `"all"`)
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        Project {
            id: 1,
            title: "Weather Dashboard".to_string(),
            description: "Location-based forecasts".to_string(),
            full_description: "An elegant weather dashboard.".to_string(),
            technologies: vec!["React".to_string(), "Chart.js".to_string()],
            github_url: "https://github.com/example/weather".to_string(),
            live_url: "https://example-weather.herokuapp.com".to_string(),
            category: ProjectCategory::Web,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_project().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_title() {
        let mut project = sample_project();
        project.title = "  ".to_string();
        assert!(project.validate().is_err());
    }

    #[test]
    fn test_validate_no_technologies() {
        let mut project = sample_project();
        project.technologies.clear();
        assert!(project.validate().is_err());
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&ProjectCategory::Fullstack).unwrap();
        assert_eq!(json, "\"fullstack\"");

        let parsed: ProjectCategory = serde_json::from_str("\"mobile\"").unwrap();
        assert_eq!(parsed, ProjectCategory::Mobile);
    }

    #[test]
    fn test_category_as_str() {
        assert_eq!(ProjectCategory::Web.as_str(), "web");
        assert_eq!(ProjectCategory::Mobile.as_str(), "mobile");
        assert_eq!(ProjectCategory::Fullstack.as_str(), "fullstack");
    }
}

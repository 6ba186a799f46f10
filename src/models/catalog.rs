//! Static project catalog embedded in the binary.
//!
//! The catalog is the read-only collaborator behind the Projects page: an
//! ordered sequence of projects plus the ordered category tab descriptors.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;

use super::project::{CategoryTab, Project};

/// The full project catalog: projects in declaration order plus the fixed
/// category tab list ("All" first).
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectCatalog {
    /// Category tabs in display order; index 0 is always "All"
    pub categories: Vec<CategoryTab>,
    /// Projects in declaration order
    pub projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Loads and validates the embedded catalog.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("projects.json");
        let catalog: Self =
            serde_json::from_str(json_data).context("Failed to parse embedded project catalog")?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// Validates catalog invariants: the synthetic "All" tab at index 0,
    /// known category values on every other tab, and unique project ids.
    fn validate(&self) -> Result<()> {
        let Some(first) = self.categories.first() else {
            anyhow::bail!("Project catalog has no category tabs");
        };
        if first.value != "all" {
            anyhow::bail!(
                "First category tab must be the synthetic \"all\" entry, got \"{}\"",
                first.value
            );
        }

        for tab in &self.categories[1..] {
            let known = self
                .projects
                .iter()
                .any(|p| p.category.as_str() == tab.value);
            if !known {
                anyhow::bail!(
                    "Category tab \"{}\" matches no project category",
                    tab.value
                );
            }
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            project.validate()?;
            if !seen.insert(project.id) {
                anyhow::bail!("Duplicate project id: {}", project.id);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = ProjectCatalog::load().unwrap();
        assert!(!catalog.projects.is_empty());
        assert_eq!(catalog.categories[0].value, "all");
        assert_eq!(catalog.categories[0].label, "All");
    }

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = ProjectCatalog::load().unwrap();
        let mut seen = HashSet::new();
        for project in &catalog.projects {
            assert!(seen.insert(project.id), "duplicate id {}", project.id);
        }
    }

    #[test]
    fn test_every_tab_past_all_matches_some_project() {
        let catalog = ProjectCatalog::load().unwrap();
        for tab in &catalog.categories[1..] {
            assert!(
                catalog
                    .projects
                    .iter()
                    .any(|p| p.category.as_str() == tab.value),
                "tab {} matches nothing",
                tab.value
            );
        }
    }

    #[test]
    fn test_validate_rejects_unknown_tab() {
        let mut catalog = ProjectCatalog::load().unwrap();
        catalog.categories.push(CategoryTab {
            label: "Games".to_string(),
            value: "games".to_string(),
        });
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_all_tab() {
        let mut catalog = ProjectCatalog::load().unwrap();
        catalog.categories.remove(0);
        assert!(catalog.validate().is_err());
    }
}

//! Data models for the portfolio content.
//!
//! Models are loaded from static configuration at startup and are never
//! mutated by the UI; all filtering produces derived views.

pub mod catalog;
pub mod project;

// Re-export all model types
pub use catalog::ProjectCatalog;
pub use project::{CategoryTab, Project, ProjectCategory};

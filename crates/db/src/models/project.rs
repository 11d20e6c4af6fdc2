//! Project entity model and DTOs.

use forgeline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A fabrication project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// One of the closed category set (residential/commercial/custom/industrial).
    pub category: String,
    /// Ordered image URLs.
    pub images: Vec<String>,
    pub owner_id: Option<DbId>,
    /// One of draft/published/archived.
    pub status: String,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub owner_id: Option<DbId>,
}

/// DTO for updating an existing project. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
}

/// Filter for paged project listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub category: Option<String>,
    pub status: Option<String>,
    pub featured_only: bool,
}

//! Gallery item model and DTOs.

use forgeline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A showcase image set from the `gallery` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryItem {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub images: Vec<String>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a gallery item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGalleryItem {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// DTO for updating a gallery item.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGalleryItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
}

//! Profile entity model and DTOs.

use forgeline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A profile row from the `profiles` table.
///
/// One per authenticated identity, created lazily on first login.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub full_name: Option<String>,
    pub username: String,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfile {
    pub user_id: DbId,
    pub username: String,
    pub full_name: Option<String>,
}

/// DTO for updating a profile. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfile {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

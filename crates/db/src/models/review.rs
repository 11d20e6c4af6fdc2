//! Review entity model and DTOs.

use forgeline_core::status::ApprovalStatus;
use forgeline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer review row from the `reviews` table.
///
/// Moderation state is a nullable flag: `NULL` means pending, `true`
/// approved, `false` rejected. The flag is the storage format; use
/// [`Review::approval`] for the edge representation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    /// Nullable: anonymous reviews are allowed.
    pub user_id: Option<DbId>,
    pub project_id: Option<DbId>,
    /// 1 through 5, enforced by a DB CHECK and ingress validation.
    pub rating: i32,
    pub comment: Option<String>,
    pub is_approved: Option<bool>,
    pub created_at: Timestamp,
}

impl Review {
    pub fn approval(&self) -> ApprovalStatus {
        ApprovalStatus::from_flag(self.is_approved)
    }
}

/// DTO for submitting a review.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub user_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub rating: i32,
    pub comment: Option<String>,
}

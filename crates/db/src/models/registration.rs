//! Meeting registration / consultation request model and DTOs.

use forgeline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registration row from the `meeting_registrations` table.
///
/// Belongs to exactly one of a meeting or a project (consultation request).
/// The XOR is enforced by a DB CHECK and by ingress validation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MeetingRegistration {
    pub id: DbId,
    pub meeting_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    /// One of pending/approved/rejected.
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for submitting a registration or consultation request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRegistration {
    pub meeting_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

//! Contact message model and DTOs.

use forgeline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A contact-form submission from the `contact_messages` table.
///
/// `status` walks a simple mailbox state machine: new/read/replied/archived.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a contact message.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

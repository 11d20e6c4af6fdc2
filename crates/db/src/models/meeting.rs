//! Meeting entity model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use forgeline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An open-house or consultation meeting from the `meetings` table.
///
/// There is no remaining-spots column; availability is derived by counting
/// approved registrations against `spots`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Meeting {
    pub id: DbId,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub address: Option<String>,
    /// Total capacity.
    pub spots: i32,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A meeting together with its derived availability.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingWithAvailability {
    #[serde(flatten)]
    pub meeting: Meeting,
    /// `spots` minus approved registrations, floored at zero.
    pub remaining_spots: i32,
}

/// DTO for creating a meeting.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMeeting {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub address: Option<String>,
    pub spots: i32,
    pub description: Option<String>,
}

/// DTO for updating a meeting. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMeeting {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub spots: Option<i32>,
    pub description: Option<String>,
}

//! Repository for the `meetings` table.
//!
//! Availability is never stored: `remaining_spots` is always derived by
//! counting approved registrations against the meeting's capacity.

use chrono::NaiveDate;
use forgeline_core::types::DbId;
use sqlx::PgPool;

use crate::models::meeting::{CreateMeeting, Meeting, MeetingWithAvailability, UpdateMeeting};
use crate::models::registration::{CreateRegistration, MeetingRegistration};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, date, time, location, address, spots, description, created_at, updated_at";

const REGISTRATION_COLUMNS: &str =
    "id, meeting_id, project_id, name, email, phone, company, message, status, created_at";

/// Result of a registration attempt against a capacity-limited meeting.
#[derive(Debug)]
pub enum RegisterOutcome {
    Registered(MeetingRegistration),
    MeetingNotFound,
    /// All spots are taken by approved registrations.
    Full,
}

/// Provides CRUD and registration operations for meetings.
pub struct MeetingRepo;

impl MeetingRepo {
    /// Insert a new meeting, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMeeting) -> Result<Meeting, sqlx::Error> {
        let query = format!(
            "INSERT INTO meetings (title, date, time, location, address, spots, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Meeting>(&query)
            .bind(&input.title)
            .bind(input.date)
            .bind(input.time)
            .bind(&input.location)
            .bind(&input.address)
            .bind(input.spots)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a meeting by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Meeting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meetings WHERE id = $1");
        sqlx::query_as::<_, Meeting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List meetings on or after `today`, soonest first, each with its
    /// derived availability.
    pub async fn upcoming(
        pool: &PgPool,
        today: NaiveDate,
    ) -> Result<Vec<MeetingWithAvailability>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS},
                    GREATEST(spots - (
                        SELECT COUNT(*) FROM meeting_registrations r
                        WHERE r.meeting_id = meetings.id AND r.status = 'approved'
                    ), 0)::INT AS remaining_spots
             FROM meetings
             WHERE date >= $1
             ORDER BY date ASC, time ASC"
        );
        let rows = sqlx::query_as::<_, MeetingAvailabilityRow>(&query)
            .bind(today)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(MeetingAvailabilityRow::into_model).collect())
    }

    /// Update a meeting. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMeeting,
    ) -> Result<Option<Meeting>, sqlx::Error> {
        let query = format!(
            "UPDATE meetings SET
                title = COALESCE($2, title),
                date = COALESCE($3, date),
                time = COALESCE($4, time),
                location = COALESCE($5, location),
                address = COALESCE($6, address),
                spots = COALESCE($7, spots),
                description = COALESCE($8, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Meeting>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.date)
            .bind(input.time)
            .bind(&input.location)
            .bind(&input.address)
            .bind(input.spots)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Spots left on a meeting: capacity minus approved registrations,
    /// floored at zero. Returns `None` if the meeting does not exist.
    pub async fn remaining_spots(pool: &PgPool, id: DbId) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT GREATEST(spots - (
                 SELECT COUNT(*) FROM meeting_registrations r
                 WHERE r.meeting_id = meetings.id AND r.status = 'approved'
             ), 0)::INT
             FROM meetings WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Register for a meeting, atomically checking capacity.
    ///
    /// The meeting row is locked for the duration of the check so two
    /// concurrent registrations cannot both take the last spot. Capacity
    /// counts approved registrations; the new registration starts pending.
    pub async fn register(
        pool: &PgPool,
        meeting_id: DbId,
        input: &CreateRegistration,
    ) -> Result<RegisterOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let spots: Option<i32> =
            sqlx::query_scalar("SELECT spots FROM meetings WHERE id = $1 FOR UPDATE")
                .bind(meeting_id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(spots) = spots else {
            return Ok(RegisterOutcome::MeetingNotFound);
        };

        let approved: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM meeting_registrations
             WHERE meeting_id = $1 AND status = 'approved'",
        )
        .bind(meeting_id)
        .fetch_one(&mut *tx)
        .await?;

        if approved >= spots as i64 {
            return Ok(RegisterOutcome::Full);
        }

        let query = format!(
            "INSERT INTO meeting_registrations (meeting_id, name, email, phone, company, message)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {REGISTRATION_COLUMNS}"
        );
        let registration = sqlx::query_as::<_, MeetingRegistration>(&query)
            .bind(meeting_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.message)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(RegisterOutcome::Registered(registration))
    }
}

/// Flat row shape for the availability join; split back into the nested
/// model after fetching.
#[derive(sqlx::FromRow)]
struct MeetingAvailabilityRow {
    id: DbId,
    title: String,
    date: NaiveDate,
    time: chrono::NaiveTime,
    location: String,
    address: Option<String>,
    spots: i32,
    description: Option<String>,
    created_at: forgeline_core::types::Timestamp,
    updated_at: forgeline_core::types::Timestamp,
    remaining_spots: i32,
}

impl MeetingAvailabilityRow {
    fn into_model(self) -> MeetingWithAvailability {
        MeetingWithAvailability {
            meeting: Meeting {
                id: self.id,
                title: self.title,
                date: self.date,
                time: self.time,
                location: self.location,
                address: self.address,
                spots: self.spots,
                description: self.description,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            remaining_spots: self.remaining_spots,
        }
    }
}

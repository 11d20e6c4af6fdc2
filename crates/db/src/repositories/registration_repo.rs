//! Repository for the `meeting_registrations` table.
//!
//! Rows belong to exactly one of a meeting or a project; the project side
//! is a consultation request submitted from a project page. Meeting-bound
//! rows are created through `MeetingRepo::register` so the capacity check
//! stays atomic; this repository owns everything else.

use forgeline_core::types::DbId;
use sqlx::{FromRow, PgPool, Row};

use crate::models::registration::{CreateRegistration, MeetingRegistration};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, meeting_id, project_id, name, email, phone, company, message, status, created_at";

/// Provides CRUD operations for registrations and consultation requests.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Insert a consultation request bound to a project, returning the
    /// created row.
    pub async fn create_for_project(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateRegistration,
    ) -> Result<MeetingRegistration, sqlx::Error> {
        let query = format!(
            "INSERT INTO meeting_registrations (project_id, name, email, phone, company, message)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MeetingRegistration>(&query)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a registration by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MeetingRegistration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meeting_registrations WHERE id = $1");
        sqlx::query_as::<_, MeetingRegistration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of registrations, optionally filtered by status,
    /// newest first, with the exact total count.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        start: i64,
        end: i64,
    ) -> Result<(Vec<MeetingRegistration>, i64), sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, COUNT(*) OVER () AS total_count FROM meeting_registrations
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query(&query)
            .bind(status)
            .bind(end - start + 1)
            .bind(start)
            .fetch_all(pool)
            .await?;

        let total = match rows.first() {
            Some(row) => row.try_get::<i64, _>("total_count")?,
            None => {
                sqlx::query_scalar(
                    "SELECT COUNT(*) FROM meeting_registrations
                     WHERE ($1::TEXT IS NULL OR status = $1)",
                )
                .bind(status)
                .fetch_one(pool)
                .await?
            }
        };
        let registrations = rows
            .iter()
            .map(MeetingRegistration::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((registrations, total))
    }

    /// List all registrations for a meeting, oldest first.
    pub async fn list_for_meeting(
        pool: &PgPool,
        meeting_id: DbId,
    ) -> Result<Vec<MeetingRegistration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM meeting_registrations
             WHERE meeting_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, MeetingRegistration>(&query)
            .bind(meeting_id)
            .fetch_all(pool)
            .await
    }

    /// List all consultation requests for a project, newest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<MeetingRegistration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM meeting_registrations
             WHERE project_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, MeetingRegistration>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Set a registration's status. Returns the updated row, or `None` if
    /// the registration does not exist. Repeating a transition is a no-op
    /// success.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<MeetingRegistration>, sqlx::Error> {
        let query = format!(
            "UPDATE meeting_registrations SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MeetingRegistration>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Count approved registrations for a meeting.
    pub async fn count_approved_for_meeting(
        pool: &PgPool,
        meeting_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM meeting_registrations
             WHERE meeting_id = $1 AND status = 'approved'",
        )
        .bind(meeting_id)
        .fetch_one(pool)
        .await
    }
}

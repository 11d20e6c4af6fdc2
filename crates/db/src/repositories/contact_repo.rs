//! Repository for the `contact_messages` table.

use forgeline_core::types::DbId;
use sqlx::{FromRow, PgPool, Row};

use crate::models::contact::{ContactMessage, CreateContactMessage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, message, status, created_at, updated_at";

/// Provides CRUD operations for contact messages.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new message in `new` status, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (name, email, message)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a message by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_messages WHERE id = $1");
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of messages, optionally filtered by status, newest
    /// first, with the exact total count.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        start: i64,
        end: i64,
    ) -> Result<(Vec<ContactMessage>, i64), sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, COUNT(*) OVER () AS total_count FROM contact_messages
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
                    "SELECT COUNT(*) FROM contact_messages
                     WHERE ($1::TEXT IS NULL OR status = $1)",
                )
                .bind(status)
                .fetch_one(pool)
                .await?
            }
        };
        let messages = rows
            .iter()
            .map(ContactMessage::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((messages, total))
    }

    /// Set a message's mailbox status.
    ///
    /// Returns the updated row, or `None` if the message does not exist.
    /// Transitions are repeatable: archiving an archived message succeeds
    /// and leaves it archived.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query =
            format!("UPDATE contact_messages SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Count messages still in `new` status.
    pub async fn new_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages WHERE status = 'new'")
            .fetch_one(pool)
            .await
    }
}

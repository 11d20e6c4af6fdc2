//! Repository for the `reviews` table.
//!
//! Moderation state is the nullable `is_approved` flag: `NULL` is pending,
//! `true` approved, `false` rejected. Pending queries test `IS NULL`
//! exactly; a rejected review is never pending.

use forgeline_core::types::DbId;
use sqlx::{FromRow, PgPool, Row};

use crate::models::review::{CreateReview, Review};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, project_id, rating, comment, is_approved, created_at";

/// Provides CRUD and moderation operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review in pending state (`is_approved = NULL`),
    /// returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (user_id, project_id, rating, comment)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.user_id)
            .bind(input.project_id)
            .bind(input.rating)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// Find a review by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of approved reviews, newest first, with the exact
    /// total count of approved reviews.
    pub async fn list_approved(
        pool: &PgPool,
        start: i64,
        end: i64,
    ) -> Result<(Vec<Review>, i64), sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, COUNT(*) OVER () AS total_count FROM reviews
             WHERE is_approved = true
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query(&query)
            .bind(end - start + 1)
            .bind(start)
            .fetch_all(pool)
            .await?;

        let total = match rows.first() {
            Some(row) => row.try_get::<i64, _>("total_count")?,
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE is_approved = true")
                    .fetch_one(pool)
                    .await?
            }
        };
        let reviews = rows
            .iter()
            .map(Review::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((reviews, total))
    }

    /// List the moderation queue: reviews whose approval flag is unset,
    /// oldest first so the queue is worked in arrival order.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews WHERE is_approved IS NULL ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }

    /// List approved reviews for one project, newest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE project_id = $1 AND is_approved = true
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Set the approval flag (`true` to approve, `false` to reject).
    ///
    /// Returns the updated row, or `None` if the review does not exist.
    /// Repeating a decision is a no-op success.
    pub async fn set_approval(
        pool: &PgPool,
        id: DbId,
        approved: bool,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("UPDATE reviews SET is_approved = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(approved)
            .fetch_optional(pool)
            .await
    }

    /// Count reviews awaiting moderation.
    ///
    /// Tests `IS NULL` exactly: rejected reviews (`false`) are not pending.
    pub async fn pending_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE is_approved IS NULL")
            .fetch_one(pool)
            .await
    }

    /// Average rating of a project's approved reviews, if it has any.
    pub async fn average_rating(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT AVG(rating)::DOUBLE PRECISION FROM reviews
             WHERE project_id = $1 AND is_approved = true",
        )
        .bind(project_id)
        .fetch_one(pool)
        .await
    }
}

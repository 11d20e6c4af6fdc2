//! Repository for the `gallery` table.

use forgeline_core::types::DbId;
use sqlx::{FromRow, PgPool, Row};

use crate::models::gallery::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use crate::store::contains_pattern;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category, images, featured, created_at, updated_at";

/// Provides CRUD operations for gallery items.
pub struct GalleryRepo;

impl GalleryRepo {
    /// Insert a new gallery item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryItem,
    ) -> Result<GalleryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery (title, description, category, images)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    /// Find a gallery item by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery WHERE id = $1");
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of gallery items, newest first, with the exact total
    /// count for the filter.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
        featured_only: bool,
        start: i64,
        end: i64,
    ) -> Result<(Vec<GalleryItem>, i64), sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, COUNT(*) OVER () AS total_count FROM gallery
             WHERE ($1::TEXT IS NULL OR category = $1)
               AND (NOT $2 OR featured = true)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query(&query)
            .bind(category)
            .bind(featured_only)
            .bind(end - start + 1)
            .bind(start)
            .fetch_all(pool)
            .await?;

        let total = match rows.first() {
            Some(row) => row.try_get::<i64, _>("total_count")?,
            None => {
                sqlx::query_scalar(
                    "SELECT COUNT(*) FROM gallery
                     WHERE ($1::TEXT IS NULL OR category = $1)
                       AND (NOT $2 OR featured = true)",
                )
                .bind(category)
                .bind(featured_only)
                .fetch_one(pool)
                .await?
            }
        };
        let items = rows
            .iter()
            .map(GalleryItem::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((items, total))
    }

    /// Case-insensitive substring search over title and description.
    /// Newest first, no ranking.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        limit: i64,
    ) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let pattern = contains_pattern(term);
        let query = format!(
            "SELECT {COLUMNS} FROM gallery
             WHERE title ILIKE $1 OR description ILIKE $1
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(&pattern)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a gallery item. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                images = COALESCE($5, images)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.images)
            .fetch_optional(pool)
            .await
    }

    /// Flip the `featured` flag. Returns the updated row, or `None` if the
    /// item does not exist.
    pub async fn toggle_featured(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query =
            format!("UPDATE gallery SET featured = NOT featured WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a gallery item. Returns `true` if a row was removed.
    pub async fn remove(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

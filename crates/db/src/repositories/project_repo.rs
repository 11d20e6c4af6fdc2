//! Repository for the `projects` table.

use forgeline_core::types::DbId;
use sqlx::{FromRow, PgPool, Row};

use crate::models::project::{CreateProject, Project, ProjectFilter, UpdateProject};
use crate::store::contains_pattern;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, category, images, owner_id, status, featured, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project in `draft` status, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, category, images, owner_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.images)
            .bind(input.owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of projects matching a filter, newest first.
    ///
    /// Returns the page rows together with the exact total count of matching
    /// rows, obtained in the same round-trip via `COUNT(*) OVER ()`. A window
    /// past the last row still needs the exact count, so that case falls back
    /// to a dedicated count query.
    pub async fn list(
        pool: &PgPool,
        filter: &ProjectFilter,
        start: i64,
        end: i64,
    ) -> Result<(Vec<Project>, i64), sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, COUNT(*) OVER () AS total_count FROM projects
             WHERE ($1::TEXT IS NULL OR category = $1)
               AND ($2::TEXT IS NULL OR status = $2)
               AND (NOT $3 OR featured = true)
             ORDER BY created_at DESC
             LIMIT $4 OFFSET $5"
        );
        let rows = sqlx::query(&query)
            .bind(&filter.category)
            .bind(&filter.status)
            .bind(filter.featured_only)
            .bind(end - start + 1)
            .bind(start)
            .fetch_all(pool)
            .await?;

        let total = match rows.first() {
            Some(row) => row.try_get::<i64, _>("total_count")?,
            None => Self::count(pool, filter).await?,
        };
        let projects = rows
            .iter()
            .map(Project::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((projects, total))
    }

    /// Count projects matching a filter.
    pub async fn count(pool: &PgPool, filter: &ProjectFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM projects
             WHERE ($1::TEXT IS NULL OR category = $1)
               AND ($2::TEXT IS NULL OR status = $2)
               AND (NOT $3 OR featured = true)",
        )
        .bind(&filter.category)
        .bind(&filter.status)
        .bind(filter.featured_only)
        .fetch_one(pool)
        .await
    }

    /// List all projects owned by a user, newest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects WHERE owner_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over title, description, and
    /// category. Newest first, no ranking.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        limit: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let pattern = contains_pattern(term);
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE status = 'published'
               AND (title ILIKE $1 OR description ILIKE $1 OR category ILIKE $1)
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&pattern)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                images = COALESCE($5, images)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.images)
            .fetch_optional(pool)
            .await
    }

    /// Set a project's publication status. Returns the updated row, or
    /// `None` if the project does not exist.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("UPDATE projects SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Flip the `featured` flag. Returns the updated row, or `None` if the
    /// project does not exist.
    pub async fn toggle_featured(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query =
            format!("UPDATE projects SET featured = NOT featured WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

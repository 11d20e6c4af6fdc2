//! Repository for the `profiles` table.

use forgeline_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{CreateProfile, Profile, UpdateProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, full_name, username, avatar_url, phone, location, is_active, \
                       created_at, updated_at";

/// Provides CRUD operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a profile for a user, returning the created row.
    ///
    /// Called lazily on first login; one profile per identity is enforced
    /// by a unique constraint on `user_id`.
    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (user_id, username, full_name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(input.user_id)
            .bind(&input.username)
            .bind(&input.full_name)
            .fetch_one(pool)
            .await
    }

    /// Find the profile belonging to a user. Returns `None` for identities
    /// that have not completed first login.
    pub async fn find_by_user(pool: &PgPool, user_id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a profile by its public username.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE username = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Update a user's profile. Only non-`None` fields in `input` are
    /// applied. Returns `None` if the user has no profile yet.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                full_name = COALESCE($2, full_name),
                avatar_url = COALESCE($3, avatar_url),
                phone = COALESCE($4, phone),
                location = COALESCE($5, location)
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&input.full_name)
            .bind(&input.avatar_url)
            .bind(&input.phone)
            .bind(&input.location)
            .fetch_optional(pool)
            .await
    }

    /// Set the active flag. Returns `true` if a row was updated.
    pub async fn set_active(
        pool: &PgPool,
        user_id: DbId,
        is_active: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE profiles SET is_active = $2 WHERE user_id = $1")
            .bind(user_id)
            .bind(is_active)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Handlers for the `/profiles` resource.

use axum::extract::{Path, State};
use axum::Json;
use forgeline_core::error::CoreError;
use forgeline_db::models::profile::{Profile, UpdateProfile};
use forgeline_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profiles/{username}
///
/// Public profile lookup by username. Deactivated profiles are hidden.
pub async fn get_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = ProfileRepo::find_by_username(&state.pool, &username)
        .await?
        .filter(|p| p.is_active)
        .ok_or(AppError::Store(forgeline_db::store::StoreError::NotFound))?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/profile
///
/// Update the authenticated user's own profile.
pub async fn update_own(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = ProfileRepo::update(&state.pool, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: user.user_id,
        }))?;
    Ok(Json(DataResponse { data: profile }))
}

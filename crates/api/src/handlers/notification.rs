//! Handlers for the authenticated `/notifications` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use forgeline_core::error::CoreError;
use forgeline_core::types::DbId;
use forgeline_db::models::notification::Notification;
use forgeline_db::repositories::NotificationRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the notification listing.
#[derive(Debug, Deserialize)]
pub struct NotificationListParams {
    #[serde(default)]
    pub unread_only: bool,
}

/// GET /api/v1/notifications
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<NotificationListParams>,
    Query(paging): Query<PageParams>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    let (_, per_page, start, _) = paging.resolve();
    let notifications = NotificationRepo::list_for_user(
        &state.pool,
        user.user_id,
        params.unread_only,
        per_page,
        start,
    )
    .await?;
    Ok(Json(DataResponse {
        data: notifications,
    }))
}

/// Unread-count payload for the navigation badge.
#[derive(Debug, Serialize)]
pub struct UnreadCount {
    pub unread: i64,
}

/// GET /api/v1/notifications/unread-count
pub async fn unread_count(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UnreadCount>>> {
    let unread = NotificationRepo::unread_count(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse {
        data: UnreadCount { unread },
    }))
}

/// POST /api/v1/notifications/{id}/read
pub async fn mark_read(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let updated = NotificationRepo::mark_read(&state.pool, id, user.user_id).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/notifications/read-all
pub async fn mark_all_read(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<u64>>> {
    let count = NotificationRepo::mark_all_read(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: count }))
}

//! Handlers for the `/reviews` resource and its moderation queue.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use forgeline_core::error::CoreError;
use forgeline_core::types::DbId;
use forgeline_db::models::review::{CreateReview, Review};
use forgeline_db::repositories::{NotificationRepo, ReviewRepo};
use forgeline_db::store::guard_id_fields;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::PageParams;
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/reviews
///
/// One page of approved reviews, newest first.
pub async fn list_approved(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Paginated<Review>>> {
    let (page, per_page, start, end) = params.resolve();
    let (reviews, total) = ReviewRepo::list_approved(&state.pool, start, end).await?;
    Ok(Json(Paginated::new(reviews, page, per_page, total)))
}

/// POST /api/v1/reviews
///
/// Submit a review. Anonymous submissions are allowed (`user_id` null);
/// a signed-in visitor's identity is attached automatically. The review
/// enters the moderation queue (`is_approved` unset).
///
/// The raw payload is shape-checked first so a malformed identifier fails
/// with a validation error before any query is issued.
pub async fn create(
    session: MaybeUser,
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<DataResponse<Review>>)> {
    guard_id_fields(&payload)?;

    let mut input: CreateReview = serde_json::from_value(payload)
        .map_err(|e| AppError::BadRequest(format!("Invalid review payload: {e}")))?;
    if input.user_id.is_none() {
        input.user_id = session.user_id();
    }

    if !(1..=5).contains(&input.rating) {
        return Err(AppError::Core(CoreError::Validation(
            "rating must be between 1 and 5".into(),
        )));
    }

    let review = ReviewRepo::create(&state.pool, &input).await?;

    tracing::info!(review_id = %review.id, "Review submitted for moderation");

    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}

// ---------------------------------------------------------------------------
// Admin handlers (moderation queue)
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/reviews/pending
///
/// The moderation queue, oldest first.
pub async fn list_pending(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Review>>>> {
    let reviews = ReviewRepo::list_pending(&state.pool).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// POST /api/v1/admin/reviews/{id}/approve
pub async fn approve(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Review>>> {
    moderate(admin, state, id, true).await
}

/// POST /api/v1/admin/reviews/{id}/reject
pub async fn reject(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Review>>> {
    moderate(admin, state, id, false).await
}

async fn moderate(
    RequireAdmin(admin): RequireAdmin,
    state: AppState,
    id: DbId,
    approved: bool,
) -> AppResult<Json<DataResponse<Review>>> {
    let review = ReviewRepo::set_approval(&state.pool, id, approved)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }))?;

    tracing::info!(
        review_id = %id,
        status = review.approval().as_str(),
        user_id = %admin.user_id,
        "Review moderated",
    );

    // Tell a signed-in author about the decision. Failure to notify must not
    // fail the moderation itself.
    if let Some(author_id) = review.user_id {
        let title = if approved {
            "Your review has been published"
        } else {
            "Your review was not approved"
        };
        if let Err(e) =
            NotificationRepo::create(&state.pool, author_id, title, review.comment.as_deref())
                .await
        {
            tracing::warn!(review_id = %id, error = %e, "Review notification failed");
        }
    }

    Ok(Json(DataResponse { data: review }))
}

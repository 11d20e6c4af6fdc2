//! Handlers for the contact-form mailbox.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use forgeline_core::error::CoreError;
use forgeline_core::status::ContactStatus;
use forgeline_core::types::DbId;
use forgeline_db::models::contact::{ContactMessage, CreateContactMessage};
use forgeline_db::repositories::ContactRepo;
use serde::Deserialize;
use validator::ValidateEmail;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PageParams;
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

/// POST /api/v1/contact
///
/// Submit a contact message. Public; enters the mailbox in `new` status.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<(StatusCode, Json<DataResponse<ContactMessage>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".into(),
        )));
    }
    if !input.email.validate_email() {
        return Err(AppError::Core(CoreError::Validation(
            "email is not a valid address".into(),
        )));
    }
    if input.message.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "message must not be empty".into(),
        )));
    }

    let message = ContactRepo::create(&state.pool, &input).await?;

    tracing::info!(message_id = %message.id, "Contact message received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

/// Query parameters for the admin mailbox listing.
#[derive(Debug, Deserialize)]
pub struct ContactListParams {
    pub status: Option<String>,
}

/// GET /api/v1/admin/contact-messages
///
/// One page of the mailbox, optionally filtered by status, newest first.
pub async fn admin_list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ContactListParams>,
    Query(paging): Query<PageParams>,
) -> AppResult<Json<Paginated<ContactMessage>>> {
    let status = match params.status.as_deref() {
        None | Some("all") => None,
        Some(value) => Some(ContactStatus::parse(value).map_err(AppError::Core)?),
    };

    let (page, per_page, start, end) = paging.resolve();
    let (messages, total) =
        ContactRepo::list(&state.pool, status.map(|s| s.as_str()), start, end).await?;

    Ok(Json(Paginated::new(messages, page, per_page, total)))
}

/// Request body for `PUT /admin/contact-messages/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

/// PUT /api/v1/admin/contact-messages/{id}/status
///
/// Move a message through the mailbox state machine. Transitions are
/// repeatable: archiving an archived message is a no-op success.
pub async fn set_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<Json<DataResponse<ContactMessage>>> {
    let status = ContactStatus::parse(&input.status).map_err(AppError::Core)?;

    let message = ContactRepo::set_status(&state.pool, id, status.as_str())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))?;
    Ok(Json(DataResponse { data: message }))
}

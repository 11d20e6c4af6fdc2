//! Handlers for the admin `/registrations` resource, plus the shared
//! registration payload parser used by the public meeting and consultation
//! endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use forgeline_core::error::CoreError;
use forgeline_core::status::RegistrationStatus;
use forgeline_core::types::DbId;
use forgeline_db::models::registration::{CreateRegistration, MeetingRegistration};
use forgeline_db::repositories::RegistrationRepo;
use forgeline_db::store::guard_id_fields;
use serde::Deserialize;
use validator::ValidateEmail;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PageParams;
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared payload parsing
// ---------------------------------------------------------------------------

/// Parse and validate a public registration payload.
///
/// Identifier-shaped fields are shape-checked before anything touches the
/// database, then the payload is deserialized into the typed DTO and the
/// required fields are checked. Which target the registration binds to
/// (meeting or project) is decided by the route, not the payload.
pub(crate) fn parse_registration_payload(
    payload: &serde_json::Value,
) -> AppResult<CreateRegistration> {
    guard_id_fields(payload)?;

    let input: CreateRegistration = serde_json::from_value(payload.clone())
        .map_err(|e| AppError::BadRequest(format!("Invalid registration payload: {e}")))?;

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

    Ok(input)
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// Query parameters for the admin registration listing.
#[derive(Debug, Deserialize)]
pub struct RegistrationListParams {
    pub status: Option<String>,
}

/// GET /api/v1/admin/registrations
///
/// One page of registrations and consultation requests, optionally filtered
/// by status.
pub async fn admin_list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<RegistrationListParams>,
    Query(paging): Query<PageParams>,
) -> AppResult<Json<Paginated<MeetingRegistration>>> {
    let status = match params.status.as_deref() {
        None | Some("all") => None,
        Some(value) => Some(RegistrationStatus::parse(value).map_err(AppError::Core)?),
    };

    let (page, per_page, start, end) = paging.resolve();
    let (registrations, total) =
        RegistrationRepo::list(&state.pool, status.map(|s| s.as_str()), start, end).await?;

    Ok(Json(Paginated::new(registrations, page, per_page, total)))
}

/// Request body for `PUT /admin/registrations/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

/// PUT /api/v1/admin/registrations/{id}/status
///
/// Approve or reject a registration. Repeating a decision is a no-op
/// success.
pub async fn set_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<Json<DataResponse<MeetingRegistration>>> {
    let status = RegistrationStatus::parse(&input.status).map_err(AppError::Core)?;

    let registration = RegistrationRepo::set_status(&state.pool, id, status.as_str())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MeetingRegistration",
            id,
        }))?;

    tracing::info!(
        registration_id = %id,
        status = status.as_str(),
        user_id = %admin.user_id,
        "Registration status updated",
    );

    Ok(Json(DataResponse { data: registration }))
}

//! Handlers for the `/meetings` resource and its registrations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use forgeline_core::error::CoreError;
use forgeline_core::types::DbId;
use forgeline_db::models::meeting::{
    CreateMeeting, Meeting, MeetingWithAvailability, UpdateMeeting,
};
use forgeline_db::models::registration::MeetingRegistration;
use forgeline_db::repositories::{MeetingRepo, RegisterOutcome, RegistrationRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// A meeting detail with derived availability.
#[derive(Debug, Serialize)]
pub struct MeetingDetail {
    #[serde(flatten)]
    pub meeting: Meeting,
    pub remaining_spots: i32,
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/meetings/upcoming
///
/// Meetings from today onward, soonest first, with derived availability.
pub async fn upcoming(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MeetingWithAvailability>>>> {
    let today = Utc::now().date_naive();
    let meetings = MeetingRepo::upcoming(&state.pool, today).await?;
    Ok(Json(DataResponse { data: meetings }))
}

/// GET /api/v1/meetings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MeetingDetail>>> {
    let meeting = MeetingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id,
        }))?;
    let remaining_spots = MeetingRepo::remaining_spots(&state.pool, id)
        .await?
        .unwrap_or(0);

    Ok(Json(DataResponse {
        data: MeetingDetail {
            meeting,
            remaining_spots,
        },
    }))
}

/// POST /api/v1/meetings/{id}/register
///
/// Register for a meeting. Public. Fails with a capacity error when all
/// spots are taken by approved registrations.
pub async fn register(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<DataResponse<MeetingRegistration>>)> {
    let input = super::registration::parse_registration_payload(&payload)?;

    let outcome = MeetingRepo::register(&state.pool, id, &input).await?;
    let registration = match outcome {
        RegisterOutcome::Registered(registration) => registration,
        RegisterOutcome::MeetingNotFound => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Meeting",
                id,
            }));
        }
        RegisterOutcome::Full => {
            return Err(AppError::Core(CoreError::Capacity { meeting_id: id }));
        }
    };

    tracing::info!(meeting_id = %id, registration_id = %registration.id, "Meeting registration received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: registration })))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/meetings
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateMeeting>,
) -> AppResult<(StatusCode, Json<DataResponse<Meeting>>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }
    if input.spots < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "spots must not be negative".into(),
        )));
    }

    let meeting = MeetingRepo::create(&state.pool, &input).await?;

    tracing::info!(meeting_id = %meeting.id, user_id = %admin.user_id, "Meeting created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: meeting })))
}

/// PUT /api/v1/admin/meetings/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMeeting>,
) -> AppResult<Json<DataResponse<Meeting>>> {
    if let Some(spots) = input.spots {
        if spots < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "spots must not be negative".into(),
            )));
        }
    }

    let meeting = MeetingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id,
        }))?;
    Ok(Json(DataResponse { data: meeting }))
}

/// GET /api/v1/admin/meetings/{id}/registrations
///
/// All registrations for a meeting, oldest first.
pub async fn list_registrations(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<MeetingRegistration>>>> {
    if MeetingRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id,
        }));
    }
    let registrations = RegistrationRepo::list_for_meeting(&state.pool, id).await?;
    Ok(Json(DataResponse { data: registrations }))
}

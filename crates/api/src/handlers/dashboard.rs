//! Handler for the admin dashboard counters.

use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};
use forgeline_db::models::stats::{
    ContactStats, MeetingStats, ProjectStats, RegistrationStats, ReviewStats,
};
use forgeline_db::repositories::StatsRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// The dashboard payload. Each section is an independent snapshot; a section
/// whose fetch failed is `null` so the rest of the dashboard still renders.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub projects: Option<ProjectStats>,
    pub reviews: Option<ReviewStats>,
    pub registrations: Option<RegistrationStats>,
    pub contacts: Option<ContactStats>,
    pub meetings: Option<MeetingStats>,
}

/// GET /api/v1/admin/dashboard
///
/// Fan out the per-table counters concurrently. A failed section logs a
/// warning and renders empty; it never aborts the other sections.
pub async fn stats(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardResponse>>> {
    let now = Utc::now();
    let month_cutoff = now - Duration::days(30);
    let week_cutoff = now - Duration::days(7);
    let today = now.date_naive();

    let (projects, reviews, registrations, contacts, meetings) = tokio::join!(
        StatsRepo::projects(&state.pool, month_cutoff),
        StatsRepo::reviews(&state.pool, month_cutoff),
        StatsRepo::registrations(&state.pool, month_cutoff),
        StatsRepo::contacts(&state.pool, week_cutoff),
        StatsRepo::meetings(&state.pool, today),
    );

    Ok(Json(DataResponse {
        data: DashboardResponse {
            projects: tolerate("projects", projects),
            reviews: tolerate("reviews", reviews),
            registrations: tolerate("registrations", registrations),
            contacts: tolerate("contacts", contacts),
            meetings: tolerate("meetings", meetings),
        },
    }))
}

/// Convert one section's result to an option, logging the failure.
fn tolerate<T>(section: &'static str, result: Result<T, sqlx::Error>) -> Option<T> {
    match result {
        Ok(stats) => Some(stats),
        Err(e) => {
            tracing::warn!(section, error = %e, "Dashboard section failed; rendering empty");
            None
        }
    }
}

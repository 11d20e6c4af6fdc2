//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use forgeline_core::error::CoreError;
use forgeline_core::status::{Category, ProjectStatus};
use forgeline_core::types::DbId;
use forgeline_db::models::project::{CreateProject, Project, ProjectFilter, UpdateProject};
use forgeline_db::models::registration::MeetingRegistration;
use forgeline_db::repositories::{ProjectRepo, RegistrationRepo, ReviewRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::PageParams;
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the public project listing. Pagination comes in
/// through a separate [`PageParams`] extractor on the same query string.
#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    /// Category filter; omitted means all categories.
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Query parameters for the admin project listing (adds a status filter).
#[derive(Debug, Deserialize)]
pub struct AdminProjectListParams {
    pub category: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// A project detail enriched with its review aggregates.
///
/// The aggregates are secondary lookups; if they fail the detail still
/// renders with empty enrichment rather than failing the page.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub average_rating: Option<f64>,
    pub review_count: i64,
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects
///
/// One page of published projects, optionally filtered by category.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
    Query(paging): Query<PageParams>,
) -> AppResult<Json<Paginated<Project>>> {
    let category = parse_category_filter(params.category.as_deref())?;

    let filter = ProjectFilter {
        category: category.map(|c| c.as_str().to_string()),
        status: Some(ProjectStatus::Published.as_str().to_string()),
        featured_only: params.featured,
    };

    let (page, per_page, start, end) = paging.resolve();
    let (projects, total) = ProjectRepo::list(&state.pool, &filter, start, end).await?;

    Ok(Json(Paginated::new(projects, page, per_page, total)))
}

/// GET /api/v1/projects/{id}
///
/// Project detail with review aggregates. A failed aggregate lookup logs a
/// warning and renders as empty; it never fails the detail itself.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let (average_rating, review_count) = match ReviewRepo::list_for_project(&state.pool, id).await {
        Ok(reviews) => {
            let count = reviews.len() as i64;
            let average = ReviewRepo::average_rating(&state.pool, id).await.ok().flatten();
            (average, count)
        }
        Err(e) => {
            tracing::warn!(project_id = %id, error = %e, "Review enrichment failed");
            (None, 0)
        }
    };

    Ok(Json(DataResponse {
        data: ProjectDetail {
            project,
            average_rating,
            review_count,
        },
    }))
}

/// POST /api/v1/projects/{id}/consultations
///
/// Submit a consultation request for a project. Public.
pub async fn request_consultation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<DataResponse<MeetingRegistration>>)> {
    let input = super::registration::parse_registration_payload(&payload)?;

    if ProjectRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    let registration = RegistrationRepo::create_for_project(&state.pool, id, &input).await?;

    tracing::info!(project_id = %id, registration_id = %registration.id, "Consultation requested");

    Ok((StatusCode::CREATED, Json(DataResponse { data: registration })))
}

/// GET /api/v1/projects/mine
///
/// List the authenticated user's own projects.
pub async fn list_mine(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: projects }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/projects
///
/// One page of projects in any status.
pub async fn admin_list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<AdminProjectListParams>,
    Query(paging): Query<PageParams>,
) -> AppResult<Json<Paginated<Project>>> {
    let category = parse_category_filter(params.category.as_deref())?;
    let status = match params.status.as_deref() {
        Some(s) => Some(ProjectStatus::parse(s).map_err(AppError::Core)?),
        None => None,
    };

    let filter = ProjectFilter {
        category: category.map(|c| c.as_str().to_string()),
        status: status.map(|s| s.as_str().to_string()),
        featured_only: params.featured,
    };

    let (page, per_page, start, end) = paging.resolve();
    let (projects, total) = ProjectRepo::list(&state.pool, &filter, start, end).await?;

    Ok(Json(Paginated::new(projects, page, per_page, total)))
}

/// POST /api/v1/admin/projects
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(mut input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    Category::parse(&input.category).map_err(AppError::Core)?;
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }
    if input.owner_id.is_none() {
        input.owner_id = Some(admin.user_id);
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(project_id = %project.id, user_id = %admin.user_id, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    if let Some(category) = &input.category {
        Category::parse(category).map_err(AppError::Core)?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/admin/projects/{id}/status
pub async fn set_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<Json<DataResponse<Project>>> {
    let status = ProjectStatus::parse(&input.status).map_err(AppError::Core)?;

    let project = ProjectRepo::set_status(&state.pool, id, status.as_str())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// Request body for `PUT /admin/projects/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

/// POST /api/v1/admin/projects/{id}/toggle-featured
pub async fn toggle_featured(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::toggle_featured(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an optional category filter, treating `"all"` as no filter.
fn parse_category_filter(category: Option<&str>) -> AppResult<Option<Category>> {
    match category {
        None | Some("all") => Ok(None),
        Some(value) => Category::parse(value).map(Some).map_err(AppError::Core),
    }
}

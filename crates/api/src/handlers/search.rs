//! Handlers for the public search endpoint.
//!
//! Substring matching only: each entity table is searched with a
//! case-insensitive `ILIKE` over its text columns and the results are
//! merged. No ranking, no typo tolerance.

use axum::extract::{Query, State};
use axum::Json;
use forgeline_db::models::gallery::GalleryItem;
use forgeline_db::models::project::Project;
use forgeline_db::repositories::{GalleryRepo, ProjectRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Minimum query length before any search runs.
const MIN_QUERY_LEN: usize = 2;

/// Maximum results per entity table.
const SEARCH_LIMIT: i64 = 20;

/// Query parameters for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Merged search results across the public entity tables.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub projects: Vec<Project>,
    pub gallery: Vec<GalleryItem>,
    pub total_count: i64,
}

/// GET /api/v1/search
///
/// Search published projects and gallery items. Queries shorter than two
/// characters return an empty result without touching the database.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<SearchResponse>>> {
    let term = params.q.as_deref().map(str::trim).unwrap_or("");
    if term.len() < MIN_QUERY_LEN {
        return Ok(Json(DataResponse {
            data: SearchResponse {
                projects: Vec::new(),
                gallery: Vec::new(),
                total_count: 0,
            },
        }));
    }

    let projects = ProjectRepo::search(&state.pool, term, SEARCH_LIMIT).await?;
    let gallery = GalleryRepo::search(&state.pool, term, SEARCH_LIMIT).await?;
    let total_count = (projects.len() + gallery.len()) as i64;

    tracing::debug!(query = term, results = total_count, "Search executed");

    Ok(Json(DataResponse {
        data: SearchResponse {
            projects,
            gallery,
            total_count,
        },
    }))
}

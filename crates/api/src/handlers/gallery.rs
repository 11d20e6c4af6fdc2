//! Handlers for the `/gallery` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use forgeline_core::error::CoreError;
use forgeline_core::status::Category;
use forgeline_core::types::DbId;
use forgeline_db::models::gallery::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use forgeline_db::repositories::GalleryRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PageParams;
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

/// Query parameters for the gallery listing. Pagination comes in through a
/// separate [`PageParams`] extractor on the same query string.
#[derive(Debug, Deserialize)]
pub struct GalleryListParams {
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// GET /api/v1/gallery
///
/// One page of gallery items, optionally filtered by category.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<GalleryListParams>,
    Query(paging): Query<PageParams>,
) -> AppResult<Json<Paginated<GalleryItem>>> {
    let category = match params.category.as_deref() {
        None | Some("all") => None,
        Some(value) => Some(Category::parse(value).map_err(AppError::Core)?),
    };

    let (page, per_page, start, end) = paging.resolve();
    let (items, total) = GalleryRepo::list(
        &state.pool,
        category.map(|c| c.as_str()),
        params.featured,
        start,
        end,
    )
    .await?;

    Ok(Json(Paginated::new(items, page, per_page, total)))
}

/// GET /api/v1/gallery/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GalleryItem>>> {
    let item = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/admin/gallery
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateGalleryItem>,
) -> AppResult<(StatusCode, Json<DataResponse<GalleryItem>>)> {
    Category::parse(&input.category).map_err(AppError::Core)?;
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }

    let item = GalleryRepo::create(&state.pool, &input).await?;

    tracing::info!(gallery_id = %item.id, user_id = %admin.user_id, "Gallery item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/admin/gallery/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGalleryItem>,
) -> AppResult<Json<DataResponse<GalleryItem>>> {
    if let Some(category) = &input.category {
        Category::parse(category).map_err(AppError::Core)?;
    }

    let item = GalleryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/admin/gallery/{id}/toggle-featured
pub async fn toggle_featured(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GalleryItem>>> {
    let item = GalleryRepo::toggle_featured(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/admin/gallery/{id}
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = GalleryRepo::remove(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }));
    }

    tracing::info!(gallery_id = %id, user_id = %admin.user_id, "Gallery item removed");

    Ok(StatusCode::NO_CONTENT)
}

//! Handler for image uploads.
//!
//! Accepts a multipart form with a `kind` field (`avatar` or `gallery`) and
//! a `file` field. Content type and size are validated against the kind's
//! allow-list and ceiling before anything is written; accepted files land in
//! the configured media directory under a fresh name and are served back by
//! URL path.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use forgeline_core::error::CoreError;
use forgeline_core::media::{validate_upload, UploadKind};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload: the public URL path of the stored file.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /api/v1/uploads
pub async fn upload(
    user: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResponse>>)> {
    let mut kind: Option<UploadKind> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("kind") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid kind field: {e}")))?;
                kind = Some(UploadKind::parse(&value).map_err(AppError::Core)?);
            }
            Some("file") => {
                let content_type = field
                    .content_type()
                    .ok_or_else(|| {
                        AppError::Core(CoreError::Validation(
                            "file field must declare a content type".into(),
                        ))
                    })?
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;
                file = Some((content_type, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let kind = kind.ok_or_else(|| {
        AppError::Core(CoreError::Validation("missing 'kind' field".into()))
    })?;
    let (content_type, bytes) = file.ok_or_else(|| {
        AppError::Core(CoreError::Validation("missing 'file' field".into()))
    })?;

    validate_upload(kind, &content_type, bytes.len()).map_err(AppError::Core)?;

    let extension = extension_for(&content_type);
    let filename = format!("{}.{extension}", Uuid::new_v4());
    let path = std::path::Path::new(&state.config.media_dir).join(&filename);

    tokio::fs::create_dir_all(&state.config.media_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create media dir: {e}")))?;
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    tracing::info!(
        user_id = %user.user_id,
        file = %filename,
        size = bytes.len(),
        "Upload stored",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadResponse {
                url: format!("/media/{filename}"),
            },
        }),
    ))
}

/// File extension for an accepted image content type.
fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "bin",
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use forgeline_core::error::CoreError;
use forgeline_db::store::{self, StoreError};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for classified
/// database failures. Implements [`IntoResponse`] to produce consistent JSON
/// error responses; raw driver errors never reach a client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `forgeline_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A classified store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<sqlx::Error> for AppError {
    /// Classify driver errors at the boundary so every handler `?` on a
    /// repository call produces a taxonomized response.
    fn from(err: sqlx::Error) -> Self {
        AppError::Store(store::classify(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Capacity { meeting_id } => (
                    StatusCode::CONFLICT,
                    "MEETING_FULL",
                    format!("Meeting {meeting_id} has no spots left"),
                ),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Classified store errors ---
            AppError::Store(store) => match store {
                StoreError::Validation { field } => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("Invalid identifier in field '{field}'"),
                ),
                StoreError::NotFound => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "Resource not found".to_string(),
                ),
                StoreError::Column(msg) => {
                    tracing::error!(error = %msg, "Schema mismatch");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "SCHEMA_MISMATCH",
                        "An internal error occurred".to_string(),
                    )
                }
                StoreError::Format(msg) => {
                    tracing::error!(error = %msg, "Row format mismatch");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "FORMAT_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
                StoreError::Transport(msg) => {
                    tracing::error!(error = %msg, "Database transport failure");
                    (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_UNAVAILABLE",
                        "The data store is unreachable".to_string(),
                    )
                }
                StoreError::Unknown(msg) => {
                    tracing::error!(error = %msg, "Unclassified store error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

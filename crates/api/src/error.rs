//! The HTTP face of every failure: a status code plus
//! `{"error": ..., "code": ...}` (and `"detail"` for store failures).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mentorhub_core::error::CoreError;
use serde_json::json;

/// Error returned by every handler.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Raised by repositories that handlers call without going through a
    /// manager. Classified like the store adapter's errors.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Body could not be read as the expected JSON shape.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Status, machine code, message and optional detail of an error body.
type ErrorParts = (StatusCode, &'static str, String, Option<String>);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, detail) = match self {
            AppError::Core(core) => core_parts(core),

            // Repository errors get the same classification the store
            // adapter applies, so both paths answer identically.
            AppError::Database(sqlx::Error::RowNotFound) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
                None,
            ),
            AppError::Database(err) => core_parts(mentorhub_db::store_error(err)),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
        };

        let body = match detail {
            Some(detail) => json!({ "error": message, "code": code, "detail": detail }),
            None => json!({ "error": message, "code": code }),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn core_parts(err: CoreError) -> ErrorParts {
    match err {
        CoreError::NotFound { entity, reference } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} not found: {reference}"),
            None,
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg, None),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg, None),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg, None),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg, None),
        CoreError::Store(msg) => {
            tracing::error!(error = %msg, "Store error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_ERROR",
                "A storage operation failed".to_string(),
                Some(msg),
            )
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
                None,
            )
        }
    }
}

//! HTTP error mapping.
//!
//! Handlers return [`AppResult`]; every failure funnels through
//! [`AppError::into_response`] so clients always see the same
//! `{"error": ..., "code": ...}` JSON shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use courseforge_core::error::CoreError;
use serde_json::json;

use crate::video::VideoPlatformError;

/// Error type for HTTP handlers: domain errors from `courseforge_core`,
/// database and video-platform failures, plus request-level variants.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The external video platform rejected or failed a request.
    #[error("Video platform error: {0}")]
    Video(#[from] VideoPlatformError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

/// Log the real cause, answer with a sanitized 500.
fn internal(cause: &dyn std::fmt::Display) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %cause, "Internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
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
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => internal(msg),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            // Upstream outages are the platform's fault, not ours.
            AppError::Video(err) => {
                tracing::error!(error = %err, "Video platform error");
                (
                    StatusCode::BAD_GATEWAY,
                    "VIDEO_PLATFORM_ERROR",
                    "The video platform request failed".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => internal(msg),
        };

        let body = json!({ "error": message, "code": code });
        (status, axum::Json(body)).into_response()
    }
}

/// Map a sqlx error onto a status, code, and client-safe message.
///
/// `RowNotFound` is a 404. A unique violation (Postgres 23505) on one of
/// our `uq_`-named constraints is a 409; anything else is logged and
/// answered as a sanitized 500 so driver details never leak to clients.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                )
            } else {
                internal(db_err)
            }
        }
        other => internal(other),
    }
}

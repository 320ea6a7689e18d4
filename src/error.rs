//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::ValidationError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Member not found: {0}")]
    MemberNotFound(String),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    // Server errors (5xx)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub error_code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            // 400 Bad Request - the structured field errors are the body
            AppError::Validation(err) => {
                return (StatusCode::BAD_REQUEST, Json(err.clone())).into_response();
            }

            // 404 Not Found
            AppError::MemberNotFound(_) => (StatusCode::NOT_FOUND, "member_not_found"),
            AppError::CourseNotFound(_) => (StatusCode::NOT_FOUND, "course_not_found"),

            // 500 Internal Server Error - the backend error is logged, never
            // serialized into the response
            AppError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
            }
        };

        let message = match &self {
            AppError::Database(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            message,
            error_code: error_code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

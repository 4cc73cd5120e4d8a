/// Error handling for the API server
///
/// Handlers return `Result<T, ApiError>`; the error converts into the wire
/// shape the frontend expects. Two 500 shapes exist on purpose: write
/// endpoints (register, create post) answer with a fixed `message`, read
/// endpoints answer with the raw store error under `error`. The latter
/// leaks driver error text to callers; that is documented API behavior.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing required input (400)
    #[error("validation failed: {0}")]
    Validation(String),

    /// Duplicate unique key (400, not 409; the frontend keys off 400 for
    /// duplicate names)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Missing row (404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Anything else on a write path (500 with a fixed message)
    #[error("internal error: {0}")]
    Internal(String),

    /// Store failure on a read path (500 with the raw error surfaced)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(msg) | ApiError::Conflict(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "message": msg }),
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "message": msg }),
            ),
            ApiError::Internal(msg) => {
                tracing::error!(message = msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "message": msg }),
                )
            }
            ApiError::Database(err) => {
                tracing::error!(error = %err, "store error surfaced to caller");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "error": err.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Validation("name and password are required".to_string());
        assert_eq!(
            err.to_string(),
            "validation failed: name and password are required"
        );

        let err = ApiError::NotFound("post not found".to_string());
        assert_eq!(err.to_string(), "not found: post not found");
    }

    #[test]
    fn test_status_mapping() {
        let resp = ApiError::Conflict("username already exists".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApiError::NotFound("post not found".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError::Internal("registration failed".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = ApiError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

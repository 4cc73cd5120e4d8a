/// Health check endpoint
///
/// # Endpoint
///
/// ```text
/// GET /app/health
/// ```
///
/// Always answers `{"status": "ok", ...}` without touching the store, so a
/// broken database never fails the health probe.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status, always "ok"
    pub status: String,

    /// Human-readable status message
    pub message: String,
}

/// Health check handler
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "forum backend is running".to_string(),
    })
}

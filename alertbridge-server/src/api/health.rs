//! Health Check API Handler
//!
//! Simple health check endpoint for monitoring.

use axum::http::StatusCode;

/// GET /health
/// Always succeeds with an empty body, regardless of Alertmanager availability
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

//! API Module
//!
//! HTTP API layer for the bridge.
//! Each submodule handles endpoints for a specific concern.

pub mod error;
pub mod health;
pub mod logs;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::service::AlertForwarder;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<dyn AlertForwarder>,
    pub max_body_bytes: usize,
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Log ingestion
        .route("/", post(logs::receive_logs))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

//! Log Ingestion API Handler
//!
//! Receives log batches from the log shipper.

use alertbridge_core::decode::DecodeError;
use axum::{body::Body, extract::State, http::StatusCode};

use crate::api::AppState;
use crate::api::error::ApiResult;
use crate::service::bridge_service::{self, BridgeError};

/// POST /
/// Forward one alert per log record in the body
pub async fn receive_logs(State(state): State<AppState>, body: Body) -> ApiResult<StatusCode> {
    let body = axum::body::to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|e| BridgeError::Decode(DecodeError::Read(e.to_string())))?;

    let delivered = bridge_service::process_logs(state.forwarder.as_ref(), &body).await?;

    tracing::debug!("Forwarded {} alert(s)", delivered);

    Ok(StatusCode::OK)
}

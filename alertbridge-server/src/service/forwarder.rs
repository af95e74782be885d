//! Alert delivery seam
//!
//! The bridge hands alerts to an [`AlertForwarder`] so delivery can be
//! swapped out in tests.

use alertbridge_client::{AlertmanagerClient, ClientError};
use alertbridge_core::domain::alert::AlertBatch;
use async_trait::async_trait;

/// Delivers alert batches to an alerting backend
#[async_trait]
pub trait AlertForwarder: Send + Sync {
    /// Deliver one batch, returning once the backend has accepted or refused it
    async fn forward(&self, alerts: &AlertBatch) -> Result<(), ClientError>;
}

#[async_trait]
impl AlertForwarder for AlertmanagerClient {
    async fn forward(&self, alerts: &AlertBatch) -> Result<(), ClientError> {
        self.post_alerts(alerts).await
    }
}

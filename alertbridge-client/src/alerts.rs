//! Alert-related API endpoints

use alertbridge_core::domain::alert::AlertBatch;

use crate::AlertmanagerClient;
use crate::error::Result;

impl AlertmanagerClient {
    // =============================================================================
    // Alerts
    // =============================================================================

    /// Post a batch of alerts
    ///
    /// Succeeds on any 2xx response.
    pub async fn post_alerts(&self, alerts: &AlertBatch) -> Result<()> {
        let url = self.endpoint.alerts_url();
        tracing::debug!("Posting {} alert(s) to {}", alerts.len(), url);

        let response = self.client.post(&url).json(alerts).send().await?;

        self.handle_empty_response(response).await?;
        tracing::info!("Alerts posted successfully.");

        Ok(())
    }
}

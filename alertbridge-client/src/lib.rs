//! Alertbridge Alertmanager Client
//!
//! A small, typed HTTP client for Alertmanager's v2 API.
//!
//! Only the "post alerts" operation is implemented; that is all the bridge
//! needs to hand alerts over.
//!
//! # Example
//!
//! ```no_run
//! use alertbridge_client::{AlertmanagerClient, AlertmanagerEndpoint};
//! use alertbridge_core::decode::decode_records;
//! use alertbridge_core::translate::translate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoint = AlertmanagerEndpoint::parse("http://localhost:9093/api/v2/")?;
//!     let client = AlertmanagerClient::new(endpoint);
//!
//!     let body = br#"[{"time":"2024-01-01T00:00:00Z","log":"boom",
//!         "kubernetes":{"namespace_name":"ns1","pod_name":"pod1"}}]"#;
//!     for record in decode_records(body)? {
//!         client.post_alerts(&translate(&record)?.into_batch()).await?;
//!     }
//!     Ok(())
//! }
//! ```

mod alerts;
pub mod endpoint;
pub mod error;

// Re-export commonly used types
pub use endpoint::AlertmanagerEndpoint;
pub use error::{ClientError, Result};

use std::time::Duration;

use reqwest::Client;

/// HTTP client for an Alertmanager v2 API
#[derive(Debug, Clone)]
pub struct AlertmanagerClient {
    endpoint: AlertmanagerEndpoint,
    /// HTTP client instance
    client: Client,
}

impl AlertmanagerClient {
    /// Create a new client with reqwest's default settings
    pub fn new(endpoint: AlertmanagerEndpoint) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(endpoint: AlertmanagerEndpoint, client: Client) -> Self {
        Self { endpoint, client }
    }

    /// Create a new client whose requests give up after `timeout`
    pub fn with_timeout(endpoint: AlertmanagerEndpoint, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(endpoint, client))
    }

    /// Get the endpoint this client posts to
    pub fn endpoint(&self) -> &AlertmanagerEndpoint {
        &self.endpoint
    }

    /// Handle a response whose body carries nothing we need
    ///
    /// Non-2xx statuses are turned into [`ClientError::ApiError`] with the
    /// response body as the message.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> AlertmanagerEndpoint {
        AlertmanagerEndpoint::parse("http://localhost:9093/api/v2").unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = AlertmanagerClient::new(endpoint());
        assert_eq!(
            client.endpoint().alerts_url(),
            "http://localhost:9093/api/v2/alerts"
        );
    }

    #[test]
    fn test_client_with_timeout() {
        let client = AlertmanagerClient::with_timeout(endpoint(), Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(), &endpoint());
    }
}

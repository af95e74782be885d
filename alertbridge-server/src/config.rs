//! Server configuration
//!
//! Everything the bridge needs is resolved once at startup. A configuration
//! that fails [`Config::validate`] stops the process before it binds.

use std::time::Duration;

use alertbridge_client::AlertmanagerEndpoint;
use anyhow::Context;

/// Default cap on an inbound log batch
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Bridge configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Alertmanager v2 API URL (e.g., "http://alertmanager:9093/api/v2/")
    pub alertmanager_url: String,

    /// Address the HTTP server listens on
    pub bind_addr: String,

    /// Timeout applied to each outbound alert post
    pub request_timeout: Duration,

    /// Largest request body accepted on `POST /`
    pub max_body_bytes: usize,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(alertmanager_url: String) -> Self {
        Self {
            alertmanager_url,
            bind_addr: "0.0.0.0:8080".to_string(),
            request_timeout: Duration::from_secs(10),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Resolve the Alertmanager endpoint from the configured URL
    pub fn endpoint(&self) -> anyhow::Result<AlertmanagerEndpoint> {
        if self.alertmanager_url.trim().is_empty() {
            anyhow::bail!("ALERTMANAGER_URL cannot be empty");
        }

        AlertmanagerEndpoint::parse(&self.alertmanager_url)
            .context("Can't parse ALERTMANAGER_URL")
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.endpoint()?;

        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        if self.max_body_bytes == 0 {
            anyhow::bail!("max_body_bytes must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::new("http://localhost:9093/api/v2/".to_string());
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_resolution() {
        let config = Config::new("http://localhost:9698/alertmanager/api/v2/".to_string());
        let endpoint = config.endpoint().unwrap();
        assert_eq!(endpoint.host, "localhost:9698");
        assert_eq!(endpoint.base_path, "/alertmanager/api/v2");
        assert_eq!(endpoint.scheme, "http");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::new("http://localhost:9093".to_string());

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Missing URL should fail
        config.alertmanager_url = String::new();
        assert!(config.validate().is_err());

        // Malformed URL should fail
        config.alertmanager_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.alertmanager_url = "http://localhost:9093".to_string();
        config.request_timeout = Duration::ZERO;
        assert!(config.validate().is_err());

        config.request_timeout = Duration::from_secs(1);
        config.max_body_bytes = 0;
        assert!(config.validate().is_err());

        config.max_body_bytes = 1024;
        assert!(config.validate().is_ok());
    }
}

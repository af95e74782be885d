//! Alertmanager endpoint descriptor

use std::fmt;

use reqwest::Url;

use crate::error::{ClientError, Result};

/// Base path Alertmanager serves its v2 API under
pub const DEFAULT_BASE_PATH: &str = "/api/v2";

/// Location of an Alertmanager v2 API, split into its parts
///
/// Resolved once from a full URL such as
/// `http://alertmanager:9093/alertmanager/api/v2/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertmanagerEndpoint {
    /// `http` or `https`
    pub scheme: String,
    /// Host, including the port when one was given
    pub host: String,
    /// Path prefix without a trailing slash, e.g. `/api/v2`
    pub base_path: String,
}

impl AlertmanagerEndpoint {
    /// Parse a full Alertmanager API URL
    ///
    /// An empty path (or a bare `/`) resolves to [`DEFAULT_BASE_PATH`].
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw.trim())
            .map_err(|e| ClientError::InvalidEndpoint(format!("{}: {}", raw, e)))?;

        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(ClientError::InvalidEndpoint(format!(
                "{}: scheme must be http or https",
                raw
            )));
        }

        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host,
            _ => {
                return Err(ClientError::InvalidEndpoint(format!(
                    "{}: missing host",
                    raw
                )));
            }
        };

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ClientError::InvalidEndpoint(format!(
                "{}: query and fragment are not allowed",
                raw
            )));
        }

        let host = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        let base_path = match url.path().trim_end_matches('/') {
            "" => DEFAULT_BASE_PATH.to_string(),
            path => path.to_string(),
        };

        Ok(Self {
            scheme: scheme.to_string(),
            host,
            base_path,
        })
    }

    /// URL of the "post alerts" endpoint
    pub fn alerts_url(&self) -> String {
        format!("{}/alerts", self)
    }
}

impl fmt::Display for AlertmanagerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.base_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_base_path() {
        let endpoint =
            AlertmanagerEndpoint::parse("http://localhost:9698/alertmanager/api/v2/").unwrap();

        assert_eq!(endpoint.scheme, "http");
        assert_eq!(endpoint.host, "localhost:9698");
        assert_eq!(endpoint.base_path, "/alertmanager/api/v2");
        assert_eq!(
            endpoint.alerts_url(),
            "http://localhost:9698/alertmanager/api/v2/alerts"
        );
    }

    #[test]
    fn test_parse_defaults_base_path() {
        let endpoint = AlertmanagerEndpoint::parse("https://am.monitoring.svc").unwrap();
        assert_eq!(endpoint.host, "am.monitoring.svc");
        assert_eq!(endpoint.base_path, DEFAULT_BASE_PATH);
        assert_eq!(
            endpoint.alerts_url(),
            "https://am.monitoring.svc/api/v2/alerts"
        );

        let endpoint = AlertmanagerEndpoint::parse("http://am:9093/").unwrap();
        assert_eq!(endpoint.alerts_url(), "http://am:9093/api/v2/alerts");
    }

    #[test]
    fn test_parse_rejects_invalid_urls() {
        for raw in [
            "",
            "not-a-url",
            "localhost:9093",
            "ftp://am:9093/api/v2",
            "http://am:9093/api/v2?tenant=a",
            "http://am:9093/api/v2#frag",
        ] {
            let result = AlertmanagerEndpoint::parse(raw);
            assert!(
                matches!(result, Err(ClientError::InvalidEndpoint(_))),
                "expected {:?} to be rejected",
                raw
            );
        }
    }
}

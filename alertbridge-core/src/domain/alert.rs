//! Alert domain types
//!
//! Mirrors Alertmanager's v2 `postableAlert` wire shape, narrowed to the
//! fixed label and annotation set this bridge emits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::record::KubernetesLog;

pub const SEVERITY: &str = "warning";
pub const ALERT_NAME: &str = "ErrorLog";
pub const SUMMARY: &str = "ERROR in log";
pub const DESCRIPTION: &str = "Log level with ERROR in log";

/// An alert derived from one log record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub starts_at: DateTime<Utc>,
    pub labels: AlertLabels,
    pub annotations: AlertAnnotations,
}

/// The collection accepted by Alertmanager's "post alerts" endpoint
///
/// The bridge always sends a singleton batch.
pub type AlertBatch = Vec<Alert>;

impl Alert {
    /// Wrap this alert in a batch of one
    pub fn into_batch(self) -> AlertBatch {
        vec![self]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertLabels {
    pub severity: String,
    pub alertname: String,
    pub time: String,
    pub log: String,
    pub namespace: String,
    pub pod: String,
}

impl From<&KubernetesLog<'_>> for AlertLabels {
    fn from(view: &KubernetesLog<'_>) -> Self {
        Self {
            severity: SEVERITY.to_string(),
            alertname: ALERT_NAME.to_string(),
            time: view.time.to_string(),
            log: view.log.to_string(),
            namespace: view.namespace.to_string(),
            pod: view.pod.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertAnnotations {
    pub summary: String,
    pub description: String,
}

impl Default for AlertAnnotations {
    fn default() -> Self {
        Self {
            summary: SUMMARY.to_string(),
            description: DESCRIPTION.to_string(),
        }
    }
}

//! Bridge Service
//!
//! Turns a raw log batch into alerts and delivers them, one record at a time.

use alertbridge_client::ClientError;
use alertbridge_core::decode::{DecodeError, decode_records};
use alertbridge_core::domain::record::{LogRecord, SchemaMismatchError};
use alertbridge_core::translate::translate;
use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

use crate::service::AlertForwarder;

/// Service error type
///
/// Every variant aborts the batch. Records before `index` have already been
/// delivered and are not rolled back.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Log record {index}: {source}")]
    Schema {
        index: usize,
        source: SchemaMismatchError,
    },

    #[error("Error posting alerts for log record {index}: {source}")]
    Delivery { index: usize, source: ClientError },
}

pub type Result<T> = std::result::Result<T, BridgeError>;

/// Decode a log batch and forward one alert per record, in order
///
/// Stops at the first record that fails to translate or deliver. Returns the
/// number of alerts delivered.
pub async fn process_logs(forwarder: &dyn AlertForwarder, body: &[u8]) -> Result<usize> {
    let records = decode_records(body)?;

    for (index, record) in records.iter().enumerate() {
        forward_record(forwarder, index, record).await?;
    }

    Ok(records.len())
}

/// Translate one record and forward it as a singleton batch
pub async fn forward_record(
    forwarder: &dyn AlertForwarder,
    index: usize,
    record: &LogRecord,
) -> Result<()> {
    tracing::info!("Log: {}", record);

    let alert = translate(record).map_err(|source| BridgeError::Schema { index, source })?;

    forwarder
        .forward(&alert.into_batch())
        .await
        .map_err(|source| BridgeError::Delivery { index, source })
}

/// A synthetic record used to check the path to Alertmanager end to end
pub fn test_record(now: DateTime<Utc>) -> LogRecord {
    let mut kubernetes = serde_json::Map::new();
    kubernetes.insert("namespace_name".into(), "test-namespace".into());
    kubernetes.insert("pod_name".into(), "test-pod".into());

    let mut fields = serde_json::Map::new();
    fields.insert(
        "time".into(),
        now.to_rfc3339_opts(SecondsFormat::Millis, true).into(),
    );
    fields.insert("log".into(), "test".into());
    fields.insert("kubernetes".into(), kubernetes.into());

    LogRecord::from(fields)
}

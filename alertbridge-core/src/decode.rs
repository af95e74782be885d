//! Request body decoding

use thiserror::Error;

use crate::domain::record::LogRecord;

/// The inbound body could not be turned into a batch of records
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Error reading body: {0}")]
    Read(String),

    #[error("Error unmarshalling logs: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a body as a JSON array of objects, preserving order
pub fn decode_records(body: &[u8]) -> Result<Vec<LogRecord>, DecodeError> {
    let records = serde_json::from_slice(body)?;
    Ok(records)
}

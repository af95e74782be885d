//! Alert translation
//!
//! Pure mapping from one [`LogRecord`] to one [`Alert`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::alert::{Alert, AlertAnnotations, AlertLabels};
use crate::domain::record::{LogRecord, SchemaMismatchError};

/// Translate a record, falling back to the current time when `time` does not parse
pub fn translate(record: &LogRecord) -> Result<Alert, SchemaMismatchError> {
    translate_at(record, Utc::now())
}

/// Translate a record, using `now` as `startsAt` when `time` does not parse
///
/// The `time` label always carries the submitted string verbatim, whether or
/// not it parsed.
pub fn translate_at(record: &LogRecord, now: DateTime<Utc>) -> Result<Alert, SchemaMismatchError> {
    let view = record.view()?;
    let starts_at = parse_log_time(view.time).unwrap_or(now);

    Ok(Alert {
        starts_at,
        labels: AlertLabels::from(&view),
        annotations: AlertAnnotations::default(),
    })
}

/// Zone-less layouts, read as UTC
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%MZ",
    "%Y-%m-%dT%H:%M",
];

/// Parse a shipper timestamp
///
/// Accepts RFC 3339, ISO 8601 with a `+hhmm` offset, and these zone-less
/// shapes taken as UTC: `YYYY-MM-DDTHH:MM:SS[.fff]`,
/// `YYYY-MM-DD HH:MM:SS[.fff]`, `YYYY-MM-DDTHH:MM[Z]` and a bare
/// `YYYY-MM-DD` (midnight).
pub fn parse_log_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(ts.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
    {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

//! Log record domain types

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// One decoded element of an inbound log batch
///
/// Records carry whatever fields the log shipper attached. No schema is
/// enforced when decoding; the fields an alert needs are checked lazily by
/// [`LogRecord::view`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogRecord(Map<String, Value>);

impl LogRecord {
    /// Look up a top-level field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Validate the record and expose the fields an alert is built from
    ///
    /// Fields are checked in the order `time`, `log`, `kubernetes`,
    /// `kubernetes.namespace_name`, `kubernetes.pod_name`. The first field
    /// that is absent or not of the expected type is reported.
    pub fn view(&self) -> Result<KubernetesLog<'_>, SchemaMismatchError> {
        let time = require_str(&self.0, "time", "time")?;
        let log = require_str(&self.0, "log", "log")?;

        let kubernetes = match self.0.get("kubernetes") {
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(SchemaMismatchError::wrong_type(
                    "kubernetes",
                    "object",
                    other,
                ));
            }
            None => return Err(SchemaMismatchError::missing("kubernetes")),
        };

        let namespace = require_str(kubernetes, "namespace_name", "kubernetes.namespace_name")?;
        let pod = require_str(kubernetes, "pod_name", "kubernetes.pod_name")?;

        Ok(KubernetesLog {
            time,
            log,
            namespace,
            pod,
        })
    }
}

impl From<Map<String, Value>> for LogRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{:?}", self.0),
        }
    }
}

/// Typed view over a record emitted by a Kubernetes log collector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KubernetesLog<'a> {
    /// Timestamp as submitted by the shipper, unparsed
    pub time: &'a str,
    pub log: &'a str,
    pub namespace: &'a str,
    pub pod: &'a str,
}

/// A required record field is absent or has the wrong JSON type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{field}` {problem}")]
pub struct SchemaMismatchError {
    /// Dotted path of the offending field
    pub field: &'static str,
    pub problem: FieldProblem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldProblem::Missing => f.write_str("is missing"),
            FieldProblem::WrongType { expected, found } => {
                write!(f, "is {}, expected {}", found, expected)
            }
        }
    }
}

impl SchemaMismatchError {
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            problem: FieldProblem::Missing,
        }
    }

    pub fn wrong_type(field: &'static str, expected: &'static str, found: &Value) -> Self {
        Self {
            field,
            problem: FieldProblem::WrongType {
                expected,
                found: json_type_name(found),
            },
        }
    }
}

fn require_str<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    field: &'static str,
) -> Result<&'a str, SchemaMismatchError> {
    match map.get(key) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(SchemaMismatchError::wrong_type(field, "string", other)),
        None => Err(SchemaMismatchError::missing(field)),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> LogRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_view_complete_record() {
        let rec = record(json!({
            "time": "2024-01-01T00:00:00Z",
            "log": "boom",
            "stream": "stderr",
            "kubernetes": {"namespace_name": "ns1", "pod_name": "pod1", "host": "node-a"}
        }));

        let view = rec.view().unwrap();
        assert_eq!(view.time, "2024-01-01T00:00:00Z");
        assert_eq!(view.log, "boom");
        assert_eq!(view.namespace, "ns1");
        assert_eq!(view.pod, "pod1");
    }

    #[test]
    fn test_view_missing_pod_name() {
        let rec = record(json!({
            "time": "2024-01-01T00:00:00Z",
            "log": "boom",
            "kubernetes": {"namespace_name": "ns1"}
        }));

        let err = rec.view().unwrap_err();
        assert_eq!(err, SchemaMismatchError::missing("kubernetes.pod_name"));
        assert_eq!(err.to_string(), "field `kubernetes.pod_name` is missing");
    }

    #[test]
    fn test_view_wrong_types() {
        let rec = record(json!({"time": 1704067200, "log": "boom"}));
        let err = rec.view().unwrap_err();
        assert_eq!(err.field, "time");
        assert_eq!(
            err.problem,
            FieldProblem::WrongType {
                expected: "string",
                found: "number"
            }
        );

        let rec = record(json!({"time": "t", "log": "boom", "kubernetes": "ns1/pod1"}));
        let err = rec.view().unwrap_err();
        assert_eq!(err.to_string(), "field `kubernetes` is string, expected object");

        let rec = record(json!({"time": "t", "log": null, "kubernetes": {}}));
        let err = rec.view().unwrap_err();
        assert_eq!(err.field, "log");
        assert!(matches!(
            err.problem,
            FieldProblem::WrongType { found: "null", .. }
        ));
    }

    #[test]
    fn test_view_reports_first_failure() {
        let rec = record(json!({}));
        assert_eq!(rec.view().unwrap_err().field, "time");
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(serde_json::from_value::<LogRecord>(json!(["time"])).is_err());
        assert!(serde_json::from_value::<LogRecord>(json!("log line")).is_err());
    }

    #[test]
    fn test_display_is_compact_json() {
        let rec = record(json!({"log": "boom"}));
        assert_eq!(rec.to_string(), r#"{"log":"boom"}"#);
    }
}

//! Log record as returned by the log source
//!
//! Records are passed through untouched: the job never inspects the message
//! body or checks the timestamps against the requested window.

use serde::{Deserialize, Serialize};

/// A single log event
///
/// Field names follow the source's wire naming so the archived JSON matches
/// what the service returned. Absent fields are omitted from the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// Event time, epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Raw message body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Time the service ingested the event, epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingestion_time: Option<i64>,
}

impl LogRecord {
    /// Creates a fully populated record
    pub fn new(timestamp: i64, message: impl Into<String>, ingestion_time: i64) -> Self {
        Self {
            timestamp: Some(timestamp),
            message: Some(message.into()),
            ingestion_time: Some(ingestion_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_source_field_names() {
        let record = LogRecord::new(1_700_000_000_000, "started", 1_700_000_000_123);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["timestamp"], 1_700_000_000_000_i64);
        assert_eq!(json["message"], "started");
        assert_eq!(json["ingestionTime"], 1_700_000_000_123_i64);
    }

    #[test]
    fn test_missing_fields_are_omitted() {
        let record = LogRecord {
            message: Some("only a message".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"message":"only a message"}"#);
    }
}

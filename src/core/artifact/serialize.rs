//! JSON serialization of fetched records

use crate::domain::{LogRecord, LogVaultError, Result};

/// Serializes records, in order, as a compact JSON array
///
/// An empty slice yields `[]`.
pub fn serialize_records(records: &[LogRecord]) -> Result<Vec<u8>> {
    serde_json::to_vec(records).map_err(|e| {
        LogVaultError::Serialization(format!(
            "Failed to serialize {} log records: {e}",
            records.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_records_serialize_to_empty_array() {
        assert_eq!(serialize_records(&[]).unwrap(), b"[]");
    }

    #[test]
    fn test_order_is_preserved() {
        let records = vec![
            LogRecord::new(3, "third", 30),
            LogRecord::new(1, "first", 10),
            LogRecord::new(2, "second", 20),
        ];
        let bytes = serialize_records(&records).unwrap();
        let parsed: Vec<LogRecord> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_message_escaping() {
        let records = vec![LogRecord::new(1, "line \"one\"\nline two", 1)];
        let bytes = serialize_records(&records).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains(r#"line \"one\"\nline two"#));
    }
}

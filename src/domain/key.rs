//! Object key for export artifacts
//!
//! Keys take the form `<prefix>/logs-<unix-seconds>.json.gz`. The key is the
//! artifact's only identity in the destination bucket.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default key prefix inside the bucket
pub const DEFAULT_KEY_PREFIX: &str = "cloudwatch-logs";

const FILE_STEM: &str = "logs-";
const FILE_EXTENSION: &str = ".json.gz";

/// Object key newtype wrapper
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use logvault::domain::ObjectKey;
///
/// let at = Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap();
/// let key = ObjectKey::for_export("cloudwatch-logs", at).unwrap();
/// assert_eq!(key.as_str(), "cloudwatch-logs/logs-1700000000.json.gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Builds the key for an export taken at `exported_at`
    ///
    /// The timestamp is truncated to whole seconds, so two exports within the
    /// same second get the same key.
    ///
    /// # Returns
    ///
    /// Returns `Err` if the prefix is empty or starts or ends with `/`
    pub fn for_export(prefix: &str, exported_at: DateTime<Utc>) -> Result<Self, String> {
        validate_prefix(prefix)?;
        Ok(Self(format!(
            "{prefix}/{FILE_STEM}{}{FILE_EXTENSION}",
            exported_at.timestamp()
        )))
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts the epoch-seconds component of the file name
    pub fn exported_at_seconds(&self) -> Option<i64> {
        self.0
            .rsplit('/')
            .next()?
            .strip_prefix(FILE_STEM)?
            .strip_suffix(FILE_EXTENSION)?
            .parse()
            .ok()
    }
}

/// Checks a key prefix for use in [`ObjectKey::for_export`]
pub fn validate_prefix(prefix: &str) -> Result<(), String> {
    if prefix.trim().is_empty() {
        return Err("Key prefix cannot be empty".to_string());
    }
    if prefix.starts_with('/') || prefix.ends_with('/') {
        return Err(format!(
            "Key prefix must not start or end with '/', got: {prefix}"
        ));
    }
    Ok(())
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_for_export_truncates_to_seconds() {
        let at = Utc.timestamp_opt(1_700_000_000, 999_999_999).unwrap();
        let key = ObjectKey::for_export(DEFAULT_KEY_PREFIX, at).unwrap();
        assert_eq!(key.as_str(), "cloudwatch-logs/logs-1700000000.json.gz");
    }

    #[test]
    fn test_same_second_same_key() {
        let first = Utc.timestamp_opt(1_700_000_000, 1_000).unwrap();
        let second = Utc.timestamp_opt(1_700_000_000, 900_000_000).unwrap();
        assert_eq!(
            ObjectKey::for_export("archive", first).unwrap(),
            ObjectKey::for_export("archive", second).unwrap()
        );
    }

    #[test]
    fn test_nested_prefix() {
        let at = Utc.timestamp_opt(42, 0).unwrap();
        let key = ObjectKey::for_export("prod/app", at).unwrap();
        assert_eq!(key.as_str(), "prod/app/logs-42.json.gz");
        assert_eq!(key.exported_at_seconds(), Some(42));
    }

    #[test]
    fn test_invalid_prefix() {
        let at = Utc.timestamp_opt(42, 0).unwrap();
        assert!(ObjectKey::for_export("", at).is_err());
        assert!(ObjectKey::for_export("/logs", at).is_err());
        assert!(ObjectKey::for_export("logs/", at).is_err());
    }
}

//! Result type alias for logvault

use super::errors::LogVaultError;

/// Result type alias for logvault operations
///
/// # Examples
///
/// ```
/// use logvault::domain::result::Result;
/// use logvault::domain::errors::LogVaultError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(LogVaultError::Configuration("missing bucket".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, LogVaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(LogVaultError::Other("boom".to_string()));
        assert!(result.is_err());
    }
}

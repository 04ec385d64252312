//! Custom error types for FinanceHub
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for FinanceHub operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Missing or invalid required field on a submitted form
    #[error("{0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors (poisoned locks)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Session command could not be parsed
    #[error("{0}")]
    Command(String),
}

impl FinanceError {
    /// The rejection raised when any field of a form is empty or unparseable
    pub fn missing_fields(form: &str) -> Self {
        Self::Validation(format!("Please fill all {} fields", form))
    }

    /// Rejection for an amount that is not a positive number
    pub fn invalid_amount(raw: &str) -> Self {
        Self::Validation(format!("Amount must be a positive number, got '{}'", raw))
    }

    /// Rejection for a date that is not `YYYY-MM-DD`
    pub fn invalid_date(raw: &str) -> Self {
        Self::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", raw))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether a session can keep running after reporting this error
    ///
    /// Export failures never touch the ledger, so a bad output path is
    /// reported like any other rejected command.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Command(_) | Self::Export(_)
        )
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for FinanceError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for FinanceError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for FinanceHub operations
pub type FinanceResult<T> = Result<T, FinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinanceError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_missing_fields_message() {
        let err = FinanceError::missing_fields("income");
        assert_eq!(err.to_string(), "Please fill all income fields");
        assert!(err.is_validation());
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_io_error_is_not_recoverable() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinanceError = io_err.into();
        assert!(matches!(err, FinanceError::Io(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_export_error_is_recoverable() {
        let err = FinanceError::Export("Failed to create /missing/x.json".into());
        assert!(err.is_recoverable());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_invalid_amount_message() {
        let err = FinanceError::invalid_amount("-5");
        assert_eq!(err.to_string(), "Amount must be a positive number, got '-5'");
    }
}

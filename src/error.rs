//! Unified error hierarchy for fitrisk
//!
//! Structured error types with context preservation and integration with
//! the tracing system.

use thiserror::Error;

use crate::import::ImportError;
use crate::risk::RiskError;

/// Top-level error type for all fitrisk operations
#[derive(Debug, Error)]
pub enum FitriskError {
    /// Risk estimation errors (invalid estimator input)
    #[error("Risk estimation error: {0}")]
    Risk(#[from] RiskError),

    /// Activity history import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Data validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for fitrisk operations
pub type Result<T> = std::result::Result<T, FitriskError>;

impl FitriskError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitriskError::Risk(_) => ErrorSeverity::Warning,
            FitriskError::Validation(_) => ErrorSeverity::Warning,
            FitriskError::Import(_) => ErrorSeverity::Error,
            FitriskError::Configuration(_) => ErrorSeverity::Error,
            FitriskError::Io(_) => ErrorSeverity::Error,
            FitriskError::Internal(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FitriskError::Risk(RiskError::InvalidInput(_)) => {
                "Not enough workout history to assess injury risk. Log a few more sessions and try again.".to_string()
            }
            FitriskError::Import(ImportError::UnsupportedFormat { format }) => {
                format!("Unsupported history format: {}. Use CSV or JSON.", format)
            }
            FitriskError::Configuration(reason) => {
                format!("Configuration problem: {}", reason)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical system error requiring immediate attention
    Critical,
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        let err = FitriskError::Risk(RiskError::InvalidInput("empty".to_string()));
        assert_eq!(err.severity(), ErrorSeverity::Warning);

        let err = FitriskError::Internal("test".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_user_message_for_invalid_input() {
        let err = FitriskError::Risk(RiskError::InvalidInput("empty series".to_string()));
        assert!(err.user_message().contains("Not enough workout history"));
    }

    #[test]
    fn test_risk_error_converts() {
        fn fails() -> Result<()> {
            Err(RiskError::InvalidInput("empty".to_string()))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(FitriskError::Risk(_))));
    }
}

//! Error types for driveback
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for driveback operations
#[derive(Error, Debug)]
pub enum DrivebackError {
    /// Configuration environment errors (unresolvable directories, unusable files)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Implement From traits for common error types

impl From<std::io::Error> for DrivebackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for driveback operations
pub type DrivebackResult<T> = Result<T, DrivebackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DrivebackError::Config("no config directory".into());
        assert_eq!(err.to_string(), "Configuration error: no config directory");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DrivebackError = io_err.into();
        assert!(matches!(err, DrivebackError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: denied");
    }
}

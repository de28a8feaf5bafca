//! Error types for reliant operations.
//!
//! This module defines [`ReliantError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Config-stage errors are fatal and reported before any rule runs
//! - Per-rule failures are data on [`ExecutionResult`](crate::engine::ExecutionResult),
//!   not errors; only the fail-fast batch policy lifts them into
//!   [`ReliantError::RuleLaunch`]
//! - Use `anyhow::Error` (via `ReliantError::Other`) for unexpected faults

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for reliant operations.
#[derive(Debug, Error)]
pub enum ReliantError {
    /// Rule file not found at expected location.
    #[error("Could not load {}: file not found", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Rule file exists but could not be read.
    #[error("Could not load {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule file is not valid JSON or has the wrong shape.
    #[error("The {} file could not be parsed. Check that it is valid JSON: {message}", .path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// Rule file parsed but contains an unusable rule.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A rule's command could not run (fail-fast batches only).
    #[error("{rule} test failed: {message}")]
    RuleLaunch { rule: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for reliant operations.
pub type Result<T> = std::result::Result<T, ReliantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = ReliantError::ConfigNotFound {
            path: PathBuf::from("/foo/.reliantrc"),
        };
        assert!(err.to_string().contains("/foo/.reliantrc"));
    }

    #[test]
    fn config_read_keeps_source() {
        let err = ReliantError::ConfigRead {
            path: PathBuf::from(".reliantrc"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ReliantError::ConfigParseError {
            path: PathBuf::from(".reliantrc"),
            message: "expected value at line 1 column 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains(".reliantrc"));
        assert!(msg.contains("valid JSON"));
        assert!(msg.contains("line 1 column 1"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = ReliantError::ConfigValidationError {
            message: "rule 'node' has an empty command".into(),
        };
        assert!(err.to_string().contains("empty command"));
    }

    #[test]
    fn rule_launch_displays_rule_and_message() {
        let err = ReliantError::RuleLaunch {
            rule: "Git".into(),
            message: "not found".into(),
        };
        assert_eq!(err.to_string(), "Git test failed: not found");
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ReliantError = io_err.into();
        assert!(matches!(err, ReliantError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: ReliantError = anyhow::anyhow!("worker lost").into();
        assert_eq!(err.to_string(), "worker lost");
    }
}

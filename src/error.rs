//! Error types for taskboard
//!
//! The query surface never fails; errors only come from the outer boundary
//! (configuration, seed files, command-line arguments).
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad args, bad config, bad seed)
//! - 3: Validation failed under `check --strict`
//! - 4: Operation failed (IO, parse)

use std::path::PathBuf;
use thiserror::Error;

use crate::check::Issue;

/// Exit codes for the taskboard CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const VALIDATION_FAILED: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for taskboard operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid seed file {path}: {reason}")]
    InvalidSeed { path: PathBuf, reason: String },

    // Validation (exit code 3)
    #[error("Validation failed: {} issue(s) found", .0.len())]
    ValidationFailed(Vec<Issue>),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidConfig(_) | Error::InvalidArgument(_) | Error::InvalidSeed { .. } => {
                exit_codes::USER_ERROR
            }

            Error::ValidationFailed(_) => exit_codes::VALIDATION_FAILED,

            Error::Io(_) | Error::Json(_) | Error::TomlParse(_) | Error::TomlSerialize(_) => {
                exit_codes::OPERATION_FAILED
            }
        }
    }

    /// Structured context for JSON error output, when the variant carries any
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::InvalidSeed { path, .. } => Some(serde_json::json!({
                "path": path.to_string_lossy(),
            })),
            Error::ValidationFailed(issues) => Some(serde_json::json!({
                "issue_count": issues.len(),
                "issues": issues,
            })),
            _ => None,
        }
    }
}

/// Result type alias for taskboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
            details: err.details(),
        }
    }
}

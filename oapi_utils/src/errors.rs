//! Error types for the path, string and folder utilities.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for oapi_utils operations
pub type UtilResult<T> = Result<T, UtilError>;

#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum UtilError {
    /// A required path argument was empty
    #[error("Empty path given for '{argument}'")]
    EmptyPath { argument: String },

    /// A path that must be absolute is not
    #[error("Path is not absolute: {path}")]
    NotAbsolute { path: String },

    /// Two paths that must share a drive or share do not
    #[error("Paths do not share a root: '{first}' and '{second}'")]
    RootMismatch { first: String, second: String },

    /// A path is malformed (e.g. climbs above its root)
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// A filesystem operation failed
    #[error("I/O error on '{path}': {reason}")]
    Io { path: String, reason: String },
}

impl UtilError {
    pub fn empty_path(argument: impl Into<String>) -> Self {
        UtilError::EmptyPath {
            argument: argument.into(),
        }
    }

    pub fn not_absolute(path: impl Into<String>) -> Self {
        UtilError::NotAbsolute { path: path.into() }
    }

    pub fn root_mismatch(first: impl Into<String>, second: impl Into<String>) -> Self {
        UtilError::RootMismatch {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        UtilError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: &std::path::Path, error: std::io::Error) -> Self {
        UtilError::Io {
            path: path.display().to_string(),
            reason: error.to_string(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            UtilError::EmptyPath { .. } => "EMPTY_PATH",
            UtilError::NotAbsolute { .. } => "NOT_ABSOLUTE",
            UtilError::RootMismatch { .. } => "ROOT_MISMATCH",
            UtilError::InvalidPath { .. } => "INVALID_PATH",
            UtilError::Io { .. } => "IO_ERROR",
        }
    }
}

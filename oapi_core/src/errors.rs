//! # Error Types
//!
//! The single error type surfaced by every wrapper. A host call that returns a
//! nonzero status and a precondition that fails before the host is ever
//! called both end up here, so callers only ever match on [`ApiError`].
//!
//! ## Example
//!
//! ```rust
//! use oapi_core::errors::{ApiError, ApiResult};
//!
//! fn validate_ratio(damping_ratio: f64) -> ApiResult<()> {
//!     if !(0.0..1.0).contains(&damping_ratio) {
//!         return Err(ApiError::invalid_input(
//!             "damping_ratio",
//!             damping_ratio.to_string(),
//!             "Damping ratio must be in [0, 1)",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for oapi_core operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Uniform error type for host calls and local precondition checks.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ApiError {
    /// The host returned a nonzero status code
    #[error("Host call failed: {operation} returned status {status}{}", message_suffix(.message))]
    HostCallFailed {
        operation: String,
        status: i32,
        message: Option<String>,
    },

    /// An input value is invalid (out of range, malformed, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Two parallel arrays that must have the same length do not
    #[error("Length mismatch: '{first}' has {first_len} items but '{second}' has {second_len} items")]
    LengthMismatch {
        first: String,
        first_len: usize,
        second: String,
        second_len: usize,
    },

    /// The host returned a code outside the translation table
    #[error("Unknown {enum_name} code: {code}")]
    UnknownCode { enum_name: String, code: String },

    /// An output slot came back with an unexpected kind or length
    #[error("Unexpected reply from {operation}: {reason}")]
    Marshalling { operation: String, reason: String },

    /// The configured host product/version does not offer this operation
    #[error("{operation} is not available on {target}")]
    Unsupported { operation: String, target: String },

    /// The handle was used re-entrantly while another call was in flight
    #[error("Host handle is busy: {operation} was called during another host call")]
    HostBusy { operation: String },

    /// Configuration could not be read or parsed
    #[error("Configuration error in {source_name}: {reason}")]
    Config { source_name: String, reason: String },
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(text) if !text.is_empty() => format!(" ({})", text),
        _ => String::new(),
    }
}

impl ApiError {
    /// Create a HostCallFailed error
    pub fn host_call_failed(operation: impl Into<String>, status: i32, message: Option<String>) -> Self {
        ApiError::HostCallFailed {
            operation: operation.into(),
            status,
            message,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ApiError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a LengthMismatch error
    pub fn length_mismatch(
        first: impl Into<String>,
        first_len: usize,
        second: impl Into<String>,
        second_len: usize,
    ) -> Self {
        ApiError::LengthMismatch {
            first: first.into(),
            first_len,
            second: second.into(),
            second_len,
        }
    }

    /// Create an UnknownCode error
    pub fn unknown_code(enum_name: impl Into<String>, code: impl ToString) -> Self {
        ApiError::UnknownCode {
            enum_name: enum_name.into(),
            code: code.to_string(),
        }
    }

    /// Create a Marshalling error
    pub fn marshalling(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        ApiError::Marshalling {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create an Unsupported error
    pub fn unsupported(operation: impl Into<String>, target: impl ToString) -> Self {
        ApiError::Unsupported {
            operation: operation.into(),
            target: target.to_string(),
        }
    }

    /// Create a Config error
    pub fn config(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        ApiError::Config {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Host status code, if this error came from a host call
    pub fn status(&self) -> Option<i32> {
        match self {
            ApiError::HostCallFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure was detected locally, before the host was called
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidInput { .. } | ApiError::LengthMismatch { .. } | ApiError::Unsupported { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::HostCallFailed { .. } => "HOST_CALL_FAILED",
            ApiError::InvalidInput { .. } => "INVALID_INPUT",
            ApiError::LengthMismatch { .. } => "LENGTH_MISMATCH",
            ApiError::UnknownCode { .. } => "UNKNOWN_CODE",
            ApiError::Marshalling { .. } => "MARSHALLING",
            ApiError::Unsupported { .. } => "UNSUPPORTED",
            ApiError::HostBusy { .. } => "HOST_BUSY",
            ApiError::Config { .. } => "CONFIG",
        }
    }
}

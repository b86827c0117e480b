//! # oapi_utils - Path, String and Folder Helpers
//!
//! Standalone helpers used around the host bindings: converting model paths
//! between absolute and relative forms, wildcard name matching, and folder
//! enumeration. Nothing here depends on `oapi_core` or on a live host.
//!
//! ## Modules
//!
//! - [`paths`] - Absolute/relative conversion, backslash normalization, extension matching
//! - [`strings`] - Case-aware comparison, wildcards, text filtering
//! - [`folders`] - Directory listing and the read-only attribute
//! - [`errors`] - Structured error types

pub mod errors;
pub mod folders;
pub mod paths;
pub mod strings;

// Re-export commonly used types at crate root for convenience
pub use errors::{UtilError, UtilResult};
pub use folders::FileFilter;
pub use paths::{convert_path_absolute_to_relative, convert_path_relative_to_absolute, file_name_extensions_match};
pub use strings::{filter_from_text, is_name_matching, strings_match, MatchCase};

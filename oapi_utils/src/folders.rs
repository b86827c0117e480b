//! # Folder Utilities
//!
//! Directory enumeration with name and extension filters, and the read-only
//! attribute toggle used before overwriting host model files.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use oapi_utils::folders::{list_files, FileFilter};
//!
//! let filter = FileFilter::default().with_extensions(&[".sdb", ".edb"]);
//! for file in list_files(Path::new(r"C:\Models"), &filter).unwrap() {
//!     println!("{}", file.display());
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{UtilError, UtilResult};
use crate::paths::file_name_extensions_match_any;
use crate::strings::{wildcard_match, MatchCase};

/// Which files [`list_files`] returns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFilter {
    /// Substring the file name must contain
    pub name_contains: Option<String>,
    /// Extension patterns (`".sdb"`, `"*.e?b"`); empty accepts all
    pub extensions: Vec<String>,
    /// Descend into subfolders
    pub recursive: bool,
    pub match_case: MatchCase,
}

impl FileFilter {
    pub fn with_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.extensions = extensions.iter().map(|e| e.as_ref().to_string()).collect();
        self
    }

    pub fn with_name_contains(mut self, text: impl Into<String>) -> Self {
        self.name_contains = Some(text.into());
        self
    }

    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Test a bare file name against the filter
    pub fn matches(&self, file_name: &str) -> bool {
        let name_ok = match self.name_contains.as_deref() {
            None | Some("") => true,
            Some(text) => match self.match_case {
                MatchCase::Sensitive => file_name.contains(text),
                MatchCase::Insensitive => file_name.to_lowercase().contains(&text.to_lowercase()),
            },
        };
        name_ok && file_name_extensions_match_any(file_name, &self.extensions)
    }
}

fn read_dir(dir: &Path) -> UtilResult<Vec<fs::DirEntry>> {
    fs::read_dir(dir)
        .and_then(|entries| entries.collect::<Result<Vec<_>, _>>())
        .map_err(|e| UtilError::io(dir, e))
}

/// Files under `dir` passing `filter`, sorted by path
pub fn list_files(dir: &Path, filter: &FileFilter) -> UtilResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_files(dir, filter, &mut files)?;
    files.sort();
    debug!(dir = %dir.display(), found = files.len(), "listed files");
    Ok(files)
}

fn collect_files(dir: &Path, filter: &FileFilter, files: &mut Vec<PathBuf>) -> UtilResult<()> {
    for entry in read_dir(dir)? {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| UtilError::io(&path, e))?;
        if file_type.is_dir() {
            if filter.recursive {
                collect_files(&path, filter, files)?;
            }
        } else if filter.matches(&entry.file_name().to_string_lossy()) {
            files.push(path);
        }
    }
    Ok(())
}

/// Immediate subfolders of `dir`, optionally only those whose name matches a wildcard pattern
pub fn list_folders(dir: &Path, pattern: Option<&str>) -> UtilResult<Vec<PathBuf>> {
    let mut folders = Vec::new();
    for entry in read_dir(dir)? {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let keep = match pattern {
            Some(pattern) => wildcard_match(pattern, &entry.file_name().to_string_lossy(), MatchCase::Insensitive),
            None => true,
        };
        if keep {
            folders.push(path);
        }
    }
    folders.sort();
    Ok(folders)
}

pub fn is_read_only(path: &Path) -> UtilResult<bool> {
    let metadata = fs::metadata(path).map_err(|e| UtilError::io(path, e))?;
    Ok(metadata.permissions().readonly())
}

/// Set or clear the read-only attribute of a file
#[allow(clippy::permissions_set_readonly_false)]
pub fn set_read_only(path: &Path, read_only: bool) -> UtilResult<()> {
    let mut permissions = fs::metadata(path)
        .map_err(|e| UtilError::io(path, e))?
        .permissions();
    if permissions.readonly() == read_only {
        return Ok(());
    }
    permissions.set_readonly(read_only);
    fs::set_permissions(path, permissions).map_err(|e| UtilError::io(path, e))?;
    debug!(path = %path.display(), read_only, "changed read-only attribute");
    Ok(())
}

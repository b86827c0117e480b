//! # Path Utilities
//!
//! Windows-style path manipulation done on strings, so model paths written
//! by the host can be handled on any platform. Separators are normalized to
//! backslashes; comparisons of path components ignore case.
//!
//! The `try_*` conversions return a [`UtilResult`]. Their lenient
//! counterparts return an empty string on invalid input and log a warning.
//!
//! ## Example
//!
//! ```rust
//! use oapi_utils::paths::{
//!     convert_path_absolute_to_relative, convert_path_relative_to_absolute,
//!     file_name_extensions_match,
//! };
//!
//! let relative = convert_path_absolute_to_relative(r"C:\Foo\Bar\Moo\Nar", r"C:\Foo\Bar");
//! assert_eq!(relative, r"..\..");
//! assert_eq!(convert_path_relative_to_absolute(r"C:\Foo\Bar\Moo\Nar", &relative), r"C:\Foo\Bar");
//!
//! assert!(file_name_extensions_match("Foo.Bar", ".B??"));
//! ```

use tracing::warn;

use crate::errors::{UtilError, UtilResult};
use crate::strings::{strings_match, wildcard_match, MatchCase};

const SEPARATOR: char = '\\';
const UNC_PREFIX: &str = r"\\";

/// Use backslashes throughout and collapse repeated separators.
///
/// A leading `\\` (UNC share) is kept.
pub fn normalize_backslashes(path: &str) -> String {
    let unified = path.trim().replace('/', r"\");
    let (prefix, rest) = match unified.strip_prefix(UNC_PREFIX) {
        Some(rest) => (UNC_PREFIX, rest),
        None => ("", unified.as_str()),
    };

    let mut normalized = String::with_capacity(unified.len());
    normalized.push_str(prefix);
    let mut previous_was_separator = false;
    for c in rest.chars() {
        if c == SEPARATOR {
            if previous_was_separator {
                continue;
            }
            previous_was_separator = true;
        } else {
            previous_was_separator = false;
        }
        normalized.push(c);
    }
    normalized
}

pub fn trim_trailing_backslash(path: &str) -> String {
    let normalized = normalize_backslashes(path);
    match normalized.strip_suffix(SEPARATOR) {
        // keep "C:\" a root
        Some(trimmed) if !trimmed.is_empty() && !is_drive(trimmed) => trimmed.to_string(),
        _ => normalized,
    }
}

pub fn ensure_trailing_backslash(path: &str) -> String {
    let mut normalized = normalize_backslashes(path);
    if !normalized.ends_with(SEPARATOR) {
        normalized.push(SEPARATOR);
    }
    normalized
}

fn is_drive(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Split a normalized path into its root and the remainder.
fn split_root(normalized: &str) -> Option<(String, &str)> {
    if let Some(rest) = normalized.strip_prefix(UNC_PREFIX) {
        let mut parts = rest.splitn(3, SEPARATOR);
        let server = parts.next().filter(|s| !s.is_empty())?;
        return match parts.next().filter(|s| !s.is_empty()) {
            Some(share) => Some((
                format!(r"\\{}\{}", server, share),
                parts.next().unwrap_or(""),
            )),
            None => Some((format!(r"\\{}", server), "")),
        };
    }

    let drive = normalized.get(..2).filter(|d| is_drive(d))?;
    let rest = &normalized[2..];
    if rest.is_empty() || rest.starts_with(SEPARATOR) {
        Some((drive.to_string(), rest))
    } else {
        // "C:Foo" is drive-relative, not absolute
        None
    }
}

/// True for `X:\...` and `\\server\share\...` paths
pub fn is_absolute(path: &str) -> bool {
    split_root(&normalize_backslashes(path)).is_some()
}

/// `C:` or `\\server\share`, when the path has one
pub fn root_of(path: &str) -> Option<String> {
    split_root(&normalize_backslashes(path)).map(|(root, _)| root)
}

fn components(rest: &str) -> Vec<&str> {
    rest.split(SEPARATOR).filter(|c| !c.is_empty()).collect()
}

/// Fold "." and ".." out of `parts`. Climbing above the root is an error.
fn resolve<'a>(parts: impl IntoIterator<Item = &'a str>, path: &str) -> UtilResult<Vec<&'a str>> {
    let mut resolved = Vec::new();
    for part in parts {
        match part {
            "." => {}
            ".." => {
                if resolved.pop().is_none() {
                    return Err(UtilError::invalid_path(path, "climbs above its root"));
                }
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

fn join_absolute(root: &str, parts: &[&str]) -> String {
    if parts.is_empty() {
        return if root.starts_with(UNC_PREFIX) {
            root.to_string()
        } else {
            format!(r"{}\", root)
        };
    }
    format!(r"{}\{}", root, parts.join(r"\"))
}

fn require_absolute(path: &str, argument: &str) -> UtilResult<(String, String)> {
    if path.trim().is_empty() {
        return Err(UtilError::empty_path(argument));
    }
    let normalized = normalize_backslashes(path);
    match split_root(&normalized) {
        Some((root, rest)) => Ok((root, rest.to_string())),
        None => Err(UtilError::not_absolute(path)),
    }
}

/// Append a separator when `source` ended in one and the result names a folder below the root.
fn carry_trailing_separator(mut result: String, source: &str, has_parts: bool) -> String {
    if has_parts && source.ends_with(SEPARATOR) && !result.ends_with(SEPARATOR) {
        result.push(SEPARATOR);
    }
    result
}

/// Express `target` relative to the directory `from_directory`.
///
/// Both paths must be absolute and share a drive or UNC share. Equal paths
/// give `"."`. A trailing `\` on `target` is kept.
pub fn try_convert_path_absolute_to_relative(from_directory: &str, target: &str) -> UtilResult<String> {
    let (from_root, from_rest) = require_absolute(from_directory, "from_directory")?;
    let (target_root, target_rest) = require_absolute(target, "target")?;
    if !strings_match(&from_root, &target_root) {
        return Err(UtilError::root_mismatch(from_directory, target));
    }

    let from_parts = resolve(components(&from_rest), from_directory)?;
    let target_parts = resolve(components(&target_rest), target)?;

    let common = from_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| strings_match(a, b))
        .count();

    let relative: Vec<&str> = std::iter::repeat("..")
        .take(from_parts.len() - common)
        .chain(target_parts[common..].iter().copied())
        .collect();

    let joined = if relative.is_empty() {
        ".".to_string()
    } else {
        relative.join(r"\")
    };
    Ok(carry_trailing_separator(joined, &target_rest, !target_parts.is_empty()))
}

/// Resolve `relative` against the directory `from_directory`.
///
/// A `relative` that is already absolute must sit on the same drive or share
/// as `from_directory`; it is returned normalized. A trailing `\` on
/// `relative` is kept.
pub fn try_convert_path_relative_to_absolute(from_directory: &str, relative: &str) -> UtilResult<String> {
    if relative.trim().is_empty() {
        return Err(UtilError::empty_path("relative"));
    }
    let (from_root, from_rest) = require_absolute(from_directory, "from_directory")?;
    let normalized_relative = normalize_backslashes(relative);

    let (root, parts) = match split_root(&normalized_relative) {
        Some((relative_root, relative_rest)) => {
            if !strings_match(&from_root, &relative_root) {
                return Err(UtilError::root_mismatch(from_directory, relative));
            }
            (relative_root, resolve(components(relative_rest), relative)?)
        }
        None => {
            let parts = resolve(
                components(&from_rest).into_iter().chain(components(&normalized_relative)),
                relative,
            )?;
            (from_root, parts)
        }
    };

    let absolute = join_absolute(&root, &parts);
    Ok(carry_trailing_separator(absolute, &normalized_relative, !parts.is_empty()))
}

/// Lenient form of [`try_convert_path_absolute_to_relative`]: `""` on invalid input
pub fn convert_path_absolute_to_relative(from_directory: &str, target: &str) -> String {
    try_convert_path_absolute_to_relative(from_directory, target).unwrap_or_else(|error| {
        warn!(from_directory, target_path = target, code = error.error_code(), "{}", error);
        String::new()
    })
}

/// Lenient form of [`try_convert_path_relative_to_absolute`]: `""` on invalid input
pub fn convert_path_relative_to_absolute(from_directory: &str, relative: &str) -> String {
    try_convert_path_relative_to_absolute(from_directory, relative).unwrap_or_else(|error| {
        warn!(from_directory, relative, code = error.error_code(), "{}", error);
        String::new()
    })
}

/// Append `part` to `base`; an absolute `part` wins
pub fn combine(base: &str, part: &str) -> String {
    if is_absolute(part) || base.trim().is_empty() {
        return normalize_backslashes(part);
    }
    let part = normalize_backslashes(part);
    let part = part.trim_start_matches(SEPARATOR);
    if part.is_empty() {
        return normalize_backslashes(base);
    }
    format!("{}{}", ensure_trailing_backslash(base), part)
}

/// Last component of the path
pub fn file_name(path: &str) -> String {
    let normalized = normalize_backslashes(path);
    match normalized.rfind(SEPARATOR) {
        Some(index) => normalized[index + 1..].to_string(),
        None if is_drive(&normalized) => String::new(),
        None => normalized,
    }
}

/// Extension including its dot (`".sdb"`), or `""`
pub fn extension(path: &str) -> String {
    let name = file_name(path);
    match name.rfind('.') {
        Some(index) if index + 1 < name.len() => name[index..].to_string(),
        _ => String::new(),
    }
}

pub fn file_name_without_extension(path: &str) -> String {
    let name = file_name(path);
    match name.rfind('.') {
        Some(index) => name[..index].to_string(),
        None => name,
    }
}

/// Directory holding the path; `""` when there is none
pub fn parent_directory(path: &str) -> String {
    let trimmed = trim_trailing_backslash(path);
    if let Some((root, rest)) = split_root(&trimmed) {
        let parts = components(rest);
        return match parts.split_last() {
            Some((_, parents)) => join_absolute(&root, parents),
            None => String::new(),
        };
    }
    match trimmed.rfind(SEPARATOR) {
        Some(index) => trimmed[..index].to_string(),
        None => String::new(),
    }
}

/// Compare the extension of `file_name` against `extension_compare`.
///
/// The comparison ignores case and the pattern may use `?` and `*`. A
/// leading `.` or `*.` on the pattern is optional.
pub fn file_name_extensions_match(file_name: &str, extension_compare: &str) -> bool {
    let pattern = extension_compare.trim();
    let pattern = pattern
        .strip_prefix("*.")
        .or_else(|| pattern.strip_prefix('.'))
        .unwrap_or(pattern);
    let ext = extension(file_name);
    wildcard_match(pattern, ext.trim_start_matches('.'), MatchCase::Insensitive)
}

/// True when any pattern matches; an empty list matches everything
pub fn file_name_extensions_match_any<S: AsRef<str>>(file_name: &str, extension_compares: &[S]) -> bool {
    extension_compares.is_empty()
        || extension_compares
            .iter()
            .any(|pattern| file_name_extensions_match(file_name, pattern.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_absolute_to_relative_literal() {
        assert_eq!(convert_path_absolute_to_relative(r"C:\Foo\Bar\Moo\Nar", r"C:\Foo\Bar"), r"..\..");
    }

    #[test]
    fn test_absolute_to_relative_cases() {
        let rel = |from, target| try_convert_path_absolute_to_relative(from, target).unwrap();
        assert_eq!(rel(r"C:\Foo", r"C:\Foo\Bar\model.sdb"), r"Bar\model.sdb");
        assert_eq!(rel(r"C:\Foo\A", r"C:\Foo\B\c.txt"), r"..\B\c.txt");
        assert_eq!(rel(r"C:\Foo\Bar\", r"c:\foo\bar"), ".");
        assert_eq!(rel("C:/Foo/Bar", r"C:\Foo\Baz"), r"..\Baz");
        assert_eq!(rel(r"\\srv\models\a", r"\\SRV\Models\b"), r"..\b");
        assert_eq!(rel(r"C:\Foo\Bar\Moo", r"C:\Foo\Baz\"), r"..\..\Baz\");
        assert_eq!(rel(r"C:\Foo\Bar", r"C:\Foo\Bar\"), r".\");
        assert_eq!(rel(r"C:\Foo", r"C:\"), "..");
    }

    #[test]
    fn test_invalid_inputs() {
        let err = |from, target| try_convert_path_absolute_to_relative(from, target).unwrap_err();
        assert_eq!(err("", r"C:\Foo").error_code(), "EMPTY_PATH");
        assert_eq!(err(r"Foo\Bar", r"C:\Foo").error_code(), "NOT_ABSOLUTE");
        assert_eq!(err(r"C:Foo", r"C:\Foo").error_code(), "NOT_ABSOLUTE");
        assert_eq!(err(r"C:\Foo", r"D:\Foo").error_code(), "ROOT_MISMATCH");
        assert_eq!(err(r"C:\Foo\..\..", r"C:\Foo").error_code(), "INVALID_PATH");

        assert_eq!(convert_path_absolute_to_relative(r"C:\Foo", r"D:\Foo"), "");
        assert_eq!(convert_path_relative_to_absolute("", r"..\Foo"), "");
        assert_eq!(convert_path_relative_to_absolute(r"C:\Foo", r"..\..\Bar"), "");
    }

    #[test]
    fn test_relative_on_other_drive_is_rejected() {
        let err = try_convert_path_relative_to_absolute(r"C:\Foo", r"D:\Bar").unwrap_err();
        assert_eq!(err.error_code(), "ROOT_MISMATCH");
        assert_eq!(convert_path_relative_to_absolute(r"C:\Foo", r"D:\Bar"), "");

        let err = try_convert_path_relative_to_absolute(r"\\srv\share\a", r"\\srv\other\b").unwrap_err();
        assert_eq!(err.error_code(), "ROOT_MISMATCH");
        assert_eq!(
            try_convert_path_relative_to_absolute(r"C:\Foo", r"c:\Other\..\x").unwrap(),
            r"c:\x"
        );
    }

    #[test]
    fn test_relative_to_absolute() {
        let abs = |from, relative| try_convert_path_relative_to_absolute(from, relative).unwrap();
        assert_eq!(abs(r"C:\Foo\Bar\Moo\Nar", r"..\.."), r"C:\Foo\Bar");
        assert_eq!(abs(r"C:\Foo", r".\Bar\.\x.sdb"), r"C:\Foo\Bar\x.sdb");
        assert_eq!(abs(r"C:\Foo", ".."), r"C:\");
        assert_eq!(abs(r"C:\Foo", r"C:\Other\..\x"), r"C:\x");
        assert_eq!(abs(r"C:\Foo", r"..\Bar\"), r"C:\Bar\");
        assert_eq!(abs(r"C:\Foo", r"..\"), r"C:\");
        assert_eq!(abs(r"\\srv\share\a", r"..\b"), r"\\srv\share\b");
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            (r"C:\Foo\Bar\Moo\Nar", r"C:\Foo\Bar"),
            (r"C:\Foo", r"C:\Foo\Bar\Baz\model.sdb"),
            (r"C:\Projects\Bridge\Run1", r"C:\Data\Spectra\rs.txt"),
            (r"C:\", r"C:\Foo"),
            (r"C:\Foo\Bar", r"C:\Foo\Bar"),
            (r"\\srv\share\a\b", r"\\srv\share\c"),
            (r"C:\Foo\Bar\Moo", r"C:\Foo\Baz\"),
            (r"C:\Foo\Bar", r"C:\Foo\Bar\"),
        ];
        for (from, target) in cases {
            let relative = try_convert_path_absolute_to_relative(from, target).unwrap();
            let back = try_convert_path_relative_to_absolute(from, &relative).unwrap();
            assert_eq!(back, target, "from {} via {}", from, relative);
        }
    }

    #[test]
    fn test_normalization_helpers() {
        assert_eq!(normalize_backslashes("C://Foo//Bar/"), r"C:\Foo\Bar\");
        assert_eq!(normalize_backslashes(r"\\srv\\share"), r"\\srv\share");
        assert_eq!(trim_trailing_backslash(r"C:\Foo\"), r"C:\Foo");
        assert_eq!(trim_trailing_backslash(r"C:\"), r"C:\");
        assert_eq!(ensure_trailing_backslash(r"C:\Foo"), r"C:\Foo\");
        assert_eq!(root_of(r"c:\Foo"), Some("c:".to_string()));
        assert_eq!(root_of(r"\\srv\share\x"), Some(r"\\srv\share".to_string()));
        assert_eq!(root_of(r"Foo\Bar"), None);
        assert!(is_absolute("D:/x"));
        assert!(!is_absolute(r"\Foo"));
    }

    #[test]
    fn test_file_name_helpers() {
        assert_eq!(file_name(r"C:\Foo\model.sdb"), "model.sdb");
        assert_eq!(file_name_without_extension(r"C:\Foo\model.v2.sdb"), "model.v2");
        assert_eq!(extension(r"C:\Foo\model.SDB"), ".SDB");
        assert_eq!(extension(r"C:\Foo.d\model"), "");
        assert_eq!(extension("trailing."), "");
        assert_eq!(parent_directory(r"C:\Foo\model.sdb"), r"C:\Foo");
        assert_eq!(parent_directory(r"C:\Foo"), r"C:\");
        assert_eq!(parent_directory(r"C:\"), "");
        assert_eq!(parent_directory("model.sdb"), "");
        assert_eq!(combine(r"C:\Foo", r"Bar\x.txt"), r"C:\Foo\Bar\x.txt");
        assert_eq!(combine(r"C:\Foo\", r"\Bar"), r"C:\Foo\Bar");
        assert_eq!(combine(r"C:\Foo", r"D:\Bar"), r"D:\Bar");
    }

    #[test]
    fn test_extension_wildcards() {
        assert!(file_name_extensions_match("Foo.Bar", ".B??"));
        assert!(file_name_extensions_match("Foo.Bar", "bar"));
        assert!(file_name_extensions_match("Foo.Bar", "*.b*"));
        assert!(!file_name_extensions_match("Foo.Bar", ".B?"));
        assert!(!file_name_extensions_match("Foo", ".B??"));
        assert!(file_name_extensions_match("Foo", "*"));
        assert!(file_name_extensions_match_any("a.sdb", &[".edb", ".sdb"]));
        assert!(file_name_extensions_match_any::<&str>("a.sdb", &[]));
        assert!(!file_name_extensions_match_any("a.txt", &[".edb", ".sdb"]));
    }

    fn segment() -> impl Strategy<Value = String> {
        "[a-z0-9_]{1,6}"
    }

    fn absolute(drive: &str, parts: &[String], trailing: bool) -> String {
        let mut path = format!(r"{}:\{}", drive, parts.join(r"\"));
        if trailing && !parts.is_empty() {
            path.push('\\');
        }
        path
    }

    proptest! {
        #[test]
        fn test_round_trip_on_shared_root(
            drive in "[A-Z]",
            base in prop::collection::vec(segment(), 0..4),
            from_tail in prop::collection::vec(segment(), 0..4),
            target_tail in prop::collection::vec(segment(), 0..4),
            trailing in any::<bool>(),
        ) {
            let from = absolute(&drive, &[base.clone(), from_tail].concat(), false);
            let target = absolute(&drive, &[base, target_tail].concat(), trailing);

            let relative = try_convert_path_absolute_to_relative(&from, &target).unwrap();
            prop_assert!(!is_absolute(&relative));
            let back = try_convert_path_relative_to_absolute(&from, &relative).unwrap();
            prop_assert_eq!(back, target);
        }

        #[test]
        fn test_mismatched_drives_give_empty_text(
            parts in prop::collection::vec(segment(), 0..4),
        ) {
            let from = absolute("C", &parts, false);
            let other = absolute("D", &parts, false);
            prop_assert_eq!(convert_path_absolute_to_relative(&from, &other), "");
            prop_assert_eq!(convert_path_relative_to_absolute(&from, &other), "");
        }
    }
}

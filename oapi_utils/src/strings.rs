//! # String Utilities
//!
//! Comparison, wildcard matching and filtering of names. Comparisons are
//! case-insensitive unless [`MatchCase::Sensitive`] is asked for.
//!
//! ## Example
//!
//! ```rust
//! use oapi_utils::strings::{filter_from_text, is_name_matching, strings_match};
//!
//! assert!(strings_match("Frame1", "FRAME1"));
//! assert!(is_name_matching("W18X35", "w18*"));
//! assert_eq!(filter_from_text("Level 2 Slab", " 2", true, true), "Level Slab");
//! ```

use serde::{Deserialize, Serialize};

/// Whether comparisons respect letter case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchCase {
    #[default]
    Insensitive,
    Sensitive,
}

fn fold(text: &str, case: MatchCase) -> String {
    match case {
        MatchCase::Insensitive => text.to_lowercase(),
        MatchCase::Sensitive => text.to_string(),
    }
}

/// Case-insensitive equality
pub fn strings_match(first: &str, second: &str) -> bool {
    strings_match_with(first, second, MatchCase::Insensitive)
}

pub fn strings_match_with(first: &str, second: &str, case: MatchCase) -> bool {
    match case {
        MatchCase::Sensitive => first == second,
        MatchCase::Insensitive => first.to_lowercase() == second.to_lowercase(),
    }
}

/// Match `text` against a pattern where `?` is any one character and `*` any run.
pub fn wildcard_match(pattern: &str, text: &str, case: MatchCase) -> bool {
    let pattern: Vec<char> = fold(pattern, case).chars().collect();
    let text: Vec<char> = fold(text, case).chars().collect();

    let (mut p, mut t) = (0, 0);
    let mut star: Option<usize> = None;
    let mut resume = 0;
    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some(p);
            resume = t;
            p += 1;
        } else if let Some(s) = star {
            // let the last star swallow one more character
            p = s + 1;
            resume += 1;
            t = resume;
        } else {
            return false;
        }
    }
    pattern[p..].iter().all(|c| *c == '*')
}

/// Case-insensitive name match; the pattern may use `?` and `*`
pub fn is_name_matching(name: &str, pattern: &str) -> bool {
    is_name_matching_with(name, pattern, MatchCase::Insensitive)
}

pub fn is_name_matching_with(name: &str, pattern: &str, case: MatchCase) -> bool {
    wildcard_match(pattern, name, case)
}

/// Remove the first occurrence of `filter` from `text`, keeping the part
/// before it and/or the part after it.
///
/// Text that does not contain the filter is returned unchanged.
pub fn filter_from_text(text: &str, filter: &str, retain_prefix: bool, retain_suffix: bool) -> String {
    if filter.is_empty() {
        return text.to_string();
    }
    let Some(start) = text.find(filter) else {
        return text.to_string();
    };
    let mut result = String::with_capacity(text.len());
    if retain_prefix {
        result.push_str(&text[..start]);
    }
    if retain_suffix {
        result.push_str(&text[start + filter.len()..]);
    }
    result
}

/// Items matching a wildcard pattern, in their original order
pub fn filter_list<S: AsRef<str>>(items: &[S], pattern: &str, case: MatchCase) -> Vec<String> {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| wildcard_match(pattern, item, case))
        .map(str::to_string)
        .collect()
}

/// Join the parts that are not blank
pub fn join_non_empty<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Split on `separator`, trimming each part and dropping blank ones
pub fn split_trimmed(text: &str, separator: char) -> Vec<String> {
    text.split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

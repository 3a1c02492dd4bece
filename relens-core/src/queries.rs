//! Best-effort extraction of an embedded query list
//!
//! Research tools report the searches they ran inside free-form result text,
//! as a serialized list literal such as `queries = ["a", "b"]`. This module
//! is the compatibility shim that digs that list back out. It is advisory:
//! when the embedded structure does not match, the caller gets an empty list,
//! never an error.
//!
//! The shim is deliberately a single narrow function so it can be deleted
//! once the upstream tool emits a structured payload.

use once_cell::sync::Lazy;
use regex::Regex;

/// First `queries = [...]` span; case-insensitive, non-greedy, and
/// dot-matches-newline so the literal may wrap across lines.
static QUERY_LIST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)queries\s*=\s*\[(.*?)\]").expect("query list pattern is valid")
});

/// A single- or double-quoted token within the bracketed span.
static QUOTED_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)"|'([^']*)'"#).expect("quoted token pattern is valid"));

/// Extract the ordered list of quoted query strings embedded in `text`.
///
/// Duplicates and order are preserved. An absent or unterminated literal
/// yields an empty vec.
pub fn parse_query_list(text: &str) -> Vec<String> {
    let span = match QUERY_LIST_PATTERN.captures(text).and_then(|c| c.get(1)) {
        Some(m) => m.as_str(),
        None => return Vec::new(),
    };

    QUOTED_PATTERN
        .captures_iter(span)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

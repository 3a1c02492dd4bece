//! URL harvesting from arbitrarily shaped data
//!
//! Tool results and model text arrive with no schema guarantee: a payload may
//! be a bare string, an array of fragments, or a nested object of unknown
//! shape. The harvester walks whatever it is given and mines every string it
//! finds for URL-like substrings.
//!
//! # Error Handling
//!
//! Harvesting never fails. A candidate that looks like a URL but does not
//! survive strict parsing is dropped silently; non-string leaves (numbers,
//! booleans, null) contribute nothing.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use url::Url;

/// Matches `http(s)://` followed by a contiguous run of permitted URL
/// characters (letters, digits, typical path/query/fragment punctuation).
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"https?://[\w\-.~:/?#\[\]@!$&'()*+,;=%]+"#).expect("URL pattern is valid")
});

/// Sentence punctuation that is almost certainly prose when trailing, not
/// part of the URL. Only a trailing run is stripped; the same characters
/// mid-path are preserved.
const TRAILING_PUNCTUATION: [char; 5] = [')', ',', '.', ';', ':'];

/// Mine a plain string for URLs.
///
/// Returns distinct URLs in first-match order, each in its normalized
/// absolute form (lowercased host; a bare authority gains a trailing slash).
pub fn harvest_text(text: &str) -> Vec<String> {
    let mut urls = Vec::new();
    let mut seen = HashSet::new();
    harvest_str(text, &mut urls, &mut seen);
    urls
}

/// Mine an arbitrarily nested value for URLs, recursively.
///
/// Strings are scanned, arrays and object values are recursed into (object
/// keys are ignored), and every other leaf contributes nothing. Returns
/// distinct URLs in first-encountered order.
pub fn harvest_value(value: &serde_json::Value) -> Vec<String> {
    let mut urls = Vec::new();
    let mut seen = HashSet::new();
    harvest_inner(value, &mut urls, &mut seen);
    urls
}

fn harvest_inner(value: &serde_json::Value, urls: &mut Vec<String>, seen: &mut HashSet<String>) {
    match value {
        serde_json::Value::String(s) => harvest_str(s, urls, seen),
        serde_json::Value::Array(items) => {
            for item in items {
                harvest_inner(item, urls, seen);
            }
        }
        serde_json::Value::Object(map) => {
            for item in map.values() {
                harvest_inner(item, urls, seen);
            }
        }
        // Numbers, booleans, null: nothing to mine
        _ => {}
    }
}

fn harvest_str(text: &str, urls: &mut Vec<String>, seen: &mut HashSet<String>) {
    for candidate in URL_PATTERN.find_iter(text) {
        let trimmed = candidate.as_str().trim_end_matches(TRAILING_PUNCTUATION);
        match Url::parse(trimmed) {
            Ok(url) => {
                let normalized = url.to_string();
                if seen.insert(normalized.clone()) {
                    urls.push(normalized);
                }
            }
            Err(e) => {
                tracing::debug!(candidate = trimmed, error = %e, "discarding URL candidate");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_harvest_plain_text() {
        let urls = harvest_text("read https://example.com/report and http://other.org/x");
        assert_eq!(
            urls,
            vec!["https://example.com/report", "http://other.org/x"]
        );
    }

    #[test]
    fn test_trailing_punctuation_stripped_internal_kept() {
        // Trailing ")." is prose; the mid-path comma is part of the URL
        let urls = harvest_text("See https://example.com/a,b).");
        assert_eq!(urls, vec!["https://example.com/a,b"]);
    }

    #[test]
    fn test_bare_authority_normalized_with_slash() {
        let urls = harvest_text("home: https://example.com");
        assert_eq!(urls, vec!["https://example.com/"]);
    }

    #[test]
    fn test_invalid_candidate_discarded() {
        // Scheme with nothing parseable after trimming
        let urls = harvest_text("broken https://). end");
        assert!(urls.is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let urls = harvest_text("https://example.com/a then https://example.com/a again");
        assert_eq!(urls, vec!["https://example.com/a"]);
    }

    #[test]
    fn test_harvest_nested_value() {
        let value = json!({
            "results": [
                {"url": "https://a.example/one", "score": 3},
                {"snippet": "see https://b.example/two."},
            ],
            "meta": {"count": 2, "ok": true},
        });
        let urls = harvest_value(&value);
        assert_eq!(urls, vec!["https://a.example/one", "https://b.example/two"]);
    }

    #[test]
    fn test_harvest_value_skips_non_strings() {
        let value = json!([1, 2.5, false, null]);
        assert!(harvest_value(&value).is_empty());
    }

    #[test]
    fn test_deep_nesting_one_valid_one_lookalike() {
        // "https://" alone resembles a URL but fails strict parsing
        let value = json!({
            "a": {"b": [{"c": "valid https://deep.example/path?q=1"}]},
            "noise": "dangling https://",
        });
        let urls = harvest_value(&value);
        assert_eq!(urls, vec!["https://deep.example/path?q=1"]);
    }
}

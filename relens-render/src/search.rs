//! Search-tool result summarization.
//!
//! Builds a richer display for web-search style tool results by running the
//! standalone core primitives over the raw result text: the query-list
//! parser for what was searched, the URL harvester for what came back.

use crate::format::truncate_preview;
use relens_core::{harvest_text, parse_query_list, RenderConfig};
use serde::Serialize;

/// Summary of one search-tool result, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSummary {
    /// Queries the tool reported running, in order
    pub queries: Vec<String>,
    /// Distinct result URLs found in the raw text
    pub urls: Vec<String>,
    /// Collapsed preview of the raw result text
    pub preview: String,
    /// Whether the preview dropped content (drives "show more")
    pub truncated: bool,
    /// Full raw text for the expanded state
    pub full_text: String,
}

impl SearchSummary {
    pub fn query_count(&self) -> usize {
        self.queries.len()
    }

    pub fn source_count(&self) -> usize {
        self.urls.len()
    }

    /// One-line badge text, e.g. "3 queries · 7 sources".
    pub fn badge(&self) -> String {
        format!(
            "{} {} · {} {}",
            self.query_count(),
            if self.query_count() == 1 { "query" } else { "queries" },
            self.source_count(),
            if self.source_count() == 1 { "source" } else { "sources" },
        )
    }
}

/// Summarize a single search-tool result text.
pub fn summarize_search_result(text: &str, config: &RenderConfig) -> SearchSummary {
    let preview = truncate_preview(text, config.preview_chars);
    SearchSummary {
        queries: parse_query_list(text),
        urls: harvest_text(text),
        truncated: preview.len() < text.len(),
        preview: preview.to_string(),
        full_text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_and_badge() {
        let text = r#"queries = ["reef decline", "ocean warming"]
Top hits: https://a.example/one and https://b.example/two."#;
        let summary = summarize_search_result(text, &RenderConfig::default());

        assert_eq!(summary.query_count(), 2);
        assert_eq!(summary.source_count(), 2);
        assert_eq!(summary.badge(), "2 queries · 2 sources");
        assert!(!summary.truncated);
    }

    #[test]
    fn test_long_result_is_truncated_for_preview() {
        let text = format!("queries = ['x']\n{}", "result ".repeat(100));
        let summary = summarize_search_result(&text, &RenderConfig::default());

        assert!(summary.truncated);
        assert_eq!(summary.preview.chars().count(), 280);
        assert_eq!(summary.full_text, text);
        assert_eq!(summary.queries, vec!["x"]);
    }

    #[test]
    fn test_unstructured_result_degrades_gracefully() {
        let summary = summarize_search_result("no list, no links", &RenderConfig::default());
        assert_eq!(summary.query_count(), 0);
        assert_eq!(summary.source_count(), 0);
        assert_eq!(summary.badge(), "0 queries · 0 sources");
    }
}

//! Integration tests for the relens reconstruction engine
//!
//! These tests use fixture files in `tests/fixtures/` to verify the
//! end-to-end derivation flow: a full research conversation in, the activity
//! timeline and source registry out.

use relens_core::{
    parse_query_list, reconstruct, ActivityKind, EngineConfig, Part, Role, Turn,
};
use std::path::PathBuf;

/// Get the path to a fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Load a fixture conversation as a turn log
fn load_fixture(name: &str) -> Vec<Turn> {
    let content = std::fs::read_to_string(fixture_path(name)).expect("fixture should be readable");
    serde_json::from_str(&content).expect("fixture should deserialize")
}

// ============================================
// End-to-end reconstruction
// ============================================

#[test]
fn test_research_session_timeline() {
    let turns = load_fixture("research-session.json");
    let view = reconstruct(&turns, &EngineConfig::default());

    // Window spans the turns between the clarification (index 1) and the
    // final report (index 6); neither marker turn contributes activity.
    let kinds: Vec<ActivityKind> = view.activity.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ActivityKind::User,
            ActivityKind::Reasoning,
            ActivityKind::Tool,
            ActivityKind::Assistant,
            ActivityKind::Source,
        ]
    );

    assert_eq!(view.activity[0].id, "turn-002");
    assert_eq!(
        view.activity[0].title,
        "Focus on Southeast Asia and the US Gulf Coast."
    );

    let tool = &view.activity[2];
    assert_eq!(tool.id, "call-search-01");
    assert_eq!(tool.title, "web_search");
    assert!(tool
        .description
        .as_deref()
        .unwrap()
        .starts_with(r#"{"query""#));

    let citation = &view.activity[4];
    assert_eq!(citation.title, "Jakarta subsidence study");
    assert_eq!(
        citation.url.as_deref(),
        Some("https://journals.example/jakarta-2049")
    );
}

#[test]
fn test_research_session_source_registry() {
    let turns = load_fixture("research-session.json");
    let view = reconstruct(&turns, &EngineConfig::default());

    let urls: Vec<&str> = view.sources.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            // Harvested from reasoning, trailing ")" stripped
            "https://noaa.example/slr-viewer",
            // Harvested from the nested tool result
            "https://journals.example/jakarta-2049",
            "https://journals.example/gulf-review",
            // Titled citation is distinct from its bare harvested URL
            "https://journals.example/jakarta-2049",
            // Explicitly identified citation on the report turn
            "https://noaa.example/slr-viewer",
        ]
    );

    assert_eq!(view.sources[3].title.as_deref(), Some("Jakarta subsidence study"));
    assert_eq!(view.sources[4].id, "cite-noaa");
    assert_eq!(view.source_count(), 5);
}

#[test]
fn test_reconstruction_is_idempotent_over_fixture() {
    let turns = load_fixture("research-session.json");
    let first = reconstruct(&turns, &EngineConfig::default());
    let second = reconstruct(&turns, &EngineConfig::default());
    assert_eq!(first, second);
}

#[test]
fn test_appending_turns_extends_views_in_place() {
    let mut turns = load_fixture("research-session.json");
    let before = reconstruct(&turns, &EngineConfig::default());

    turns.push(Turn::new(
        "turn-007",
        Role::Assistant,
        vec![Part::text(
            "Follow-up reading: https://journals.example/mekong-delta",
        )],
    ));
    let after = reconstruct(&turns, &EngineConfig::default());

    assert_eq!(&after.activity[..before.activity.len()], &before.activity[..]);
    assert_eq!(&after.sources[..before.sources.len()], &before.sources[..]);
    assert_eq!(
        after.sources.last().unwrap().url,
        "https://journals.example/mekong-delta"
    );
}

// ============================================
// Standalone primitives over a single tool result
// ============================================

#[test]
fn test_query_list_extracted_from_fixture_tool_result() {
    let turns = load_fixture("research-session.json");

    let result_text = turns
        .iter()
        .flat_map(|t| t.parts.iter())
        .find_map(|part| match part {
            Part::ToolResult { text: Some(text), .. } => Some(text.clone()),
            _ => None,
        })
        .expect("fixture contains a textual tool result");

    assert_eq!(
        parse_query_list(&result_text),
        vec![
            "sea level rise Southeast Asia projections 2050",
            "Gulf Coast subsidence rates",
        ]
    );
}

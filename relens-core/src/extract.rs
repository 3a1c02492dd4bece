//! Conversation reconstruction
//!
//! A single forward pass over the turn log produces the two derived views:
//! the phase-filtered activity timeline and the source registry. The pass is
//! pure and total over its input snapshot; the runtime re-invokes it on every
//! update cycle and swaps the whole [`ConversationView`] atomically.
//!
//! Two scoping rules interact here and are easy to conflate:
//!
//! - **Activity** is filtered by the phase window: only turns strictly
//!   between the markers contribute timeline rows.
//! - **Source harvesting** ignores the window entirely and scans the full
//!   log, so citations gathered during clarification or report writing are
//!   never lost.
//!
//! Malformed or unrecognized parts are skipped for whichever derivation step
//! they break; they never abort sibling parts or later turns.

use crate::config::EngineConfig;
use crate::harvest::{harvest_text, harvest_value};
use crate::phase::detect_phase;
use crate::types::{
    ActivityItem, ActivityKind, ConversationView, Part, Role, SourceRecord, Turn, part_identity,
};
use std::collections::HashSet;

/// Placeholder shown for reasoning parts whose text is empty.
const REASONING_PLACEHOLDER: &str = "Thinking...";

/// Insertion-ordered source registry keyed by citation identity.
///
/// First write wins: merging an already-seen key neither reorders nor
/// duplicates the existing record, which is what makes reconstruction
/// idempotent and append-stable.
#[derive(Default)]
struct SourceRegistry {
    records: Vec<SourceRecord>,
    seen: HashSet<String>,
}

impl SourceRegistry {
    fn merge(&mut self, key: String, record: SourceRecord) {
        if !self.seen.insert(key) {
            return;
        }
        self.records.push(record);
    }

    /// Merge harvested URLs; a bare URL is both key and identity.
    fn merge_urls(&mut self, urls: Vec<String>) {
        for url in urls {
            self.merge(
                url.clone(),
                SourceRecord {
                    id: url.clone(),
                    url,
                    title: None,
                },
            );
        }
    }

    fn into_records(self) -> Vec<SourceRecord> {
        self.records
    }
}

/// Registry key for an explicit `Source` part: the explicit `id` when one
/// exists, else `url::title` so the same URL under two titles stays two
/// records while exact (url, title) pairs collapse.
fn source_key(id: Option<&str>, url: &str, title: Option<&str>) -> String {
    match id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => match title {
            Some(title) => format!("{}::{}", url, title),
            None => url.to_string(),
        },
    }
}

/// First `max_chars` characters of `input`, on a char boundary.
fn truncate_chars(input: &str, max_chars: usize) -> &str {
    if input.chars().count() <= max_chars {
        return input;
    }
    input
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| &input[..idx])
        .unwrap_or(input)
}

/// Reconstruct the derived views from a snapshot of the turn log.
///
/// Deterministic and idempotent: an identical log yields identical output,
/// and appending turns only appends to both views — existing activity rows
/// and registry entries keep their positions.
pub fn reconstruct(turns: &[Turn], config: &EngineConfig) -> ConversationView {
    let window = detect_phase(turns, config);

    let mut activity: Vec<ActivityItem> = Vec::new();
    let mut registry = SourceRegistry::default();

    for (turn_index, turn) in turns.iter().enumerate() {
        let in_window = window.contains(turn_index);

        match turn.role {
            Role::User => {
                let joined = turn
                    .parts
                    .iter()
                    .filter_map(|part| match part {
                        Part::Text { text } => Some(text.as_str()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim()
                    .to_string();

                if !joined.is_empty() && in_window {
                    activity.push(ActivityItem {
                        id: turn.id.clone(),
                        kind: ActivityKind::User,
                        title: joined,
                        description: None,
                        url: None,
                    });
                }
            }
            Role::Assistant => {
                for (part_index, part) in turn.parts.iter().enumerate() {
                    match part {
                        Part::ToolCall {
                            tool_name,
                            args_text,
                            ..
                        } => {
                            if in_window {
                                activity.push(ActivityItem {
                                    id: part_identity(turn, part_index),
                                    kind: ActivityKind::Tool,
                                    title: tool_name.clone(),
                                    description: Some(
                                        truncate_chars(args_text, config.args_preview_chars)
                                            .to_string(),
                                    ),
                                    url: None,
                                });
                            }
                        }
                        Part::Reasoning { text } => {
                            let trimmed = text.trim();
                            let shown = if trimmed.is_empty() {
                                REASONING_PLACEHOLDER
                            } else {
                                trimmed
                            };
                            if in_window {
                                activity.push(ActivityItem {
                                    id: part_identity(turn, part_index),
                                    kind: ActivityKind::Reasoning,
                                    title: "Thinking".to_string(),
                                    description: Some(shown.to_string()),
                                    url: None,
                                });
                            }
                            registry.merge_urls(harvest_text(text));
                        }
                        Part::Text { text } => {
                            let trimmed = text.trim();
                            if !trimmed.is_empty() && in_window {
                                activity.push(ActivityItem {
                                    id: part_identity(turn, part_index),
                                    kind: ActivityKind::Assistant,
                                    title: trimmed.to_string(),
                                    description: None,
                                    url: None,
                                });
                            }
                            registry.merge_urls(harvest_text(text));
                        }
                        Part::Source { id, url, title } => {
                            if url.is_empty() && id.is_none() {
                                // Nothing to key a citation on
                                continue;
                            }
                            let key = source_key(id.as_deref(), url, title.as_deref());
                            registry.merge(
                                key.clone(),
                                SourceRecord {
                                    id: key,
                                    url: url.clone(),
                                    title: title.clone(),
                                },
                            );
                            if in_window {
                                activity.push(ActivityItem {
                                    id: part_identity(turn, part_index),
                                    kind: ActivityKind::Source,
                                    title: title.clone().unwrap_or_else(|| url.clone()),
                                    description: None,
                                    url: Some(url.clone()),
                                });
                            }
                        }
                        Part::ToolResult {
                            text,
                            result,
                            content,
                        } => {
                            if let Some(text) = text {
                                registry.merge_urls(harvest_text(text));
                            }
                            if let Some(result) = result {
                                registry.merge_urls(harvest_value(result));
                            }
                            if let Some(content) = content {
                                registry.merge_urls(harvest_value(content));
                            }
                        }
                        Part::Unknown => {
                            tracing::debug!(turn = %turn.id, part = part_index, "skipping unrecognized part");
                        }
                    }
                }
            }
        }
    }

    ConversationView {
        activity,
        sources: registry.into_records(),
    }
}

//! Core domain types for relens
//!
//! These types model the conversation log produced by a research agent and
//! the derived views reconstructed from it.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Turn** | One message in the conversation, authored by user or assistant |
//! | **Part** | One typed content fragment within a turn |
//! | **ActivityItem** | One row of the derived activity timeline |
//! | **SourceRecord** | One deduplicated citation in the source registry |
//! | **ConversationView** | The pair of derived views, rebuilt on every snapshot |
//!
//! The log is owned by the external agent runtime; relens only ever reads a
//! snapshot of it. Turns are append-only and immutable once appended, so the
//! whole `ConversationView` is recomputed from scratch each cycle rather than
//! patched incrementally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Turns
// ============================================

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            _ => Err(format!("unknown role: {}", s)),
        }
    }
}

/// One conversation exchange.
///
/// Turns arrive from the runtime in chronological order; the index of a turn
/// within the log is its position in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Opaque identifier, unique within the log
    pub id: String,
    /// Author of the turn
    pub role: Role,
    /// Ordered content fragments
    #[serde(default)]
    pub parts: Vec<Part>,
    /// When the turn was emitted, if the runtime reported it.
    /// Passed through untouched; reconstruction never reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Turn {
    pub fn new(id: impl Into<String>, role: Role, parts: Vec<Part>) -> Self {
        Self {
            id: id.into(),
            role,
            parts,
            created_at: None,
        }
    }
}

// ============================================
// Parts
// ============================================

/// One typed content fragment within a turn.
///
/// Uses `#[serde(default)]` and optional fields liberally: beyond the tag,
/// the runtime makes no promise that any field exists or is well-formed.
/// Unrecognized tags deserialize to [`Part::Unknown`] rather than failing
/// the whole turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Part {
    /// Plain user or assistant content
    Text {
        #[serde(default)]
        text: String,
    },
    /// Assistant internal deliberation
    Reasoning {
        #[serde(default)]
        text: String,
    },
    /// A structured tool invocation
    ToolCall {
        #[serde(default)]
        tool_call_id: String,
        #[serde(default)]
        tool_name: String,
        /// Serialized but possibly unparsable argument payload
        #[serde(default)]
        args_text: String,
    },
    /// A tool result; any subset of the three fields may be present
    ToolResult {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        result: Option<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<serde_json::Value>,
    },
    /// An explicit citation
    Source {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default)]
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    /// Catch-all for part tags this version does not recognize
    #[serde(other)]
    Unknown,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn reasoning(text: impl Into<String>) -> Self {
        Part::Reasoning { text: text.into() }
    }
}

/// Derived identity for a part: the explicit identifier when one exists,
/// otherwise `turnId:positionIndex`.
pub fn part_identity(turn: &Turn, index: usize) -> String {
    match turn.parts.get(index) {
        Some(Part::ToolCall { tool_call_id, .. }) if !tool_call_id.is_empty() => {
            tool_call_id.clone()
        }
        Some(Part::Source { id: Some(id), .. }) if !id.is_empty() => id.clone(),
        _ => format!("{}:{}", turn.id, index),
    }
}

// ============================================
// Derived views
// ============================================

/// Kind of derived activity item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    User,
    Assistant,
    Tool,
    Reasoning,
    Source,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::User => "user",
            ActivityKind::Assistant => "assistant",
            ActivityKind::Tool => "tool",
            ActivityKind::Reasoning => "reasoning",
            ActivityKind::Source => "source",
        }
    }
}

/// One row of the derived activity timeline.
///
/// Produced fresh on every recomputation; never mutated or deleted
/// individually. The whole set is replaced atomically when the log changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One deduplicated citation harvested from the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// The pair of derived views: activity timeline plus source registry.
///
/// `activity` is chronological and phase-window filtered; `sources` covers
/// the full log in first-seen order regardless of the window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationView {
    pub activity: Vec<ActivityItem>,
    pub sources: Vec<SourceRecord>,
}

impl ConversationView {
    /// Count of distinct sources, usable as a badge.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

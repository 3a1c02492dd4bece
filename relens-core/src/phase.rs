//! Research-phase window detection
//!
//! A research conversation has a recognizable shape: the assistant first
//! clarifies the request, then works through the research loop, then writes
//! the final report. The detector finds that middle segment by scanning
//! assistant turns for two marker phrases and resolving the pair of hits
//! into an exclusive index window.
//!
//! Detection is a heuristic, single-pass, linear-time scan. It is recomputed
//! from scratch on every snapshot; inconsistent or missing markers resolve
//! deterministically rather than erroring.

use crate::config::EngineConfig;
use crate::types::{Part, Role, Turn};

/// The turn-index window considered "active research".
///
/// Both bounds are exclusive: a turn at index `i` is in-window when
/// `i > start` (vacuously true when `start` is `None`) and `i < end`.
/// Marker turns themselves are never in-window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseWindow {
    /// Index of the opening marker turn, if one was found
    pub start: Option<usize>,
    /// Exclusive upper bound: the closing marker turn index, or the log length
    pub end: usize,
}

impl PhaseWindow {
    /// Whether the turn at `index` falls inside the window.
    ///
    /// Depends only on the index and the resolved bounds, never on content.
    pub fn contains(&self, index: usize) -> bool {
        self.start.map_or(true, |s| index > s) && index < self.end
    }
}

/// Concatenated `Text` and `Reasoning` content of one turn, space-joined and
/// trimmed, used for marker matching.
fn turn_digest(turn: &Turn) -> String {
    let mut digest = String::new();
    for part in &turn.parts {
        let text = match part {
            Part::Text { text } | Part::Reasoning { text } => text,
            _ => continue,
        };
        if !digest.is_empty() {
            digest.push(' ');
        }
        digest.push_str(text);
    }
    digest.trim().to_string()
}

/// Detect the research-activity window over the turn sequence.
///
/// Only assistant turns are examined. `start` is the first assistant turn
/// whose digest contains the start marker (case-insensitive substring);
/// `end` the first containing the end marker. Resolution precedence:
///
/// 1. both found and start < end: the open interval between them;
/// 2. start found but end missing or not after it: from start to log end;
/// 3. only end found: everything before end;
/// 4. neither: the whole log.
pub fn detect_phase(turns: &[Turn], config: &EngineConfig) -> PhaseWindow {
    let start_marker = config.start_marker.to_lowercase();
    let end_marker = config.end_marker.to_lowercase();

    let mut start: Option<usize> = None;
    let mut end: Option<usize> = None;

    for (index, turn) in turns.iter().enumerate() {
        if turn.role != Role::Assistant {
            continue;
        }
        if start.is_some() && end.is_some() {
            break;
        }

        let digest = turn_digest(turn).to_lowercase();
        if start.is_none() && digest.contains(&start_marker) {
            start = Some(index);
        }
        if end.is_none() && digest.contains(&end_marker) {
            end = Some(index);
        }
    }

    let window = match (start, end) {
        (Some(s), Some(e)) if s < e => PhaseWindow {
            start: Some(s),
            end: e,
        },
        // End missing, or found at/before start: extend to the log end
        (Some(s), _) => PhaseWindow {
            start: Some(s),
            end: turns.len(),
        },
        (None, Some(e)) => PhaseWindow {
            start: None,
            end: e,
        },
        (None, None) => PhaseWindow {
            start: None,
            end: turns.len(),
        },
    };

    tracing::debug!(
        start = ?window.start,
        end = window.end,
        turns = turns.len(),
        "phase window resolved"
    );

    window
}

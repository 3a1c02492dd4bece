//! Per-kind activity rendering.

use crate::format::truncate_preview;
use relens_core::{ActivityItem, ActivityKind, RenderConfig};
use serde::Serialize;

/// Display fields for one activity row.
///
/// Deliberately UI-agnostic: a terminal, web, or native frontend decides how
/// label/title/body map onto its widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityDisplay {
    /// Short bracketed role/kind label, e.g. "[tool]"
    pub label: &'static str,
    pub title: String,
    /// Collapsed preview of the description, if any
    pub body: Option<String>,
    pub url: Option<String>,
}

/// Label for an activity kind.
pub fn kind_label(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::User => "[user]",
        ActivityKind::Assistant => "[assistant]",
        ActivityKind::Tool => "[tool]",
        ActivityKind::Reasoning => "[thinking]",
        ActivityKind::Source => "[source]",
    }
}

/// Format one activity item into display fields.
pub fn render_activity(item: &ActivityItem, config: &RenderConfig) -> ActivityDisplay {
    ActivityDisplay {
        label: kind_label(item.kind),
        title: truncate_preview(&item.title, config.preview_chars).to_string(),
        body: item
            .description
            .as_deref()
            .map(|d| truncate_preview(d, config.preview_chars).to_string()),
        url: item.url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_per_kind() {
        assert_eq!(kind_label(ActivityKind::Reasoning), "[thinking]");
        assert_eq!(kind_label(ActivityKind::Source), "[source]");
    }

    #[test]
    fn test_render_truncates_long_title() {
        let item = ActivityItem {
            id: "t0".to_string(),
            kind: ActivityKind::Assistant,
            title: "a".repeat(1000),
            description: None,
            url: None,
        };
        let display = render_activity(&item, &RenderConfig::default());
        assert_eq!(display.label, "[assistant]");
        assert_eq!(display.title.len(), 280);
        assert!(display.body.is_none());
    }
}

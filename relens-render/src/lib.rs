//! # relens-render
//!
//! Thin presentation adapters over [`relens_core`]: per-kind activity
//! rendering, search-result summaries, and shared formatting helpers.
//!
//! Everything here maps one derived item (or one raw tool payload) onto
//! UI-agnostic display fields. Layout, theming, and interaction live in the
//! frontend consuming these structs.

pub use display::{kind_label, render_activity, ActivityDisplay};
pub use format::{format_relative_time, format_relative_time_opt, truncate_preview};
pub use search::{summarize_search_result, SearchSummary};

pub mod display;
pub mod format;
pub mod search;

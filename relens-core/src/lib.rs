//! # relens-core
//!
//! Core library for relens - a read-only lens over a live research-agent
//! conversation.
//!
//! This library provides:
//! - Domain types for turns, parts, and the derived views
//! - The reconstruction engine: phase detection, URL harvesting,
//!   query-list parsing, and activity extraction
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! The engine is a pure transform over an immutable snapshot of the turn
//! log:
//!
//! ```text
//! turns ──▶ detect_phase ──▶ window
//!   │                          │
//!   └──▶ reconstruct ◀─────────┘
//!          │    (harvest_* / parse_query_list as needed)
//!          ▼
//!   ConversationView { activity, sources }
//! ```
//!
//! Nothing here performs I/O or caching; the runtime that owns the log
//! decides when to recompute and simply swaps in the fresh view.
//!
//! ## Example
//!
//! ```rust
//! use relens_core::{reconstruct, EngineConfig, Part, Role, Turn};
//!
//! let turns = vec![
//!     Turn::new("u0", Role::User, vec![Part::text("What changed in 2024?")]),
//!     Turn::new("a1", Role::Assistant, vec![Part::text("Working on it.")]),
//! ];
//! let view = reconstruct(&turns, &EngineConfig::default());
//! assert_eq!(view.activity.len(), 2);
//! ```

// Re-export commonly used items at the crate root
pub use config::{Config, EngineConfig, RenderConfig};
pub use error::{Error, Result};
pub use extract::reconstruct;
pub use harvest::{harvest_text, harvest_value};
pub use phase::{detect_phase, PhaseWindow};
pub use queries::parse_query_list;
pub use types::*;

// Public modules
pub mod config;
pub mod error;
pub mod extract;
pub mod harvest;
pub mod logging;
pub mod phase;
pub mod queries;
pub mod types;

//! Error types for relens-core

use thiserror::Error;

/// Main error type for the relens-core library.
///
/// Reconstruction itself is total: malformed conversation content is skipped,
/// never surfaced as an error. Only the ambient layers (config, logging) can
/// fail, and they fail fast so integration bugs are distinguishable from the
/// normal "nothing to show yet" state.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for relens-core
pub type Result<T> = std::result::Result<T, Error>;

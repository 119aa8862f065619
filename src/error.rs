//! Error types for matinee operations.

use thiserror::Error;

/// Everything that can go wrong talking to the backend or an aggregator.
///
/// Transport and decode variants convert automatically via `#[from]`. The
/// details path swallows these into fallback shaping at its call site; every
/// other path propagates them.
#[derive(Debug, Error)]
pub enum MatineeError {
    /// The request never produced a usable response (connect failure,
    /// timeout, mid-body disconnect).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not the JSON shape we expected.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Required configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MatineeError>;

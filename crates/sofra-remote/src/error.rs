//! Remote adapter error types.
//!
//! These errors stay internal to the crate: every public adapter method
//! collapses failures to a sentinel (`None`, empty list, or the seed
//! catalog) so callers never branch on transport details.

use thiserror::Error;

/// Errors that can occur talking to remote services.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport-level error from reqwest.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status or an error payload from the backend.
    #[error("API error: {0}")]
    Api(String),

    /// Response arrived but did not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for remote operations.
pub type Result<T> = std::result::Result<T, RemoteError>;

//! Error types for the niconico search client
//!
//! Every failure of a search call surfaces as one [`FinderError`]; nothing is
//! retried or swallowed on the way up.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all search operations
///
/// Implements Display for human-readable messages and Serialize so that host
/// applications can forward it across JSON boundaries.
#[derive(Error, Debug)]
pub enum FinderError {
    /// The GET could not complete (DNS, connect, timeout or non-2xx status)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("Failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client configuration could not be turned into an HTTP client
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Serialize for FinderError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, FinderError>;

//! Error types for the TVRage client
//!
//! Only structural failures are errors: the feed could not be fetched, or
//! the returned document could not be parsed. Missing or malformed fields
//! inside a well-formed document are resolved to defaults by the parser and
//! show up as a failed `is_valid()` check on the resulting record.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for TVRage operations
#[derive(Error, Debug)]
pub enum TvRageError {
    /// Network failure inside the HTTP transport
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The feed answered with a 5xx status
    #[error("Server error {status} for {url}")]
    ServerError { url: String, status: u16 },

    /// The feed answered with a 3xx or 4xx status
    #[error("Not found ({status}): {url}")]
    NotFound { url: String, status: u16 },

    /// The response body is not well-formed XML
    #[error("Failed to parse XML from {url}: {message}")]
    ParseError { url: String, message: String },

    /// No usable API key was supplied
    #[error("No API key provided")]
    InvalidApiKey,

    /// The transport could not be configured
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl TvRageError {
    /// URL of the request that failed, when the error carries one
    pub fn url(&self) -> Option<&str> {
        match self {
            TvRageError::ServerError { url, .. }
            | TvRageError::NotFound { url, .. }
            | TvRageError::ParseError { url, .. } => Some(url),
            TvRageError::HttpError(e) => e.url().map(|u| u.as_str()),
            TvRageError::InvalidApiKey | TvRageError::InvalidConfig(_) => None,
        }
    }

    /// True for failures reported by the transport (status or network)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            TvRageError::HttpError(_)
                | TvRageError::ServerError { .. }
                | TvRageError::NotFound { .. }
        )
    }
}

/// Serialize TvRageError as its display string
impl Serialize for TvRageError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for TVRage operations
pub type Result<T> = std::result::Result<T, TvRageError>;

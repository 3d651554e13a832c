//! Error types for PubChem lookups and configuration.
//!
//! Lookup errors never abort a batch. The resolver and the extractor log them
//! and downgrade to "not found" or "no flash points"; they exist so the
//! transport can say why a lookup came back empty.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by [`PubChemClient`](crate::client::PubChemClient).
#[derive(Debug, Error)]
pub enum LookupError {
    /// Transport failure (connect error, timeout, body read error)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with something other than 200 OK
    #[error("HTTP status: {0}")]
    HttpStatus(StatusCode),

    /// Body is not the expected JSON document
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request URL could not be built from the base URL
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl LookupError {
    /// Whether the request was abandoned because a timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Whether the server returned 404, PubChem's answer for unknown names.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpStatus(StatusCode::NOT_FOUND))
    }
}

/// Configuration errors, reported before any input is read.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Base URL does not parse or is not http(s)
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// A timeout of zero seconds
    #[error("Invalid {name}: must be greater than zero")]
    InvalidTimeout {
        /// Name of the offending setting
        name: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, LookupError>;

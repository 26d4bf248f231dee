//! Error types for upstream API calls.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when fetching the catalog from the upstream API.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The upstream answered with a non-success status code.
    #[error("Recommendation API failed with status {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    /// The request never produced a usable response (connect failure,
    /// timeout, body read error).
    #[error("HTTP error calling {endpoint}: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, UpstreamError>;

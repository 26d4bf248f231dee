//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while decoding upstream catalog payloads.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The payload was not valid JSON for the expected collection.
    ///
    /// `payload` names the collection ("products" or "recipes") so the
    /// caller can tell which upstream endpoint misbehaved.
    #[error("Failed to parse {payload} payload: {source}")]
    MalformedPayload {
        payload: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;

//! Error types for model loading and persistence.

use thiserror::Error;

/// Errors that can occur when persisting or loading model weights.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Weights file could not be read or written.
    #[error("Failed to access weights at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The weights blob could not be encoded or decoded.
    #[error("Invalid weights blob: {0}")]
    InvalidBlob(#[from] bincode::Error),

    /// Stored layer sizes don't match what the caller asked for.
    ///
    /// Raised at load time so a stale weights file fails before the
    /// forward pass instead of producing garbage scores.
    #[error(
        "Weight shape mismatch: stored {stored_input}x{stored_output}, \
         requested {requested_input}x{requested_output}"
    )]
    ShapeMismatch {
        stored_input: usize,
        stored_output: usize,
        requested_input: usize,
        requested_output: usize,
    },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, ModelError>;

//! Error types for gridkit-io.

use thiserror::Error;

/// Result type for configuration import.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Reasons a configuration document is rejected.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input is not valid JSON.
    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The document root is not a JSON object.
    #[error("configuration must be a JSON object")]
    NotAnObject,

    /// A required top-level key is absent.
    #[error("missing required key: {0}")]
    MissingKey(&'static str),

    /// `items` is not an array of objects.
    #[error("items must be an array of objects")]
    InvalidItems,
}

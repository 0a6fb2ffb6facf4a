//! Error types for gridkit-editor.

use gridkit_core::TrackParseError;
use gridkit_io::ImportError;
use thiserror::Error;

/// Result type for editor operations that can be rejected.
pub type Result<T> = std::result::Result<T, EditorError>;

#[derive(Debug, Error)]
pub enum EditorError {
    /// The configuration could not be imported; the state is unchanged.
    #[error("import failed: {0}")]
    Import(#[from] ImportError),

    /// The state could not be serialized.
    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),

    /// A track list typed by the user did not parse; the state is unchanged.
    #[error("invalid track list: {0}")]
    Tracks(#[from] TrackParseError),

    #[error("unknown template: {0}")]
    UnknownTemplate(String),
}

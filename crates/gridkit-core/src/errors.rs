//! Error types for gridkit core values.
//!
//! Geometry and tree operations are total and never fail; the only errors in
//! the core come from parsing textual names and track lists.

use thiserror::Error;

/// An unknown name was given for a closed set of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value:?}")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseNameError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Errors while parsing a whitespace separated track list such as `1fr 200px auto`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackParseError {
    #[error("Track list is empty")]
    Empty,

    #[error("Invalid track at position {position}: {found:?}")]
    InvalidTrack { position: usize, found: String },

    #[error("Track value must be positive, found {value} at position {position}")]
    NonPositive { position: usize, value: f64 },
}

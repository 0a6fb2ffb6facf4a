//! Configuration import and export.
//!
//! The exchanged document is a JSON object with two keys:
//!
//! ```json
//! { "items": [ ... ], "gridSettings": { "xs": { ... }, ... } }
//! ```
//!
//! Import is tolerant below the top level: missing ids and colors are
//! regenerated, and layouts and settings are sanitized field by field. The
//! top-level shape is strict; if either key is missing the import fails.

pub mod error;
mod export;
mod import;

pub use error::{ImportError, Result};
pub use export::export_config;
pub use import::{import_config, ImportedConfig};

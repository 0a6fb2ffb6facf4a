//! Core types and layout algebra for the gridkit grid builder.
//!
//! This crate provides the foundational types used across all other gridkit crates:
//! - Breakpoints and the total per-breakpoint map
//! - Tracks, grid settings and item layouts
//! - The recursive item tree node
//! - Pure layout algebra (construction, sanitizing, effective spans)
//! - Error types

pub mod breakpoint;
pub mod errors;
pub mod layout;
pub mod tracks;
pub mod types;

pub use breakpoint::*;
pub use errors::*;
pub use layout::*;
pub use tracks::parse_track_list;
pub use types::*;

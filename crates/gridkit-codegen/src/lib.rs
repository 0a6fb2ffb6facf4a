//! Markup generation from gridkit layouts.
//!
//! Produces nested `div` markup whose classes are breakpoint-prefixed grid
//! utilities. The output is a one-way projection of the layout; nothing
//! parses it back.
//!
//! # Example
//!
//! ```
//! use gridkit_codegen::{generate_code, CodegenOptions};
//! use gridkit_core::GridSettingsMap;
//!
//! let code = generate_code(&[], &GridSettingsMap::default(), &CodegenOptions::default());
//! assert_eq!(code, r#"<div class="grid w-full grid-cols-4 grid-rows-4 gap-4"></div>"#);
//! ```

mod classes;
mod generator;
mod options;

pub use classes::{container_classes, item_classes, track_token};
pub use generator::{generate_code, MarkupGenerator};
pub use options::{CodegenOptions, Flavor};

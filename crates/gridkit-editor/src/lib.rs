//! Editing session for gridkit layouts.
//!
//! [`Editor`] owns the undoable [`EditorState`] (item tree plus root grid
//! settings), the active breakpoint, and one drag session per grid level.
//! Every successful mutation pushes exactly one history snapshot; lookup
//! misses and no-op edits push nothing. Applying a template and importing a
//! configuration replace the state and collapse history.
//!
//! # Example
//!
//! ```
//! use gridkit_core::LayoutField;
//! use gridkit_editor::Editor;
//!
//! let mut editor = Editor::default();
//! let id = editor.add_item(None).unwrap();
//! assert!(editor.update_layout_field(id, LayoutField::ColSpan, "2"));
//! assert!(editor.generate_code().contains("col-span-2"));
//!
//! assert!(editor.undo());
//! assert!(!editor.generate_code().contains("col-span-2"));
//! ```

mod config;
mod editor;
mod error;
mod state;
mod templates;

pub use config::EditorConfig;
pub use editor::Editor;
pub use error::{EditorError, Result};
pub use state::EditorState;
pub use templates::{Template, TemplateRegistry};

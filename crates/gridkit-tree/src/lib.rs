//! Tree mutation engine for gridkit.
//!
//! Every operation takes the current item tree by reference and returns a new
//! tree; the input is never modified. Operations that must first locate an
//! item return `None` when the item is not in the tree, in which case the
//! caller keeps its current tree.
//!
//! Structural edits end with a [`reflow`] of the sibling list they touched,
//! at one breakpoint. Nested lists are never reflowed implicitly.
//!
//! # Example
//!
//! ```
//! use gridkit_core::{Breakpoint, LayoutField};
//! use gridkit_tree::{add_item, update_item_layout_field};
//!
//! let (items, id) = add_item(&[], None, Breakpoint::Xs).unwrap();
//! let items = update_item_layout_field(&items, id, Breakpoint::Xs, LayoutField::ColSpan, "2").unwrap();
//! assert_eq!(items[0].layout.xs.col_span, 2);
//! ```

#[cfg(test)]
mod fixtures;
mod lookup;
mod ops;
mod reflow;
mod settings;

pub use lookup::{contains_item, find_item, find_parent, item_count, next_item_id, siblings_of};
pub use ops::{
    add_item, apply_layout_patch, convert_to_grid, duplicate_item, remove_item,
    update_item_layout_field,
};
pub use reflow::{reflow, reflow_orders};
pub use settings::{copy_from_neighbor, update_grid_setting, update_item_grid_setting, SettingUpdate};

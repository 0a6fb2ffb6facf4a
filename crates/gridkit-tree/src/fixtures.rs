//! Shared trees for unit tests.

use gridkit_core::{Breakpoint, GridItem, GridSettingsMap, ItemId, LayoutField, SubGrid};

/// `1`, and container `2` holding container `3` (holding `4`) and leaf `5`.
pub(crate) fn sample_tree() -> Vec<GridItem> {
    let inner = container(3, "amber", vec![GridItem::leaf(ItemId(4), "rose")]);
    let outer = container(2, "emerald", vec![inner, GridItem::leaf(ItemId(5), "teal")]);
    vec![GridItem::leaf(ItemId(1), "sky"), outer]
}

pub(crate) fn container(id: u64, color: &str, children: Vec<GridItem>) -> GridItem {
    GridItem::leaf(ItemId(id), color).with_grid(SubGrid {
        settings: GridSettingsMap::subgrid_default(),
        children,
    })
}

/// A leaf placed at `(row, col)` on `bp`.
pub(crate) fn placed(id: u64, bp: Breakpoint, row: &str, col: &str) -> GridItem {
    let mut item = GridItem::leaf(ItemId(id), "sky");
    item.layout[bp].set_field(LayoutField::RowStart, row);
    item.layout[bp].set_field(LayoutField::ColStart, col);
    item
}

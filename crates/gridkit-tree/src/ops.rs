//! Structural edits of the item tree.

use gridkit_core::{
    palette_color, Breakpoint, GridItem, GridSettingsMap, ItemId, LayoutField, LayoutPatch, SubGrid,
};

use crate::lookup::{list_at_mut, next_item_id, path_to};
use crate::reflow::reflow;

/// Append a new leaf to the root list or to the children of `parent`.
///
/// Returns the new tree and the new item's id. `None` when `parent` is not a
/// container in the tree or the id space is exhausted.
pub fn add_item(items: &[GridItem], parent: Option<ItemId>, bp: Breakpoint) -> Option<(Vec<GridItem>, ItemId)> {
    let id = next_item_id(items)?;
    let item = GridItem::leaf(id, palette_color(id.0.saturating_sub(1) as usize));

    let mut tree = items.to_vec();
    let list = match parent {
        None => &mut tree,
        Some(parent) => {
            let path = path_to(items, parent)?;
            list_at_mut(&mut tree, &path)?
        }
    };
    list.push(item);
    reflow(list, bp);
    Some((tree, id))
}

/// Remove an item and its whole subtree. Siblings keep their orders.
pub fn remove_item(items: &[GridItem], id: ItemId) -> Option<Vec<GridItem>> {
    let path = path_to(items, id)?;
    let (&index, parents) = path.split_last()?;
    let mut tree = items.to_vec();
    list_at_mut(&mut tree, parents)?.remove(index);
    Some(tree)
}

/// Copy an item to the end of its sibling list.
///
/// The copy gets a fresh id, an independent layout, and a deep copy of any
/// sub-grid whose descendants also receive fresh ids.
pub fn duplicate_item(items: &[GridItem], id: ItemId, bp: Breakpoint) -> Option<(Vec<GridItem>, ItemId)> {
    let path = path_to(items, id)?;
    let (&index, parents) = path.split_last()?;
    let mut next = next_item_id(items)?.0;

    let mut tree = items.to_vec();
    let list = list_at_mut(&mut tree, parents)?;
    let copy = renumber(list.get(index)?.clone(), &mut next)?;
    let copy_id = copy.id;
    list.push(copy);
    reflow(list, bp);
    Some((tree, copy_id))
}

fn renumber(mut item: GridItem, next: &mut u64) -> Option<GridItem> {
    if *next > ItemId::MAX {
        return None;
    }
    item.id = ItemId(*next);
    *next += 1;
    if let Some(grid) = item.grid.as_mut() {
        let children = std::mem::take(&mut grid.children);
        grid.children = children
            .into_iter()
            .map(|child| renumber(child, next))
            .collect::<Option<_>>()?;
    }
    Some(item)
}

/// Write one raw field value at `bp`, then reflow the owning list.
pub fn update_item_layout_field(
    items: &[GridItem],
    id: ItemId,
    bp: Breakpoint,
    field: LayoutField,
    raw: &str,
) -> Option<Vec<GridItem>> {
    apply_layout_patch(items, id, bp, &LayoutPatch::new().set(field, raw))
}

/// Write several raw field values at `bp` with a single reflow.
pub fn apply_layout_patch(items: &[GridItem], id: ItemId, bp: Breakpoint, patch: &LayoutPatch) -> Option<Vec<GridItem>> {
    let path = path_to(items, id)?;
    let (&index, parents) = path.split_last()?;
    let mut tree = items.to_vec();
    let list = list_at_mut(&mut tree, parents)?;
    patch.apply(&mut list.get_mut(index)?.layout[bp]);
    reflow(list, bp);
    Some(tree)
}

/// Turn a leaf into a container with default sub-grid settings and no children.
///
/// `None` when the item is missing or already a container.
pub fn convert_to_grid(items: &[GridItem], id: ItemId) -> Option<Vec<GridItem>> {
    let path = path_to(items, id)?;
    let (&index, parents) = path.split_last()?;
    let mut tree = items.to_vec();
    let item = list_at_mut(&mut tree, parents)?.get_mut(index)?;
    if item.is_container() {
        return None;
    }
    item.grid = Some(SubGrid::new(GridSettingsMap::subgrid_default()));
    Some(tree)
}

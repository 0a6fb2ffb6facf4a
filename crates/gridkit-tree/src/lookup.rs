//! Depth-first lookups over the item tree.

use gridkit_core::{GridItem, ItemId};

/// Find an item anywhere in the tree.
pub fn find_item(items: &[GridItem], id: ItemId) -> Option<&GridItem> {
    items.iter().find_map(|item| {
        if item.id == id {
            Some(item)
        } else {
            find_item(item.children(), id)
        }
    })
}

pub fn contains_item(items: &[GridItem], id: ItemId) -> bool {
    find_item(items, id).is_some()
}

/// Parent of an item: `Some(None)` for a root item, `None` when absent.
pub fn find_parent(items: &[GridItem], id: ItemId) -> Option<Option<ItemId>> {
    let path = path_to(items, id)?;
    let (_, parents) = path.split_last()?;
    if parents.is_empty() {
        return Some(None);
    }
    let mut list = items;
    let mut parent = None;
    for &index in parents {
        let item = list.get(index)?;
        parent = Some(item.id);
        list = item.children();
    }
    Some(parent)
}

/// The sibling list that contains `id`.
pub fn siblings_of(items: &[GridItem], id: ItemId) -> Option<&[GridItem]> {
    let path = path_to(items, id)?;
    let (_, parents) = path.split_last()?;
    let mut list = items;
    for &index in parents {
        list = list.get(index)?.children();
    }
    Some(list)
}

/// Total number of items in the tree.
pub fn item_count(items: &[GridItem]) -> usize {
    items.iter().map(GridItem::subtree_len).sum()
}

/// One past the largest id in the tree; `None` once that would pass
/// [`ItemId::MAX`].
pub fn next_item_id(items: &[GridItem]) -> Option<ItemId> {
    fn max_id(items: &[GridItem]) -> u64 {
        items
            .iter()
            .map(|item| item.id.0.max(max_id(item.children())))
            .max()
            .unwrap_or(0)
    }
    let next = max_id(items).checked_add(1)?;
    (next <= ItemId::MAX).then_some(ItemId(next))
}

/// Index path from the root list down to `id`.
pub(crate) fn path_to(items: &[GridItem], id: ItemId) -> Option<Vec<usize>> {
    for (index, item) in items.iter().enumerate() {
        if item.id == id {
            return Some(vec![index]);
        }
        if let Some(mut rest) = path_to(item.children(), id) {
            rest.insert(0, index);
            return Some(rest);
        }
    }
    None
}

/// The children list reached by following `parents` from the root.
pub(crate) fn list_at_mut<'a>(items: &'a mut Vec<GridItem>, parents: &[usize]) -> Option<&'a mut Vec<GridItem>> {
    let mut list = items;
    for &index in parents {
        list = &mut list.get_mut(index)?.grid.as_mut()?.children;
    }
    Some(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_tree;

    #[test]
    fn test_find_nested() {
        let tree = sample_tree();
        assert_eq!(find_item(&tree, ItemId(4)).map(|i| i.color.as_str()), Some("rose"));
        assert!(find_item(&tree, ItemId(99)).is_none());
        assert!(contains_item(&tree, ItemId(5)));
    }

    #[test]
    fn test_find_parent() {
        let tree = sample_tree();
        assert_eq!(find_parent(&tree, ItemId(1)), Some(None));
        assert_eq!(find_parent(&tree, ItemId(4)), Some(Some(ItemId(3))));
        assert_eq!(find_parent(&tree, ItemId(5)), Some(Some(ItemId(2))));
        assert_eq!(find_parent(&tree, ItemId(42)), None);
    }

    #[test]
    fn test_siblings_of() {
        let tree = sample_tree();
        let ids: Vec<u64> = siblings_of(&tree, ItemId(5)).unwrap().iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![3, 5]);
    }

    #[test]
    fn test_counts_and_ids() {
        let tree = sample_tree();
        assert_eq!(item_count(&tree), 5);
        assert_eq!(next_item_id(&tree), Some(ItemId(6)));
        assert_eq!(next_item_id(&[]), Some(ItemId(1)));
        assert_eq!(next_item_id(&[GridItem::leaf(ItemId(ItemId::MAX), "sky")]), None);
        assert_eq!(next_item_id(&[GridItem::leaf(ItemId(u64::MAX), "sky")]), None);
    }

    #[test]
    fn test_path_and_list_at_mut() {
        let mut tree = sample_tree();
        assert_eq!(path_to(&tree, ItemId(4)), Some(vec![1, 0, 0]));
        let list = list_at_mut(&mut tree, &[1, 0]).unwrap();
        assert_eq!(list[0].id, ItemId(4));
        assert!(list_at_mut(&mut tree, &[0]).is_none());
    }
}

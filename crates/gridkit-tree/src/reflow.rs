//! Spatial reflow of explicit orders.
//!
//! Siblings are ranked by row start, then column start, then their position in
//! the list. Auto or non-numeric lines rank after every numeric line. The
//! 1-based rank becomes the item's `order` at that breakpoint.

use gridkit_core::{line_sort_key, Breakpoint, GridItem};

/// Rank of every sibling at `bp`, indexed like `siblings`.
pub fn reflow_orders(siblings: &[GridItem], bp: Breakpoint) -> Vec<usize> {
    let mut ranked: Vec<(f64, f64, usize)> = siblings
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let layout = &item.layout[bp];
            (line_sort_key(&layout.row_start), line_sort_key(&layout.col_start), index)
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then(a.1.total_cmp(&b.1))
            .then(a.2.cmp(&b.2))
    });

    let mut orders = vec![0; siblings.len()];
    for (rank, (_, _, index)) in ranked.into_iter().enumerate() {
        orders[index] = rank + 1;
    }
    orders
}

/// Overwrite `order` at `bp` for every sibling.
pub fn reflow(siblings: &mut [GridItem], bp: Breakpoint) {
    let orders = reflow_orders(siblings, bp);
    for (item, order) in siblings.iter_mut().zip(orders) {
        item.layout[bp].order = order.to_string();
    }
}

//! Tolerant configuration import.

use std::collections::HashSet;

use gridkit_core::{
    palette_color, sanitize_grid_settings, sanitize_layout_map, GridItem, GridSettingsMap, ItemId,
    SubGrid,
};
use serde_json::{Map, Value};

use crate::error::{ImportError, Result};

/// A successfully imported layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedConfig {
    pub items: Vec<GridItem>,
    pub grid_settings: GridSettingsMap,
}

/// Parse a configuration document.
///
/// Both `items` and `gridSettings` must be present. Below that, every item is
/// rebuilt from whatever well-shaped data it carries:
/// - a missing, repeated or out-of-range `id` gets a fresh one
/// - a missing `color` is taken from the palette by sibling position
/// - `layout`, `gridSettings` and `subGrid` are sanitized per breakpoint
pub fn import_config(input: &str) -> Result<ImportedConfig> {
    let document: Value = serde_json::from_str(input)?;
    let root = document.as_object().ok_or(ImportError::NotAnObject)?;
    let items = root.get("items").ok_or(ImportError::MissingKey("items"))?;
    let settings = root
        .get("gridSettings")
        .ok_or(ImportError::MissingKey("gridSettings"))?;
    let items = items.as_array().ok_or(ImportError::InvalidItems)?;

    let mut ids = IdAllocator::scan(items);
    let items = import_items(items, &mut ids)?;
    let grid_settings = sanitize_grid_settings(Some(settings));

    tracing::debug!(
        items = items.iter().map(GridItem::subtree_len).sum::<usize>(),
        regenerated_ids = ids.regenerated,
        "imported configuration"
    );

    Ok(ImportedConfig {
        items,
        grid_settings,
    })
}

fn import_items(values: &[Value], ids: &mut IdAllocator) -> Result<Vec<GridItem>> {
    values
        .iter()
        .enumerate()
        .map(|(position, value)| import_item(value, position, ids))
        .collect()
}

fn import_item(value: &Value, position: usize, ids: &mut IdAllocator) -> Result<GridItem> {
    let entry = value.as_object().ok_or(ImportError::InvalidItems)?;

    let id = ids.claim(entry.get("id"));
    let color = entry
        .get("color")
        .and_then(Value::as_str)
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| palette_color(position));

    let mut item = GridItem::leaf(id, color).with_layout(sanitize_layout_map(entry.get("layout")));

    let sub_grid = present(entry, "subGrid");
    let children = present(entry, "children");
    if sub_grid.is_some() || children.is_some() {
        let settings = match sub_grid {
            Some(settings) => sanitize_grid_settings(Some(settings)),
            None => GridSettingsMap::subgrid_default(),
        };
        let children = match children {
            Some(children) => {
                let children = children.as_array().ok_or(ImportError::InvalidItems)?;
                import_items(children, ids)?
            }
            None => Vec::new(),
        };
        item = item.with_grid(SubGrid { settings, children });
    }

    Ok(item)
}

fn present<'a>(entry: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    entry.get(key).filter(|v| !v.is_null())
}

fn parse_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Hands out item ids, keeping document ids where they are usable.
///
/// Ids above [`ItemId::MAX`] are never kept. Fresh ids count up from the
/// largest usable document id; once that passes the ceiling they fill the
/// lowest gaps instead.
struct IdAllocator {
    reserved: HashSet<u64>,
    claimed: HashSet<u64>,
    next: u64,
    low: u64,
    regenerated: usize,
}

impl IdAllocator {
    fn scan(items: &[Value]) -> Self {
        fn collect(values: &[Value], reserved: &mut HashSet<u64>) {
            for entry in values.iter().filter_map(Value::as_object) {
                if let Some(id) = entry.get("id").and_then(usable_id) {
                    reserved.insert(id);
                }
                if let Some(children) = entry.get("children").and_then(Value::as_array) {
                    collect(children, reserved);
                }
            }
        }

        let mut reserved = HashSet::new();
        collect(items, &mut reserved);
        let next = reserved.iter().copied().max().unwrap_or(0) + 1;
        Self {
            reserved,
            claimed: HashSet::new(),
            next,
            low: 1,
            regenerated: 0,
        }
    }

    fn claim(&mut self, raw: Option<&Value>) -> ItemId {
        if let Some(id) = raw.and_then(usable_id) {
            if self.claimed.insert(id) {
                return ItemId(id);
            }
        }
        let id = self.fresh();
        self.claimed.insert(id);
        self.regenerated += 1;
        ItemId(id)
    }

    fn fresh(&mut self) -> u64 {
        if self.next <= ItemId::MAX {
            let id = self.next;
            self.next += 1;
            return id;
        }
        while self.reserved.contains(&self.low) || self.claimed.contains(&self.low) {
            self.low += 1;
        }
        self.low
    }
}

fn usable_id(value: &Value) -> Option<u64> {
    parse_id(value).filter(|&id| id <= ItemId::MAX)
}

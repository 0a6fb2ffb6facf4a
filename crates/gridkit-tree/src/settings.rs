//! Grid setting updates and cross-breakpoint copies.

use gridkit_core::{Axis, Breakpoint, Direction, GridItem, GridSetting, GridSettingsMap, ItemId, Track};

use crate::lookup::{list_at_mut, path_to};

/// One edit to the grid setting of a single breakpoint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "key", content = "value", rename_all = "camelCase"))]
pub enum SettingUpdate {
    Cols(u32),
    Rows(u32),
    Gap(u32),
    ColTracks(Vec<Track>),
    RowTracks(Vec<Track>),
}

impl SettingUpdate {
    /// Apply to one setting, keeping track lists and counts in sync.
    pub fn apply(self, setting: &mut GridSetting) {
        match self {
            SettingUpdate::Cols(n) => setting.set_count(Axis::Column, n),
            SettingUpdate::Rows(n) => setting.set_count(Axis::Row, n),
            SettingUpdate::Gap(gap) => setting.gap = gap,
            SettingUpdate::ColTracks(tracks) => setting.set_tracks(Axis::Column, tracks),
            SettingUpdate::RowTracks(tracks) => setting.set_tracks(Axis::Row, tracks),
        }
    }
}

/// New settings map with `update` applied at `bp` only.
pub fn update_grid_setting(settings: &GridSettingsMap, bp: Breakpoint, update: SettingUpdate) -> GridSettingsMap {
    let mut next = settings.clone();
    update.apply(&mut next[bp]);
    next
}

/// Apply `update` at `bp` to the sub-grid of container `id`.
///
/// `None` when the item is missing or is a leaf.
pub fn update_item_grid_setting(
    items: &[GridItem],
    id: ItemId,
    bp: Breakpoint,
    update: SettingUpdate,
) -> Option<Vec<GridItem>> {
    let path = path_to(items, id)?;
    let (&index, parents) = path.split_last()?;
    let mut tree = items.to_vec();
    let grid = list_at_mut(&mut tree, parents)?.get_mut(index)?.grid.as_mut()?;
    update.apply(&mut grid.settings[bp]);
    Some(tree)
}

/// Replace the settings and every layout at `bp` with the adjacent
/// breakpoint's values, recursing into sub-grids.
///
/// `None` at the end of the cascade.
pub fn copy_from_neighbor(
    settings: &GridSettingsMap,
    items: &[GridItem],
    bp: Breakpoint,
    direction: Direction,
) -> Option<(GridSettingsMap, Vec<GridItem>)> {
    let source = bp.neighbor(direction)?;
    let mut next_settings = settings.clone();
    next_settings.copy_entry(source, bp);
    let mut tree = items.to_vec();
    copy_items(&mut tree, source, bp);
    Some((next_settings, tree))
}

fn copy_items(items: &mut [GridItem], source: Breakpoint, target: Breakpoint) {
    for item in items {
        item.layout.copy_entry(source, target);
        if let Some(grid) = item.grid.as_mut() {
            grid.settings.copy_entry(source, target);
            copy_items(&mut grid.children, source, target);
        }
    }
}

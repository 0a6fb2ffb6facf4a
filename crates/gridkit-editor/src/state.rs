//! The undoable editor state.

use gridkit_core::{GridItem, GridSettingsMap};
use serde::{Deserialize, Serialize};

/// One history snapshot: the item tree and the root grid settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub items: Vec<GridItem>,
    pub grid_settings: GridSettingsMap,
}

impl EditorState {
    pub fn new(items: Vec<GridItem>, grid_settings: GridSettingsMap) -> Self {
        Self {
            items,
            grid_settings,
        }
    }
}

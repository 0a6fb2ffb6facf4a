//! Configuration export.

use gridkit_core::{GridItem, GridSettingsMap};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDocument<'a> {
    items: &'a [GridItem],
    grid_settings: &'a GridSettingsMap,
}

/// Serialize a layout as a pretty-printed configuration document.
pub fn export_config(items: &[GridItem], settings: &GridSettingsMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ConfigDocument {
        items,
        grid_settings: settings,
    })
}

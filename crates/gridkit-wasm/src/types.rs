//! JavaScript-facing argument types.

use glam::DVec2;
use std::fmt::Display;

use gridkit_core::{Axis, Breakpoint, Direction, ItemId, LayoutField};
use gridkit_layout::{DragMode, DragStart, GridCoord, GridLevel, GridSpan};
use serde::{Deserialize, Serialize};

/// Pointer-down description from JavaScript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragStartJs {
    /// Container id of the grid the item lives in; absent for the root grid.
    #[serde(default)]
    pub parent: Option<u64>,
    pub item: u64,
    pub mode: DragMode,
    pub col: u32,
    pub row: u32,
    /// Span hints; the editor re-derives the span from the stored layout.
    #[serde(default = "one")]
    pub col_span: u32,
    #[serde(default = "one")]
    pub row_span: u32,
    pub width: f64,
    pub height: f64,
    pub pointer_x: f64,
    pub pointer_y: f64,
}

fn one() -> u32 {
    1
}

impl DragStartJs {
    pub fn into_core(self, breakpoint: Breakpoint) -> (GridLevel, DragStart) {
        let level = GridLevel::from_parent(self.parent.map(ItemId));
        let start = DragStart {
            item: ItemId(self.item),
            breakpoint,
            mode: self.mode,
            origin: GridCoord::new(self.col.max(1), self.row.max(1)),
            span: GridSpan::new(self.col_span.max(1), self.row_span.max(1)),
            size: DVec2::new(self.width, self.height),
            pointer: DVec2::new(self.pointer_x, self.pointer_y),
        };
        (level, start)
    }
}

/// Outcome of `importConfig`. Bad documents are reported, not thrown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub ok: bool,
    pub error: Option<String>,
}

impl ImportReport {
    pub fn from_result<E: Display>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self { ok: true, error: None },
            Err(e) => Self {
                ok: false,
                error: Some(e.to_string()),
            },
        }
    }
}

pub fn item_id(value: f64) -> ItemId {
    ItemId(value.max(0.0) as u64)
}

pub fn level(parent: Option<f64>) -> GridLevel {
    GridLevel::from_parent(parent.map(item_id))
}

pub fn parse_breakpoint(name: &str) -> Result<Breakpoint, String> {
    name.parse().map_err(|e| format!("{}", e))
}

pub fn parse_field(name: &str) -> Result<LayoutField, String> {
    name.parse().map_err(|e| format!("{}", e))
}

pub fn parse_axis(name: &str) -> Result<Axis, String> {
    match name {
        "cols" | "col" | "column" => Ok(Axis::Column),
        "rows" | "row" => Ok(Axis::Row),
        other => Err(format!("unknown axis: {}", other)),
    }
}

pub fn parse_direction(name: &str) -> Result<Direction, String> {
    match name {
        "smaller" | "prev" => Ok(Direction::Smaller),
        "larger" | "next" => Ok(Direction::Larger),
        other => Err(format!("unknown direction: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_start_defaults() {
        let js: DragStartJs = serde_json::from_str(
            r#"{"item": 3, "mode": "move", "col": 2, "row": 1, "width": 80, "height": 40, "pointerX": 10, "pointerY": 5}"#,
        )
        .unwrap();
        let (level, start) = js.into_core(Breakpoint::Md);
        assert_eq!(level, GridLevel::Root);
        assert_eq!(start.item, ItemId(3));
        assert_eq!(start.span, GridSpan::new(1, 1));
        assert_eq!(start.breakpoint, Breakpoint::Md);
        assert_eq!(start.pointer, DVec2::new(10.0, 5.0));
    }

    #[test]
    fn test_drag_start_in_sub_grid() {
        let js: DragStartJs = serde_json::from_str(
            r#"{"parent": 7, "item": 9, "mode": "resize", "col": 1, "row": 1, "colSpan": 2, "rowSpan": 3, "width": 80, "height": 40, "pointerX": 0, "pointerY": 0}"#,
        )
        .unwrap();
        let (level, start) = js.into_core(Breakpoint::Xs);
        assert_eq!(level, GridLevel::SubGrid(ItemId(7)));
        assert_eq!(start.mode, DragMode::Resize);
        assert_eq!(start.span, GridSpan::new(2, 3));
    }

    #[test]
    fn test_name_parsing() {
        assert_eq!(parse_breakpoint("2xl"), Ok(Breakpoint::Xxl));
        assert!(parse_breakpoint("huge").is_err());
        assert_eq!(parse_field("rowSpan"), Ok(LayoutField::RowSpan));
        assert_eq!(parse_direction("larger"), Ok(Direction::Larger));
        assert!(parse_direction("sideways").is_err());
        assert_eq!(parse_axis("cols"), Ok(Axis::Column));
        assert_eq!(parse_axis("row"), Ok(Axis::Row));
        assert!(parse_axis("depth").is_err());
    }

    #[test]
    fn test_import_report_shape() {
        let ok = ImportReport::from_result::<String>(Ok(()));
        assert_eq!(serde_json::to_value(&ok).unwrap(), serde_json::json!({"ok": true, "error": null}));

        let failed = ImportReport::from_result(Err("import failed: missing key: items"));
        assert!(!failed.ok);
        assert_eq!(failed.error.as_deref(), Some("import failed: missing key: items"));
    }

    #[test]
    fn test_item_id_from_js_number() {
        assert_eq!(item_id(12.0), ItemId(12));
        assert_eq!(item_id(-1.0), ItemId(0));
        assert_eq!(level(None), GridLevel::Root);
    }
}

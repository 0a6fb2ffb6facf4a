//! Drag and resize sessions.
//!
//! A session moves `Idle -> Dragging -> Idle`. Pointer moves only refresh the
//! candidate and its preview rectangle; the layout is patched once, when the
//! session commits. Cancelling discards everything.

use glam::DVec2;
use gridkit_core::{parse_line, Axis, Breakpoint, ItemId, ItemLayout, LayoutField, LayoutPatch};

use crate::bounds::Bounds;
use crate::metrics::{GridCoord, GridMetrics, GridSpan};

/// The grid level an interaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GridLevel {
    /// The root grid
    Root,
    /// The sub-grid owned by a container item
    SubGrid(ItemId),
}

impl GridLevel {
    /// Level for a parent id as used by tree operations.
    pub fn from_parent(parent: Option<ItemId>) -> Self {
        parent.map_or(GridLevel::Root, GridLevel::SubGrid)
    }

    pub fn parent(self) -> Option<ItemId> {
        match self {
            GridLevel::Root => None,
            GridLevel::SubGrid(id) => Some(id),
        }
    }
}

/// What the pointer is doing to the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DragMode {
    Move,
    Resize,
}

/// Everything captured on pointer-down.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DragStart {
    pub item: ItemId,
    pub breakpoint: Breakpoint,
    pub mode: DragMode,
    /// Grid cell of the item's top-left corner
    pub origin: GridCoord,
    /// Effective span when the session started
    pub span: GridSpan,
    /// Rendered item size in pixels
    pub size: DVec2,
    /// Pointer position on pointer-down
    pub pointer: DVec2,
}

/// Final candidate of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragCommit {
    pub item: ItemId,
    pub breakpoint: Breakpoint,
    pub mode: DragMode,
    pub coord: GridCoord,
    pub span: GridSpan,
}

impl DragCommit {
    /// Field writes that realize this commit against the item's current layout.
    ///
    /// A move rewrites both line pairs around the preserved span. A resize
    /// moves the end line when the start line is explicit and grows the span
    /// field otherwise.
    pub fn patch(&self, layout: &ItemLayout) -> LayoutPatch {
        let mut patch = LayoutPatch::new();
        for axis in [Axis::Column, Axis::Row] {
            let span = self.span.get(axis);
            patch = match self.mode {
                DragMode::Move => {
                    let start = self.coord.get(axis);
                    patch
                        .set(LayoutField::start(axis), start.to_string())
                        .set(LayoutField::end(axis), start.saturating_add(span).to_string())
                }
                DragMode::Resize => match parse_line(layout.start(axis)) {
                    Some(start) => {
                        patch.set(LayoutField::end(axis), start.saturating_add(span as i64).to_string())
                    }
                    None => patch.set(LayoutField::span(axis), span.to_string()),
                },
            };
        }
        patch
    }
}

/// A running session: the captured start plus the current candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    start: DragStart,
    coord: GridCoord,
    span: GridSpan,
    indicator: Bounds,
}

impl ActiveDrag {
    pub fn start(&self) -> &DragStart {
        &self.start
    }

    pub fn coord(&self) -> GridCoord {
        self.coord
    }

    pub fn span(&self) -> GridSpan {
        self.span
    }
}

/// Pointer interaction state for one grid level.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

impl DragSession {
    /// Start a session. Ignored unless `interactive` is set; a running
    /// session is replaced.
    pub fn begin(&mut self, start: DragStart, metrics: &GridMetrics, interactive: bool) -> bool {
        if !interactive {
            return false;
        }
        tracing::trace!(item = %start.item, mode = ?start.mode, "drag session started");
        let indicator = metrics.indicator_rectangle(start.origin, start.span);
        *self = DragSession::Dragging(ActiveDrag {
            coord: start.origin,
            span: start.span,
            indicator,
            start,
        });
        true
    }

    /// Recompute the candidate from the cumulative pointer delta.
    ///
    /// Returns the preview rectangle, or `None` when idle.
    pub fn update(&mut self, pointer: DVec2, metrics: &GridMetrics) -> Option<Bounds> {
        let DragSession::Dragging(drag) = self else {
            return None;
        };
        let delta = pointer - drag.start.pointer;

        match drag.start.mode {
            DragMode::Move => {
                let origin = metrics.indicator_rectangle(drag.start.origin, drag.start.span).position();
                drag.coord = metrics.coordinate_from_pixel(origin + delta, drag.start.span);
            }
            DragMode::Resize => {
                let size = drag.start.size + delta;
                drag.span = metrics.span_from_pixel_size(size, drag.start.origin);
            }
        }
        drag.indicator = metrics.indicator_rectangle(drag.coord, drag.span);
        Some(drag.indicator)
    }

    /// End the session, returning the candidate when it differs from the start.
    pub fn commit(&mut self) -> Option<DragCommit> {
        let DragSession::Dragging(drag) = std::mem::take(self) else {
            return None;
        };
        if drag.coord == drag.start.origin && drag.span == drag.start.span {
            tracing::trace!(item = %drag.start.item, "drag session ended without change");
            return None;
        }
        tracing::trace!(item = %drag.start.item, col = drag.coord.col, row = drag.coord.row, "drag session committed");
        Some(DragCommit {
            item: drag.start.item,
            breakpoint: drag.start.breakpoint,
            mode: drag.start.mode,
            coord: drag.coord,
            span: drag.span,
        })
    }

    /// Discard the session without touching the layout.
    pub fn cancel(&mut self) {
        if self.is_active() {
            tracing::trace!("drag session cancelled");
        }
        *self = DragSession::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, DragSession::Dragging(_))
    }

    /// Item being dragged, if any.
    pub fn item(&self) -> Option<ItemId> {
        match self {
            DragSession::Dragging(drag) => Some(drag.start.item),
            DragSession::Idle => None,
        }
    }

    /// Current preview rectangle.
    pub fn indicator(&self) -> Option<Bounds> {
        match self {
            DragSession::Dragging(drag) => Some(drag.indicator),
            DragSession::Idle => None,
        }
    }
}

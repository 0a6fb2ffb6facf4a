//! Rendered track metrics and pixel <-> grid line conversion.

use glam::DVec2;
use gridkit_core::{Axis, GridSetting};

use crate::bounds::Bounds;
use crate::resolve::{gap_px, resolve_track_sizes};

/// A 1-based grid cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    pub col: u32,
    pub row: u32,
}

impl GridCoord {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    pub fn get(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Column => self.col,
            Axis::Row => self.row,
        }
    }
}

/// Number of tracks covered on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpan {
    pub cols: u32,
    pub rows: u32,
}

impl GridSpan {
    pub fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    pub fn get(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Column => self.cols,
            Axis::Row => self.rows,
        }
    }
}

impl Default for GridSpan {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Cumulative offset of the 1-based track `index`: every preceding track
/// plus one gap per preceding track.
pub fn track_position(index: usize, sizes: &[f64], gap: f64) -> f64 {
    let preceding = index.saturating_sub(1);
    let tracks: f64 = sizes.iter().take(preceding).sum();
    tracks + gap * preceding as f64
}

/// Rendered sizes of one axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisMetrics {
    pub sizes: Vec<f64>,
    pub gap: f64,
}

impl AxisMetrics {
    pub fn new(sizes: Vec<f64>, gap: f64) -> Self {
        Self { sizes, gap }
    }

    /// `count` tracks of the same size.
    pub fn uniform(count: usize, size: f64, gap: f64) -> Self {
        Self::new(vec![size; count], gap)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Offset of the 1-based track `index`.
    pub fn track_position(&self, index: u32) -> f64 {
        track_position(index as usize, &self.sizes, self.gap)
    }

    /// Far edge of the 1-based track `index`.
    pub fn track_end(&self, index: u32) -> f64 {
        let size = self.sizes.get(index.saturating_sub(1) as usize).copied().unwrap_or(0.0);
        self.track_position(index) + size
    }

    /// Pixel extent of `span` tracks starting at `start`, including inner gaps.
    pub fn span_size(&self, start: u32, span: u32) -> f64 {
        let first = start.saturating_sub(1) as usize;
        let covered: Vec<f64> = self.sizes.iter().skip(first).take(span as usize).copied().collect();
        if covered.is_empty() {
            return 0.0;
        }
        covered.iter().sum::<f64>() + self.gap * (covered.len() - 1) as f64
    }

    /// Total extent of the axis.
    pub fn total_size(&self) -> f64 {
        self.span_size(1, self.sizes.len() as u32)
    }

    /// Starting line for a pointer position.
    ///
    /// The first track whose midpoint lies beyond `position` wins; the result
    /// is clamped so `span` tracks still fit.
    pub fn line_from_pixel(&self, position: f64, span: u32) -> u32 {
        let total = self.sizes.len() as u32;
        if total == 0 {
            return 1;
        }

        let mut offset = 0.0;
        let mut line = total;
        for (i, size) in self.sizes.iter().enumerate() {
            if position < offset + size / 2.0 {
                line = i as u32 + 1;
                break;
            }
            offset += size + self.gap;
        }

        let last_start = total.saturating_sub(span.max(1)) + 1;
        line.clamp(1, last_start.max(1))
    }

    /// Number of tracks, starting at `start`, needed to cover `size` pixels.
    ///
    /// Tracks are taken greedily until the covered extent reaches
    /// `size - gap / 2`; the count is clamped to `[1, max_span]`.
    pub fn span_from_pixel_size(&self, size: f64, start: u32, max_span: u32) -> u32 {
        let target = size - self.gap / 2.0;
        let mut covered = 0.0;
        let mut count = 0u32;

        for track in self.sizes.iter().skip(start.saturating_sub(1) as usize) {
            if count > 0 {
                covered += self.gap;
            }
            covered += track;
            count += 1;
            if covered >= target {
                break;
            }
        }

        count.clamp(1, max_span.max(1))
    }
}

/// Rendered metrics of one grid level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridMetrics {
    pub columns: AxisMetrics,
    pub rows: AxisMetrics,
}

impl GridMetrics {
    pub fn new(columns: AxisMetrics, rows: AxisMetrics) -> Self {
        Self { columns, rows }
    }

    /// Resolve the live tracks of `setting` for a container of `width` x `height` pixels.
    pub fn resolve(setting: &GridSetting, width: f64, height: f64) -> Self {
        let gap = gap_px(setting.gap);
        Self {
            columns: AxisMetrics::new(resolve_track_sizes(&setting.col_tracks, width, gap), gap),
            rows: AxisMetrics::new(resolve_track_sizes(&setting.row_tracks, height, gap), gap),
        }
    }

    pub fn axis(&self, axis: Axis) -> &AxisMetrics {
        match axis {
            Axis::Column => &self.columns,
            Axis::Row => &self.rows,
        }
    }

    pub fn total_cols(&self) -> u32 {
        self.columns.len() as u32
    }

    pub fn total_rows(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Grid coordinate under `point` for an item of size `span`.
    pub fn coordinate_from_pixel(&self, point: DVec2, span: GridSpan) -> GridCoord {
        GridCoord::new(
            self.columns.line_from_pixel(point.x, span.cols),
            self.rows.line_from_pixel(point.y, span.rows),
        )
    }

    /// Span covering a pixel size from `start`, bounded by the grid edge.
    pub fn span_from_pixel_size(&self, size: DVec2, start: GridCoord) -> GridSpan {
        let max_cols = self.total_cols().saturating_sub(start.col) + 1;
        let max_rows = self.total_rows().saturating_sub(start.row) + 1;
        GridSpan::new(
            self.columns.span_from_pixel_size(size.x, start.col, max_cols),
            self.rows.span_from_pixel_size(size.y, start.row, max_rows),
        )
    }

    /// Pixel rectangle covering the given cells.
    pub fn indicator_rectangle(&self, start: GridCoord, span: GridSpan) -> Bounds {
        Bounds::new(
            self.columns.track_position(start.col),
            self.rows.track_position(start.row),
            self.columns.span_size(start.col, span.cols),
            self.rows.span_size(start.row, span.rows),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridkit_core::Track;
    use proptest::prelude::*;

    fn uniform_grid() -> GridMetrics {
        GridMetrics::new(AxisMetrics::uniform(4, 100.0, 10.0), AxisMetrics::uniform(3, 50.0, 10.0))
    }

    #[test]
    fn test_track_position() {
        let sizes = [100.0, 50.0, 80.0];
        assert_eq!(track_position(1, &sizes, 10.0), 0.0);
        assert_eq!(track_position(2, &sizes, 10.0), 110.0);
        assert_eq!(track_position(3, &sizes, 10.0), 170.0);
    }

    #[test]
    fn test_track_end() {
        let axis = AxisMetrics::new(vec![100.0, 50.0, 80.0], 10.0);
        assert_eq!(axis.track_end(1), 100.0);
        assert_eq!(axis.track_end(2), 160.0);
        assert_eq!(axis.track_end(3), axis.total_size());
    }

    #[test]
    fn test_line_from_pixel_uses_midpoints() {
        let cols = AxisMetrics::uniform(4, 100.0, 10.0);
        assert_eq!(cols.line_from_pixel(0.0, 1), 1);
        assert_eq!(cols.line_from_pixel(49.0, 1), 1);
        assert_eq!(cols.line_from_pixel(51.0, 1), 2);
        assert_eq!(cols.line_from_pixel(-40.0, 1), 1);
        assert_eq!(cols.line_from_pixel(10_000.0, 1), 4);
    }

    #[test]
    fn test_line_from_pixel_clamps_span() {
        let cols = AxisMetrics::uniform(4, 100.0, 10.0);
        assert_eq!(cols.line_from_pixel(400.0, 2), 3);
        assert_eq!(cols.line_from_pixel(400.0, 4), 1);
        assert_eq!(cols.line_from_pixel(400.0, 9), 1);
        assert_eq!(AxisMetrics::default().line_from_pixel(30.0, 1), 1);
    }

    #[test]
    fn test_line_from_pixel_non_uniform() {
        let cols = AxisMetrics::new(vec![200.0, 40.0, 100.0], 0.0);
        assert_eq!(cols.line_from_pixel(90.0, 1), 1);
        assert_eq!(cols.line_from_pixel(150.0, 1), 2);
        assert_eq!(cols.line_from_pixel(225.0, 1), 3);
    }

    #[test]
    fn test_span_from_pixel_size() {
        let cols = AxisMetrics::uniform(4, 100.0, 10.0);
        assert_eq!(cols.span_from_pixel_size(100.0, 1, 4), 1);
        assert_eq!(cols.span_from_pixel_size(210.0, 1, 4), 2);
        assert_eq!(cols.span_from_pixel_size(206.0, 1, 4), 2);
        assert_eq!(cols.span_from_pixel_size(1000.0, 1, 4), 4);
        assert_eq!(cols.span_from_pixel_size(1000.0, 3, 2), 2);
        assert_eq!(cols.span_from_pixel_size(-50.0, 2, 3), 1);
        assert_eq!(cols.span_from_pixel_size(320.0, 2, 2), 2);
    }

    #[test]
    fn test_indicator_rectangle() {
        let rect = uniform_grid().indicator_rectangle(GridCoord::new(2, 2), GridSpan::new(2, 2));
        assert_eq!(rect, Bounds::new(110.0, 60.0, 210.0, 110.0));
    }

    #[test]
    fn test_resolve_from_setting() {
        let mut setting = GridSetting::new(3, 1, 2);
        setting.set_tracks(Axis::Column, vec![Track::px(100.0), Track::fr(1.0), Track::fr(1.0)]);
        let metrics = GridMetrics::resolve(&setting, 316.0, 50.0);
        assert_eq!(metrics.columns.gap, 8.0);
        assert_eq!(metrics.columns.sizes, vec![100.0, 100.0, 100.0]);
        assert_eq!(metrics.rows.sizes, vec![50.0]);
        assert_eq!(metrics.columns.total_size(), 316.0);
    }

    proptest! {
        #[test]
        fn prop_indicator_round_trip(
            cols in 1u32..8,
            rows in 1u32..8,
            track_w in 10.0f64..200.0,
            track_h in 10.0f64..200.0,
            gap in 0.0f64..40.0,
            seed in any::<(u32, u32, u32, u32)>(),
        ) {
            let metrics = GridMetrics::new(
                AxisMetrics::uniform(cols as usize, track_w, gap),
                AxisMetrics::uniform(rows as usize, track_h, gap),
            );
            let col = seed.0 % cols + 1;
            let row = seed.1 % rows + 1;
            let span = GridSpan::new(seed.2 % (cols - col + 1) + 1, seed.3 % (rows - row + 1) + 1);
            let start = GridCoord::new(col, row);

            let rect = metrics.indicator_rectangle(start, span);
            prop_assert_eq!(metrics.coordinate_from_pixel(rect.position(), span), start);
            prop_assert_eq!(metrics.span_from_pixel_size(rect.size(), start), span);
        }
    }
}

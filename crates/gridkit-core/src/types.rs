//! Core value types for grids, tracks and items.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::breakpoint::PerBreakpoint;
use crate::errors::ParseNameError;
use crate::layout::{is_auto_value, parse_span, AUTO};

/// Grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    Column,
    Row,
}

impl Axis {
    /// Short token used in generated classes (`cols`/`rows`).
    pub const fn plural(self) -> &'static str {
        match self {
            Axis::Column => "cols",
            Axis::Row => "rows",
        }
    }

    /// Short token used in item classes (`col`/`row`).
    pub const fn singular(self) -> &'static str {
        match self {
            Axis::Column => "col",
            Axis::Row => "row",
        }
    }
}

// ============================================================================
// Tracks
// ============================================================================

static NEXT_TRACK_ID: AtomicU64 = AtomicU64::new(1);

/// Unique track identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TrackId(pub String);

impl TrackId {
    /// Generate a process-wide unique id.
    pub fn fresh() -> Self {
        let n = NEXT_TRACK_ID.fetch_add(1, Ordering::Relaxed);
        TrackId(format!("track-{}", n))
    }
}

impl From<&str> for TrackId {
    fn from(s: &str) -> Self {
        TrackId(s.to_string())
    }
}

/// Track sizing units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackUnit {
    /// Fraction of free space
    #[cfg_attr(feature = "serde", serde(rename = "fr"))]
    Fr,
    /// Pixels
    #[cfg_attr(feature = "serde", serde(rename = "px"))]
    Px,
    /// Relative to root font size
    #[cfg_attr(feature = "serde", serde(rename = "rem"))]
    Rem,
    /// Percentage of the container
    #[cfg_attr(feature = "serde", serde(rename = "%"))]
    Percent,
    #[cfg_attr(feature = "serde", serde(rename = "auto"))]
    Auto,
    #[cfg_attr(feature = "serde", serde(rename = "min-content"))]
    MinContent,
    #[cfg_attr(feature = "serde", serde(rename = "max-content"))]
    MaxContent,
}

impl TrackUnit {
    pub const ALL: [TrackUnit; 7] = [
        TrackUnit::Fr,
        TrackUnit::Px,
        TrackUnit::Rem,
        TrackUnit::Percent,
        TrackUnit::Auto,
        TrackUnit::MinContent,
        TrackUnit::MaxContent,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TrackUnit::Fr => "fr",
            TrackUnit::Px => "px",
            TrackUnit::Rem => "rem",
            TrackUnit::Percent => "%",
            TrackUnit::Auto => "auto",
            TrackUnit::MinContent => "min-content",
            TrackUnit::MaxContent => "max-content",
        }
    }

    /// Keyword units carry no numeric value.
    pub const fn is_keyword(self) -> bool {
        matches!(self, TrackUnit::Auto | TrackUnit::MinContent | TrackUnit::MaxContent)
    }
}

impl fmt::Display for TrackUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackUnit {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| ParseNameError::new("track unit", s))
    }
}

/// One sized track along one axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    pub id: TrackId,
    pub value: f64,
    pub unit: TrackUnit,
}

impl Track {
    pub fn new(value: f64, unit: TrackUnit) -> Self {
        Self {
            id: TrackId::fresh(),
            value,
            unit,
        }
    }

    pub fn fr(value: f64) -> Self {
        Self::new(value, TrackUnit::Fr)
    }

    pub fn px(value: f64) -> Self {
        Self::new(value, TrackUnit::Px)
    }

    pub fn keyword(unit: TrackUnit) -> Self {
        Self::new(1.0, unit)
    }

    /// `1fr`, the track every count change appends.
    pub fn is_default_fr(&self) -> bool {
        self.unit == TrackUnit::Fr && self.value == 1.0
    }

    /// CSS text for this track, e.g. `1fr`, `200px`, `auto`.
    pub fn css(&self) -> String {
        if self.unit.is_keyword() {
            self.unit.as_str().to_string()
        } else {
            format!("{}{}", format_number(self.value), self.unit.as_str())
        }
    }
}

/// Format a number without a trailing `.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

// ============================================================================
// Grid settings
// ============================================================================

/// Grid settings for one breakpoint.
///
/// `col_tracks.len() == cols` and `row_tracks.len() == rows` hold after every
/// mutation made through the setters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GridSetting {
    pub cols: u32,
    pub rows: u32,
    pub col_tracks: Vec<Track>,
    pub row_tracks: Vec<Track>,
    pub gap: u32,
}

impl GridSetting {
    /// Create a setting with uniform `1fr` tracks.
    pub fn new(cols: u32, rows: u32, gap: u32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            col_tracks: (0..cols).map(|_| Track::fr(1.0)).collect(),
            row_tracks: (0..rows).map(|_| Track::fr(1.0)).collect(),
            gap,
        }
    }

    pub fn count(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Column => self.cols,
            Axis::Row => self.rows,
        }
    }

    pub fn tracks(&self, axis: Axis) -> &[Track] {
        match axis {
            Axis::Column => &self.col_tracks,
            Axis::Row => &self.row_tracks,
        }
    }

    /// Change the track count, appending `1fr` tracks or truncating from the end.
    pub fn set_count(&mut self, axis: Axis, count: u32) {
        let count = count.max(1);
        let (total, tracks) = self.axis_mut(axis);
        *total = count;
        let len = count as usize;
        if tracks.len() > len {
            tracks.truncate(len);
        } else {
            while tracks.len() < len {
                tracks.push(Track::fr(1.0));
            }
        }
    }

    /// Replace the tracks of one axis and resynchronize the count.
    ///
    /// An empty list is replaced by a single `1fr` track.
    pub fn set_tracks(&mut self, axis: Axis, mut new_tracks: Vec<Track>) {
        if new_tracks.is_empty() {
            new_tracks.push(Track::fr(1.0));
        }
        let (total, tracks) = self.axis_mut(axis);
        *total = new_tracks.len() as u32;
        *tracks = new_tracks;
    }

    /// True when every track on the axis is `1fr`.
    pub fn is_uniform(&self, axis: Axis) -> bool {
        self.tracks(axis).iter().all(Track::is_default_fr)
    }

    /// True when both track lists match their counts.
    pub fn is_synchronized(&self) -> bool {
        self.col_tracks.len() == self.cols as usize && self.row_tracks.len() == self.rows as usize
    }

    fn axis_mut(&mut self, axis: Axis) -> (&mut u32, &mut Vec<Track>) {
        match axis {
            Axis::Column => (&mut self.cols, &mut self.col_tracks),
            Axis::Row => (&mut self.rows, &mut self.row_tracks),
        }
    }
}

impl Default for GridSetting {
    fn default() -> Self {
        Self::new(4, 4, 4)
    }
}

/// Grid settings for every breakpoint.
pub type GridSettingsMap = PerBreakpoint<GridSetting>;

impl PerBreakpoint<GridSetting> {
    /// Settings attached to an item when it becomes a sub-grid.
    pub fn subgrid_default() -> Self {
        Self::from_fn(|_| GridSetting::new(2, 2, 2))
    }
}

// ============================================================================
// Item layout
// ============================================================================

/// Placement of one item at one breakpoint.
///
/// Positional fields hold a grid line as text or the literal `"auto"`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItemLayout {
    pub col_start: String,
    pub col_end: String,
    pub row_start: String,
    pub row_end: String,
    pub col_span: u32,
    pub row_span: u32,
    pub order: String,
}

impl Default for ItemLayout {
    fn default() -> Self {
        Self {
            col_start: AUTO.to_string(),
            col_end: AUTO.to_string(),
            row_start: AUTO.to_string(),
            row_end: AUTO.to_string(),
            col_span: 1,
            row_span: 1,
            order: AUTO.to_string(),
        }
    }
}

impl ItemLayout {
    pub fn start(&self, axis: Axis) -> &str {
        match axis {
            Axis::Column => &self.col_start,
            Axis::Row => &self.row_start,
        }
    }

    pub fn end(&self, axis: Axis) -> &str {
        match axis {
            Axis::Column => &self.col_end,
            Axis::Row => &self.row_end,
        }
    }

    pub fn span(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Column => self.col_span,
            Axis::Row => self.row_span,
        }
    }

    /// Current value of a field as text.
    pub fn field(&self, field: LayoutField) -> String {
        match field {
            LayoutField::ColStart => self.col_start.clone(),
            LayoutField::ColEnd => self.col_end.clone(),
            LayoutField::RowStart => self.row_start.clone(),
            LayoutField::RowEnd => self.row_end.clone(),
            LayoutField::ColSpan => self.col_span.to_string(),
            LayoutField::RowSpan => self.row_span.to_string(),
            LayoutField::Order => self.order.clone(),
        }
    }

    /// Write a raw user value.
    ///
    /// Spans parse to a positive integer (anything else becomes 1). Other fields
    /// store `"auto"` for empty/auto input and the text verbatim otherwise.
    pub fn set_field(&mut self, field: LayoutField, raw: &str) {
        let line = || {
            if is_auto_value(raw) {
                AUTO.to_string()
            } else {
                raw.to_string()
            }
        };
        match field {
            LayoutField::ColStart => self.col_start = line(),
            LayoutField::ColEnd => self.col_end = line(),
            LayoutField::RowStart => self.row_start = line(),
            LayoutField::RowEnd => self.row_end = line(),
            LayoutField::ColSpan => self.col_span = parse_span(raw),
            LayoutField::RowSpan => self.row_span = parse_span(raw),
            LayoutField::Order => self.order = line(),
        }
    }
}

/// Editable fields of an [`ItemLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum LayoutField {
    ColStart,
    ColEnd,
    RowStart,
    RowEnd,
    ColSpan,
    RowSpan,
    Order,
}

impl LayoutField {
    pub const ALL: [LayoutField; 7] = [
        LayoutField::ColStart,
        LayoutField::ColEnd,
        LayoutField::RowStart,
        LayoutField::RowEnd,
        LayoutField::ColSpan,
        LayoutField::RowSpan,
        LayoutField::Order,
    ];

    /// Wire name of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            LayoutField::ColStart => "colStart",
            LayoutField::ColEnd => "colEnd",
            LayoutField::RowStart => "rowStart",
            LayoutField::RowEnd => "rowEnd",
            LayoutField::ColSpan => "colSpan",
            LayoutField::RowSpan => "rowSpan",
            LayoutField::Order => "order",
        }
    }

    pub const fn is_span(self) -> bool {
        matches!(self, LayoutField::ColSpan | LayoutField::RowSpan)
    }

    pub const fn start(axis: Axis) -> Self {
        match axis {
            Axis::Column => LayoutField::ColStart,
            Axis::Row => LayoutField::RowStart,
        }
    }

    pub const fn end(axis: Axis) -> Self {
        match axis {
            Axis::Column => LayoutField::ColEnd,
            Axis::Row => LayoutField::RowEnd,
        }
    }

    pub const fn span(axis: Axis) -> Self {
        match axis {
            Axis::Column => LayoutField::ColSpan,
            Axis::Row => LayoutField::RowSpan,
        }
    }
}

impl fmt::Display for LayoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutField {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseNameError::new("layout field", s))
    }
}

/// Item placement for every breakpoint.
pub type LayoutMap = PerBreakpoint<ItemLayout>;

/// An ordered set of raw field writes applied to one layout as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutPatch {
    pub writes: Vec<(LayoutField, String)>,
}

impl LayoutPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: LayoutField, raw: impl Into<String>) -> Self {
        self.writes.push((field, raw.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Apply every write in order.
    pub fn apply(&self, layout: &mut ItemLayout) {
        for (field, raw) in &self.writes {
            layout.set_field(*field, raw);
        }
    }
}

// ============================================================================
// Items
// ============================================================================

/// Unique item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u64);

impl ItemId {
    /// Largest id handed out or accepted from a document: ids cross into
    /// JavaScript as numbers, which are exact only up to 2^53 - 1.
    pub const MAX: u64 = (1 << 53) - 1;
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Color tokens assigned to items round-robin.
pub const PALETTE: [&str; 8] = [
    "sky", "emerald", "amber", "rose", "violet", "teal", "orange", "indigo",
];

/// Palette color for a position or id.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// The nested grid owned by a container item.
#[derive(Debug, Clone, PartialEq)]
pub struct SubGrid {
    pub settings: GridSettingsMap,
    pub children: Vec<GridItem>,
}

impl SubGrid {
    pub fn new(settings: GridSettingsMap) -> Self {
        Self {
            settings,
            children: Vec::new(),
        }
    }
}

/// A node of the item tree: a leaf, or a container owning a sub-grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "wire::GridItemRepr", into = "wire::GridItemRepr")
)]
pub struct GridItem {
    pub id: ItemId,
    pub color: String,
    pub layout: LayoutMap,
    pub grid: Option<SubGrid>,
}

impl GridItem {
    /// A leaf with an empty layout at every breakpoint.
    pub fn leaf(id: ItemId, color: impl Into<String>) -> Self {
        Self {
            id,
            color: color.into(),
            layout: LayoutMap::default(),
            grid: None,
        }
    }

    pub fn with_layout(mut self, layout: LayoutMap) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_grid(mut self, grid: SubGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn is_container(&self) -> bool {
        self.grid.is_some()
    }

    /// Children of a container; empty for a leaf.
    pub fn children(&self) -> &[GridItem] {
        self.grid.as_ref().map_or(&[], |g| g.children.as_slice())
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(GridItem::subtree_len).sum::<usize>()
    }
}

#[cfg(feature = "serde")]
mod wire {
    use super::*;

    /// Flat wire shape: `subGrid` and `children` sit beside `layout`.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GridItemRepr {
        pub id: ItemId,
        pub color: String,
        pub layout: LayoutMap,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub sub_grid: Option<GridSettingsMap>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub children: Option<Vec<GridItem>>,
    }

    impl From<GridItemRepr> for GridItem {
        fn from(repr: GridItemRepr) -> Self {
            let grid = repr.sub_grid.map(|settings| SubGrid {
                settings,
                children: repr.children.unwrap_or_default(),
            });
            GridItem {
                id: repr.id,
                color: repr.color,
                layout: repr.layout,
                grid,
            }
        }
    }

    impl From<GridItem> for GridItemRepr {
        fn from(item: GridItem) -> Self {
            let (sub_grid, children) = match item.grid {
                Some(grid) => (Some(grid.settings), Some(grid.children)),
                None => (None, None),
            };
            GridItemRepr {
                id: item.id,
                color: item.color,
                layout: item.layout,
                sub_grid,
                children,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_cols_appends_default_tracks() {
        let mut setting = GridSetting::new(4, 2, 4);
        setting.col_tracks[1] = Track::px(200.0);
        let original = setting.col_tracks.clone();

        setting.set_count(Axis::Column, 6);

        assert_eq!(setting.cols, 6);
        assert_eq!(setting.col_tracks.len(), 6);
        assert_eq!(&setting.col_tracks[..4], &original[..]);
        for track in &setting.col_tracks[4..] {
            assert_eq!(track.unit, TrackUnit::Fr);
            assert_eq!(track.value, 1.0);
        }
        assert_ne!(setting.col_tracks[4].id, setting.col_tracks[5].id);
    }

    #[test]
    fn test_shrink_cols_truncates() {
        let mut setting = GridSetting::new(4, 2, 4);
        let original = setting.col_tracks.clone();
        setting.set_count(Axis::Column, 2);
        assert_eq!(setting.col_tracks, original[..2].to_vec());
        assert!(setting.is_synchronized());
    }

    #[test]
    fn test_set_tracks_resyncs_count() {
        let mut setting = GridSetting::new(4, 2, 4);
        setting.set_tracks(Axis::Row, vec![Track::px(80.0), Track::fr(1.0), Track::keyword(TrackUnit::Auto)]);
        assert_eq!(setting.rows, 3);
        setting.set_tracks(Axis::Row, Vec::new());
        assert_eq!(setting.rows, 1);
        assert!(setting.is_synchronized());
    }

    #[test]
    fn test_count_never_zero() {
        let mut setting = GridSetting::new(0, 0, 0);
        assert_eq!((setting.cols, setting.rows), (1, 1));
        setting.set_count(Axis::Column, 0);
        assert_eq!(setting.cols, 1);
        assert_eq!(setting.col_tracks.len(), 1);
    }

    #[test]
    fn test_uniform_detection() {
        let mut setting = GridSetting::new(3, 3, 0);
        assert!(setting.is_uniform(Axis::Column));
        setting.set_tracks(Axis::Column, vec![Track::fr(2.0), Track::fr(1.0)]);
        assert!(!setting.is_uniform(Axis::Column));
        assert!(setting.is_uniform(Axis::Row));
    }

    #[test]
    fn test_track_css() {
        assert_eq!(Track::fr(1.0).css(), "1fr");
        assert_eq!(Track::px(120.0).css(), "120px");
        assert_eq!(Track::new(1.5, TrackUnit::Rem).css(), "1.5rem");
        assert_eq!(Track::new(50.0, TrackUnit::Percent).css(), "50%");
        assert_eq!(Track::keyword(TrackUnit::MinContent).css(), "min-content");
    }

    #[test]
    fn test_fresh_track_ids_are_unique() {
        let a = TrackId::fresh();
        let b = TrackId::fresh();
        assert_ne!(a, b);
    }

    #[test]
    fn test_set_field_normalizes() {
        let mut layout = ItemLayout::default();
        layout.set_field(LayoutField::ColStart, "2");
        layout.set_field(LayoutField::ColEnd, "span 2");
        layout.set_field(LayoutField::RowStart, "");
        layout.set_field(LayoutField::ColSpan, "-3");
        layout.set_field(LayoutField::RowSpan, "4");
        assert_eq!(layout.col_start, "2");
        assert_eq!(layout.col_end, "span 2");
        assert_eq!(layout.row_start, "auto");
        assert_eq!(layout.col_span, 1);
        assert_eq!(layout.row_span, 4);
        assert_eq!(layout.field(LayoutField::RowSpan), "4");
    }

    #[test]
    fn test_patch_applies_in_order() {
        let mut layout = ItemLayout::default();
        LayoutPatch::new()
            .set(LayoutField::ColStart, "2")
            .set(LayoutField::ColEnd, "4")
            .set(LayoutField::ColStart, "3")
            .apply(&mut layout);
        assert_eq!(layout.col_start, "3");
        assert_eq!(layout.col_end, "4");
    }

    #[test]
    fn test_layout_field_names() {
        assert_eq!("rowEnd".parse::<LayoutField>().unwrap(), LayoutField::RowEnd);
        assert!("row_end".parse::<LayoutField>().is_err());
        assert!(LayoutField::ColSpan.is_span());
        assert!(!LayoutField::Order.is_span());
    }

    #[test]
    fn test_subtree_len() {
        let mut container = GridItem::leaf(ItemId(1), "sky").with_grid(SubGrid::new(GridSettingsMap::subgrid_default()));
        if let Some(grid) = container.grid.as_mut() {
            grid.children.push(GridItem::leaf(ItemId(2), "rose"));
            grid.children.push(GridItem::leaf(ItemId(3), "teal"));
        }
        assert_eq!(container.subtree_len(), 3);
        assert_eq!(GridItem::leaf(ItemId(9), "sky").subtree_len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_item_wire_shape() {
        let leaf = GridItem::leaf(ItemId(7), "amber");
        let json = serde_json::to_value(&leaf).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["layout"]["md"]["colStart"], "auto");
        assert!(json.get("subGrid").is_none());
        assert!(json.get("children").is_none());

        let container = leaf.with_grid(SubGrid::new(GridSettingsMap::subgrid_default()));
        let json = serde_json::to_value(&container).unwrap();
        assert_eq!(json["subGrid"]["2xl"]["cols"], 2);
        assert_eq!(json["children"], serde_json::json!([]));

        let back: GridItem = serde_json::from_value(json).unwrap();
        assert!(back.is_container());
    }
}

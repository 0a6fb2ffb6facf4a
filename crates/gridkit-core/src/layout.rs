//! Pure layout algebra: construction, cloning, sanitizing and span math.

use crate::breakpoint::PerBreakpoint;
use crate::types::{Axis, GridSettingsMap, ItemLayout, LayoutMap};

/// The literal used for automatically placed lines and orders.
pub const AUTO: &str = "auto";

/// True for the empty string and the literal `"auto"`.
pub fn is_auto_value(value: &str) -> bool {
    value.is_empty() || value == AUTO
}

/// Parse a span field; anything that is not a positive integer becomes 1.
pub fn parse_span(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => 1,
    }
}

/// Parse an explicit integer grid line.
pub fn parse_line(value: &str) -> Option<i64> {
    if is_auto_value(value) {
        return None;
    }
    value.trim().parse::<i64>().ok()
}

/// Sort key for a positional field: auto and non-numeric lines sort last.
pub fn line_sort_key(value: &str) -> f64 {
    if is_auto_value(value) {
        return f64::INFINITY;
    }
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => f64::INFINITY,
    }
}

/// Layout with every positional field `"auto"` and both spans 1.
pub fn create_empty_layout() -> ItemLayout {
    ItemLayout::default()
}

/// Empty layout at every breakpoint.
pub fn create_layout_map() -> LayoutMap {
    PerBreakpoint::from_fn(|_| create_empty_layout())
}

/// Independent copy of a layout map.
pub fn clone_layout_map(map: &LayoutMap) -> LayoutMap {
    map.clone()
}

/// Independent copy of a settings map; every track is copied with the same fields.
pub fn clone_grid_settings(map: &GridSettingsMap) -> GridSettingsMap {
    map.map(|_, setting| setting.clone())
}

/// Number of tracks an item occupies on `axis`.
///
/// Two explicit numeric lines give `end - start` (at least 1); otherwise the
/// span field applies.
pub fn effective_span(layout: &ItemLayout, axis: Axis) -> u32 {
    match (parse_line(layout.start(axis)), parse_line(layout.end(axis))) {
        (Some(start), Some(end)) => end.saturating_sub(start).clamp(1, u32::MAX as i64) as u32,
        _ => layout.span(axis).max(1),
    }
}

#[cfg(feature = "serde")]
pub use sanitize::{sanitize_grid_settings, sanitize_layout_map};

#[cfg(feature = "serde")]
mod sanitize {
    use serde_json::{Map, Value};

    use super::*;
    use crate::breakpoint::Breakpoint;
    use crate::types::{GridSetting, LayoutField, Track, TrackId, TrackUnit};

    /// Build a full layout map from untrusted input.
    ///
    /// Every breakpoint starts empty; only well-shaped fields found in `partial`
    /// override the defaults. Never fails.
    pub fn sanitize_layout_map(partial: Option<&Value>) -> LayoutMap {
        let source = partial.and_then(Value::as_object);
        PerBreakpoint::from_fn(|bp| {
            let mut layout = create_empty_layout();
            if let Some(entry) = breakpoint_entry(source, bp) {
                for field in LayoutField::ALL {
                    if let Some(raw) = entry.get(field.as_str()).and_then(|v| field_text(field, v)) {
                        layout.set_field(field, &raw);
                    }
                }
            }
            layout
        })
    }

    /// Build a full, synchronized settings map from untrusted input.
    ///
    /// Missing or malformed breakpoints fall back to the default setting. When a
    /// track list is present it decides the count for its axis.
    pub fn sanitize_grid_settings(partial: Option<&Value>) -> GridSettingsMap {
        let source = partial.and_then(Value::as_object);
        PerBreakpoint::from_fn(|bp| {
            let mut setting = GridSetting::default();
            let Some(entry) = breakpoint_entry(source, bp) else {
                return setting;
            };
            if let Some(cols) = entry.get("cols").and_then(positive_int) {
                setting.set_count(Axis::Column, cols);
            }
            if let Some(rows) = entry.get("rows").and_then(positive_int) {
                setting.set_count(Axis::Row, rows);
            }
            if let Some(gap) = entry.get("gap").and_then(Value::as_u64) {
                setting.gap = gap.min(u32::MAX as u64) as u32;
            }
            if let Some(tracks) = entry.get("colTracks").and_then(sanitize_tracks) {
                setting.set_tracks(Axis::Column, tracks);
            }
            if let Some(tracks) = entry.get("rowTracks").and_then(sanitize_tracks) {
                setting.set_tracks(Axis::Row, tracks);
            }
            setting
        })
    }

    fn breakpoint_entry(source: Option<&Map<String, Value>>, bp: Breakpoint) -> Option<&Map<String, Value>> {
        source?.get(bp.label())?.as_object()
    }

    fn field_text(field: LayoutField, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => {
                let n = n.as_f64()?;
                if field.is_span() && n < 1.0 {
                    return None;
                }
                Some(crate::types::format_number(n.trunc()))
            }
            _ => None,
        }
    }

    fn positive_int(value: &Value) -> Option<u32> {
        let n = value.as_u64()?;
        (n >= 1).then(|| n.min(u32::MAX as u64) as u32)
    }

    fn sanitize_tracks(value: &Value) -> Option<Vec<Track>> {
        let tracks: Vec<Track> = value
            .as_array()?
            .iter()
            .filter_map(Value::as_object)
            .map(|entry| {
                let unit = entry
                    .get("unit")
                    .and_then(Value::as_str)
                    .and_then(|s| s.parse::<TrackUnit>().ok())
                    .unwrap_or(TrackUnit::Fr);
                let value = entry
                    .get("value")
                    .and_then(Value::as_f64)
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .unwrap_or(1.0);
                let id = entry
                    .get("id")
                    .and_then(Value::as_str)
                    .map(TrackId::from)
                    .unwrap_or_else(TrackId::fresh);
                Track { id, value, unit }
            })
            .collect();
        (!tracks.is_empty()).then_some(tracks)
    }
}

//! Track size resolution.
//!
//! Turns the live track list of one axis into rendered pixel sizes for a
//! container of known size.

use gridkit_core::{Track, TrackUnit};

/// Pixels per `rem`.
pub const REM_PX: f64 = 16.0;

/// Pixels per spacing unit of the `gap` setting.
pub const SPACING_UNIT_PX: f64 = 4.0;

/// Gap setting in pixels.
pub fn gap_px(gap: u32) -> f64 {
    gap as f64 * SPACING_UNIT_PX
}

/// Resolve pixel sizes for a track list.
///
/// Fixed tracks (`px`, `rem`, `%`) are sized first. `fr` tracks share what is
/// left; content-sized tracks share the remainder only when no `fr` track
/// exists, and collapse to zero otherwise.
pub fn resolve_track_sizes(tracks: &[Track], available: f64, gap: f64) -> Vec<f64> {
    if tracks.is_empty() {
        return Vec::new();
    }

    let total_gap = gap * (tracks.len() - 1) as f64;
    let available_for_tracks = (available - total_gap).max(0.0);

    let mut fixed_total = 0.0_f64;
    let mut fraction_total = 0.0_f64;
    let mut auto_count = 0usize;

    for track in tracks {
        match fixed_size(track, available) {
            Some(size) => fixed_total += size,
            None if track.unit == TrackUnit::Fr => fraction_total += track.value.max(0.0),
            None => auto_count += 1,
        }
    }

    let remaining = (available_for_tracks - fixed_total).max(0.0);

    // Flex factors summing below 1 take only their share of the free space.
    let fr_unit = if fraction_total > 0.0 {
        remaining / fraction_total.max(1.0)
    } else {
        0.0
    };

    let auto_unit = if auto_count > 0 && fraction_total == 0.0 {
        remaining / auto_count as f64
    } else {
        0.0
    };

    tracks
        .iter()
        .map(|track| match fixed_size(track, available) {
            Some(size) => size,
            None if track.unit == TrackUnit::Fr => track.value.max(0.0) * fr_unit,
            None => auto_unit,
        })
        .collect()
}

fn fixed_size(track: &Track, available: f64) -> Option<f64> {
    let value = track.value.max(0.0);
    match track.unit {
        TrackUnit::Px => Some(value),
        TrackUnit::Rem => Some(value * REM_PX),
        TrackUnit::Percent => Some(available * value / 100.0),
        TrackUnit::Fr | TrackUnit::Auto | TrackUnit::MinContent | TrackUnit::MaxContent => None,
    }
}

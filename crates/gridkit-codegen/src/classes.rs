//! Utility class derivation for containers and items.

use gridkit_core::{is_auto_value, Axis, Breakpoint, GridSetting, GridSettingsMap, LayoutMap};

/// Template token for one axis: `grid-cols-3` when every track is `1fr`,
/// an arbitrary value such as `grid-cols-[1fr_200px_auto]` otherwise.
pub fn track_token(setting: &GridSetting, axis: Axis) -> String {
    let name = format!("grid-{}", axis.plural());
    if setting.is_uniform(axis) {
        format!("{}-{}", name, setting.count(axis))
    } else {
        let tracks: Vec<String> = setting.tracks(axis).iter().map(|t| t.css()).collect();
        format!("{}-[{}]", name, tracks.join("_"))
    }
}

/// Container classes across all breakpoints.
///
/// Columns, rows and gap are diffed independently: a token is emitted at a
/// breakpoint only when it differs from the token of the breakpoint below.
/// The base breakpoint always emits.
pub fn container_classes(settings: &GridSettingsMap) -> Vec<String> {
    let mut classes = Vec::new();
    let mut previous: [Option<String>; 3] = [None, None, None];

    for (bp, setting) in settings.iter() {
        let tokens = [
            track_token(setting, Axis::Column),
            track_token(setting, Axis::Row),
            format!("gap-{}", setting.gap),
        ];
        for (slot, token) in previous.iter_mut().zip(tokens) {
            if slot.as_deref() != Some(token.as_str()) {
                classes.push(format!("{}{}", bp.prefix(), token));
                *slot = Some(token);
            }
        }
    }

    classes
}

/// Item placement classes across all breakpoints.
///
/// Every breakpoint is emitted on its own terms, without diffing.
pub fn item_classes(layout: &LayoutMap) -> Vec<String> {
    let mut classes = Vec::new();

    for bp in Breakpoint::ALL {
        let entry = &layout[bp];
        let prefix = bp.prefix();

        for axis in [Axis::Column, Axis::Row] {
            let name = axis.singular();
            let start = entry.start(axis);
            let end = entry.end(axis);

            if !is_auto_value(start) {
                classes.push(format!("{}{}", prefix, value_token(&format!("{}-start", name), start)));
            }
            if !is_auto_value(end) {
                classes.push(format!("{}{}", prefix, value_token(&format!("{}-end", name), end)));
            } else if entry.span(axis) > 1 {
                classes.push(format!("{}{}-span-{}", prefix, name, entry.span(axis)));
            }
        }

        if !is_auto_value(&entry.order) {
            classes.push(format!("{}{}", prefix, value_token("order", &entry.order)));
        }
    }

    classes
}

/// `name-N` for a plain non-negative integer, `name-[value]` otherwise.
fn value_token(name: &str, value: &str) -> String {
    let value = value.trim();
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}", name, value)
    } else {
        let arbitrary: String = value
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        format!("{}-[{}]", name, arbitrary)
    }
}

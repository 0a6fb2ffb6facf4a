//! Named starting layouts.

use gridkit_core::{
    palette_color, Axis, Breakpoint, GridItem, GridSetting, GridSettingsMap, ItemId, ItemLayout,
    LayoutMap, PerBreakpoint, SubGrid, Track,
};
use gridkit_tree::reflow;
use indexmap::IndexMap;

use crate::state::EditorState;

/// A named layout that replaces the whole editor state when applied.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> EditorState,
}

impl Template {
    pub const fn new(name: &'static str, description: &'static str, build: fn() -> EditorState) -> Self {
        Self {
            name,
            description,
            build,
        }
    }

    /// Build a fresh state. Orders are reflowed at every breakpoint.
    pub fn build(&self) -> EditorState {
        let mut state = (self.build)();
        reflow_all(&mut state.items);
        state
    }
}

/// Templates in registration order.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: IndexMap<&'static str, Template>,
}

impl TemplateRegistry {
    pub fn empty() -> Self {
        Self {
            templates: IndexMap::new(),
        }
    }

    /// The built-in templates.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Template::new("blank", "Empty 4×4 grid", blank));
        registry.register(Template::new(
            "holy-grail",
            "Header, navigation, content, aside and footer",
            holy_grail,
        ));
        registry.register(Template::new(
            "dashboard",
            "Stat cards above a chart and a nested panel",
            dashboard,
        ));
        registry.register(Template::new(
            "gallery",
            "Auto-placed tiles, more columns on wider screens",
            gallery,
        ));
        registry.register(Template::new("sidebar", "Fixed-width sidebar beside content", sidebar));
        registry
    }

    /// Add or replace a template.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name, template);
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn reflow_all(items: &mut [GridItem]) {
    for bp in Breakpoint::ALL {
        reflow(items, bp);
    }
    for item in items.iter_mut() {
        if let Some(grid) = item.grid.as_mut() {
            reflow_all(&mut grid.children);
        }
    }
}

/// Explicit placement `(col, col_span, row, row_span)`, 1-based.
fn area(col: u32, col_span: u32, row: u32, row_span: u32) -> ItemLayout {
    ItemLayout {
        col_start: col.to_string(),
        col_end: (col + col_span).to_string(),
        row_start: row.to_string(),
        row_end: (row + row_span).to_string(),
        col_span,
        row_span,
        ..ItemLayout::default()
    }
}

fn item(id: u64, layout: LayoutMap) -> GridItem {
    GridItem::leaf(ItemId(id), palette_color(id as usize - 1)).with_layout(layout)
}

fn blank() -> EditorState {
    EditorState::default()
}

fn holy_grail() -> EditorState {
    let settings = GridSettingsMap::splat(GridSetting::new(4, 3, 4));
    let items = vec![
        item(1, LayoutMap::splat(area(1, 4, 1, 1))),
        item(2, LayoutMap::splat(area(1, 1, 2, 1))),
        item(3, LayoutMap::splat(area(2, 2, 2, 1))),
        item(4, LayoutMap::splat(area(4, 1, 2, 1))),
        item(5, LayoutMap::splat(area(1, 4, 3, 1))),
    ];
    EditorState::new(items, settings)
}

fn dashboard() -> EditorState {
    let settings = GridSettingsMap::splat(GridSetting::new(4, 3, 4));

    let mut items: Vec<GridItem> = (1..=4)
        .map(|n| item(n as u64, LayoutMap::splat(area(n, 1, 1, 1))))
        .collect();
    items.push(item(5, LayoutMap::splat(area(1, 3, 2, 2))));

    let mut panel = SubGrid::new(GridSettingsMap::splat(GridSetting::new(1, 2, 2)));
    panel.children = vec![
        item(7, LayoutMap::splat(area(1, 1, 1, 1))),
        item(8, LayoutMap::splat(area(1, 1, 2, 1))),
    ];
    items.push(item(6, LayoutMap::splat(area(4, 1, 2, 2))).with_grid(panel));

    EditorState::new(items, settings)
}

fn gallery() -> EditorState {
    let settings = PerBreakpoint::from_fn(|bp| {
        let cols = match bp {
            Breakpoint::Xs => 1,
            Breakpoint::Sm => 2,
            Breakpoint::Md => 3,
            _ => 4,
        };
        GridSetting::new(cols, 2, 4)
    });
    let items = (1..=8).map(|n| item(n, LayoutMap::default())).collect();
    EditorState::new(items, settings)
}

fn sidebar() -> EditorState {
    let mut setting = GridSetting::new(2, 1, 4);
    setting.set_tracks(Axis::Column, vec![Track::px(240.0), Track::fr(1.0)]);

    let mut nav = LayoutMap::splat(area(1, 1, 1, 1));
    let mut content = LayoutMap::splat(area(2, 1, 1, 1));
    // Stack on the smallest screens.
    nav.xs = area(1, 2, 1, 1);
    content.xs = area(1, 2, 2, 1);

    let mut settings = GridSettingsMap::splat(setting);
    settings.xs = GridSetting::new(1, 2, 4);

    EditorState::new(vec![item(1, nav), item(2, content)], settings)
}

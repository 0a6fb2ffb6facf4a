//! The editor facade.

use std::sync::Arc;

use glam::DVec2;
use gridkit_codegen::generate_code;
use gridkit_core::{
    effective_span, parse_track_list, Axis, Breakpoint, Direction, GridItem, GridSettingsMap, ItemId,
    LayoutField,
};
use gridkit_history::History;
use gridkit_io::{export_config, import_config};
use gridkit_layout::{Bounds, DragStart, DragSession, GridLevel, GridMetrics, GridSpan};
use gridkit_tree::{
    add_item, apply_layout_patch, contains_item, convert_to_grid, copy_from_neighbor,
    duplicate_item, find_item, find_parent, remove_item, update_grid_setting,
    update_item_grid_setting, update_item_layout_field, SettingUpdate,
};
use indexmap::IndexMap;

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::state::EditorState;
use crate::templates::TemplateRegistry;

/// An editing session over one layout.
pub struct Editor {
    history: History<EditorState>,
    breakpoint: Breakpoint,
    interactive: bool,
    sessions: IndexMap<GridLevel, DragSession>,
    templates: TemplateRegistry,
    config: EditorConfig,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_state(EditorState::default(), config)
    }

    /// Open an editor on an existing state, with empty history.
    pub fn with_state(state: EditorState, config: EditorConfig) -> Self {
        Self {
            history: History::with_config(state, config.history.clone()),
            breakpoint: config.breakpoint,
            interactive: config.interactive,
            sessions: IndexMap::new(),
            templates: TemplateRegistry::builtin(),
            config,
        }
    }

    pub fn state(&self) -> &EditorState {
        self.history.present()
    }

    pub fn items(&self) -> &[GridItem] {
        &self.state().items
    }

    pub fn grid_settings(&self) -> &GridSettingsMap {
        &self.state().grid_settings
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn templates_mut(&mut self) -> &mut TemplateRegistry {
        &mut self.templates
    }

    // ------------------------------------------------------------------
    // View state (not recorded in history)
    // ------------------------------------------------------------------

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Switch the active breakpoint. Running drags are cancelled.
    pub fn set_breakpoint(&mut self, bp: Breakpoint) {
        if bp != self.breakpoint {
            self.cancel_all_drags();
            self.breakpoint = bp;
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Allow or forbid pointer sessions. Forbidding cancels running drags.
    pub fn set_interactive(&mut self, interactive: bool) {
        if !interactive {
            self.cancel_all_drags();
        }
        self.interactive = interactive;
    }

    // ------------------------------------------------------------------
    // Tree edits
    // ------------------------------------------------------------------

    /// Add a leaf to the root grid or to a container's sub-grid.
    pub fn add_item(&mut self, parent: Option<ItemId>) -> Option<ItemId> {
        let (items, id) = add_item(self.items(), parent, self.breakpoint)?;
        self.commit_items("add_item", Some(id), items);
        Some(id)
    }

    /// Remove an item and its whole subtree.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let Some(items) = remove_item(self.items(), id) else {
            return false;
        };
        self.commit_items("remove_item", Some(id), items);
        true
    }

    /// Duplicate an item next to the end of its sibling list.
    pub fn duplicate_item(&mut self, id: ItemId) -> Option<ItemId> {
        let (items, copy) = duplicate_item(self.items(), id, self.breakpoint)?;
        self.commit_items("duplicate_item", Some(copy), items);
        Some(copy)
    }

    /// Give a leaf its own sub-grid.
    pub fn convert_to_grid(&mut self, id: ItemId) -> bool {
        let Some(items) = convert_to_grid(self.items(), id) else {
            return false;
        };
        self.commit_items("convert_to_grid", Some(id), items);
        true
    }

    /// Write one layout field at the active breakpoint.
    pub fn update_layout_field(&mut self, id: ItemId, field: LayoutField, raw: &str) -> bool {
        let Some(items) = update_item_layout_field(self.items(), id, self.breakpoint, field, raw)
        else {
            return false;
        };
        self.commit_items("update_layout_field", Some(id), items)
    }

    /// Update one grid setting at the active breakpoint, on the root grid
    /// (`scope == None`) or on a container's sub-grid.
    pub fn update_grid_setting(&mut self, scope: Option<ItemId>, update: SettingUpdate) -> bool {
        let bp = self.breakpoint;
        let state = self.state();
        let next = match scope {
            None => EditorState::new(
                state.items.clone(),
                update_grid_setting(&state.grid_settings, bp, update),
            ),
            Some(id) => match update_item_grid_setting(&state.items, id, bp, update) {
                Some(items) => EditorState::new(items, state.grid_settings.clone()),
                None => return false,
            },
        };
        self.commit("update_grid_setting", scope, next)
    }

    /// Replace the column or row tracks of the active breakpoint from a
    /// typed list such as `1fr 200px auto`. The count follows the list.
    pub fn update_tracks(&mut self, scope: Option<ItemId>, axis: Axis, input: &str) -> Result<bool> {
        let tracks = parse_track_list(input)?;
        let update = match axis {
            Axis::Column => SettingUpdate::ColTracks(tracks),
            Axis::Row => SettingUpdate::RowTracks(tracks),
        };
        Ok(self.update_grid_setting(scope, update))
    }

    /// Copy settings and layouts into the active breakpoint from its
    /// neighbor in `direction`.
    pub fn copy_from_neighbor(&mut self, direction: Direction) -> bool {
        let state = self.state();
        let Some((settings, items)) =
            copy_from_neighbor(&state.grid_settings, &state.items, self.breakpoint, direction)
        else {
            return false;
        };
        self.commit("copy_from_neighbor", None, EditorState::new(items, settings))
    }

    /// Remove every item once `confirm` agrees. Settings are kept and the
    /// change can be undone.
    pub fn clear_all(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if self.items().is_empty() || !confirm() {
            return false;
        }
        self.commit_items("clear_all", None, Vec::new())
    }

    // ------------------------------------------------------------------
    // Whole-state replacement
    // ------------------------------------------------------------------

    /// Replace the state with a named template and clear history.
    pub fn apply_template(&mut self, name: &str) -> Result<()> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| EditorError::UnknownTemplate(name.to_string()))?;
        let state = template.build();
        tracing::debug!(template = name, "applied template");
        self.replace(state);
        Ok(())
    }

    /// Replace the state with an imported configuration and clear history.
    ///
    /// On failure the state is untouched.
    pub fn import_config(&mut self, input: &str) -> Result<()> {
        let config = import_config(input).map_err(|err| {
            tracing::warn!(error = %err, "rejected configuration import");
            err
        })?;
        self.replace(EditorState::new(config.items, config.grid_settings));
        Ok(())
    }

    pub fn export_config(&self) -> Result<String> {
        Ok(export_config(self.items(), self.grid_settings())?)
    }

    pub fn generate_code(&self) -> String {
        generate_code(self.items(), self.grid_settings(), &self.config.codegen)
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            self.prune_sessions();
        }
        moved
    }

    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            self.prune_sessions();
        }
        moved
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ------------------------------------------------------------------
    // Drag sessions
    // ------------------------------------------------------------------

    /// Start dragging an item of `level`.
    ///
    /// Rejected when the editor is not interactive, the breakpoint is not the
    /// active one, or the item does not live directly in `level`. The span is
    /// taken from the item's stored layout, not from `start`.
    pub fn begin_drag(&mut self, level: GridLevel, mut start: DragStart, metrics: &GridMetrics) -> bool {
        if start.breakpoint != self.breakpoint
            || find_parent(self.items(), start.item) != Some(level.parent())
        {
            return false;
        }
        let Some(item) = find_item(self.items(), start.item) else {
            return false;
        };
        let layout = &item.layout[start.breakpoint];
        start.span = GridSpan::new(effective_span(layout, Axis::Column), effective_span(layout, Axis::Row));
        self.sessions
            .entry(level)
            .or_default()
            .begin(start, metrics, self.interactive)
    }

    /// Feed a pointer move; returns the preview rectangle.
    pub fn update_drag(&mut self, level: GridLevel, pointer: DVec2, metrics: &GridMetrics) -> Option<Bounds> {
        self.sessions.get_mut(&level)?.update(pointer, metrics)
    }

    /// Finish the session of `level`, writing its candidate as one history
    /// step. Returns false when nothing changed.
    pub fn commit_drag(&mut self, level: GridLevel) -> bool {
        let Some(commit) = self.sessions.get_mut(&level).and_then(DragSession::commit) else {
            return false;
        };
        let Some(item) = find_item(self.items(), commit.item) else {
            return false;
        };
        let patch = commit.patch(&item.layout[commit.breakpoint]);
        let Some(items) = apply_layout_patch(self.items(), commit.item, commit.breakpoint, &patch)
        else {
            return false;
        };
        self.commit_items("commit_drag", Some(commit.item), items)
    }

    /// Pixel metrics of `level` at the active breakpoint for a rendered
    /// container of `width` × `height`.
    pub fn grid_metrics(&self, level: GridLevel, width: f64, height: f64) -> Option<GridMetrics> {
        let settings = match level.parent() {
            None => self.grid_settings(),
            Some(id) => &find_item(self.items(), id)?.grid.as_ref()?.settings,
        };
        Some(GridMetrics::resolve(&settings[self.breakpoint], width, height))
    }

    pub fn cancel_drag(&mut self, level: GridLevel) {
        if let Some(session) = self.sessions.get_mut(&level) {
            session.cancel();
        }
    }

    pub fn drag_indicator(&self, level: GridLevel) -> Option<Bounds> {
        self.sessions.get(&level)?.indicator()
    }

    pub fn is_dragging(&self) -> bool {
        self.sessions.values().any(DragSession::is_active)
    }

    fn cancel_all_drags(&mut self) {
        for session in self.sessions.values_mut() {
            session.cancel();
        }
    }

    /// Drop sessions whose grid or item no longer exists.
    fn prune_sessions(&mut self) {
        let items = &self.history.present().items;
        self.sessions.retain(|level, session| {
            let level_alive = level.parent().map_or(true, |id| contains_item(items, id));
            let item_alive = session.item().map_or(true, |id| contains_item(items, id));
            level_alive && item_alive
        });
    }

    // ------------------------------------------------------------------
    // Commit helpers
    // ------------------------------------------------------------------

    fn commit_items(&mut self, op: &'static str, item: Option<ItemId>, items: Vec<GridItem>) -> bool {
        let settings = self.grid_settings().clone();
        self.commit(op, item, EditorState::new(items, settings))
    }

    /// Push `next` as one history step unless it equals the present state.
    fn commit(&mut self, op: &'static str, item: Option<ItemId>, next: EditorState) -> bool {
        if next == **self.history.present() {
            return false;
        }
        self.history.set(Arc::new(next));
        self.prune_sessions();
        tracing::debug!(
            op,
            item = item.map(|id| id.0),
            breakpoint = %self.breakpoint,
            "committed edit"
        );
        true
    }

    fn replace(&mut self, state: EditorState) {
        self.sessions.clear();
        self.history.reset(Arc::new(state));
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridkit_core::{Track, TrackParseError};
    use gridkit_history::HistoryConfig;
    use gridkit_layout::{DragMode, GridCoord};
    use proptest::prelude::*;

    fn editor_with_items(n: usize) -> (Editor, Vec<ItemId>) {
        let mut editor = Editor::default();
        let ids = (0..n).map(|_| editor.add_item(None).unwrap()).collect();
        (editor, ids)
    }

    fn metrics() -> GridMetrics {
        let setting = gridkit_core::GridSetting::new(4, 4, 0);
        GridMetrics::resolve(&setting, 400.0, 400.0)
    }

    fn move_start(item: ItemId) -> DragStart {
        DragStart {
            item,
            breakpoint: Breakpoint::Xs,
            mode: DragMode::Move,
            origin: GridCoord::new(1, 1),
            span: GridSpan::new(1, 1),
            size: DVec2::new(100.0, 100.0),
            pointer: DVec2::new(50.0, 50.0),
        }
    }

    #[test]
    fn test_add_pushes_history() {
        let (mut editor, ids) = editor_with_items(2);
        assert_eq!(ids, vec![ItemId(1), ItemId(2)]);
        assert!(editor.can_undo());
        assert!(editor.undo());
        assert_eq!(editor.items().len(), 1);
        assert!(editor.redo());
        assert_eq!(editor.items().len(), 2);
    }

    #[test]
    fn test_lookup_miss_leaves_history_alone() {
        let (mut editor, _) = editor_with_items(1);
        assert!(editor.undo());
        assert!(!editor.remove_item(ItemId(42)));
        assert!(editor.add_item(Some(ItemId(42))).is_none());
        assert!(!editor.update_layout_field(ItemId(42), LayoutField::ColSpan, "2"));
        assert!(editor.can_redo());
    }

    #[test]
    fn test_no_op_edit_is_not_recorded() {
        let (mut editor, ids) = editor_with_items(1);
        assert!(editor.update_layout_field(ids[0], LayoutField::ColSpan, "2"));
        assert!(!editor.update_layout_field(ids[0], LayoutField::ColSpan, "2"));
        assert!(editor.undo());
        assert_eq!(editor.items()[0].layout.xs.col_span, 1);
    }

    #[test]
    fn test_edits_target_active_breakpoint() {
        let (mut editor, ids) = editor_with_items(1);
        editor.set_breakpoint(Breakpoint::Lg);
        assert!(editor.update_layout_field(ids[0], LayoutField::RowSpan, "3"));
        assert_eq!(editor.items()[0].layout.lg.row_span, 3);
        assert_eq!(editor.items()[0].layout.xs.row_span, 1);
    }

    #[test]
    fn test_update_grid_setting_scopes() {
        let (mut editor, ids) = editor_with_items(1);
        assert!(editor.update_grid_setting(None, SettingUpdate::Cols(6)));
        assert_eq!(editor.grid_settings().xs.cols, 6);

        assert!(!editor.update_grid_setting(Some(ids[0]), SettingUpdate::Gap(1)));
        assert!(editor.convert_to_grid(ids[0]));
        assert!(editor.update_grid_setting(Some(ids[0]), SettingUpdate::Gap(1)));
        let grid = editor.items()[0].grid.as_ref().unwrap();
        assert_eq!(grid.settings.xs.gap, 1);
        assert_eq!(editor.grid_settings().xs.gap, 4);
    }

    #[test]
    fn test_copy_from_neighbor() {
        let (mut editor, _) = editor_with_items(1);
        editor.set_breakpoint(Breakpoint::Sm);
        assert!(editor.update_grid_setting(None, SettingUpdate::Rows(2)));
        editor.set_breakpoint(Breakpoint::Md);
        assert!(editor.copy_from_neighbor(Direction::Smaller));
        assert_eq!(editor.grid_settings().md.rows, 2);

        editor.set_breakpoint(Breakpoint::Xs);
        assert!(!editor.copy_from_neighbor(Direction::Smaller));
    }

    #[test]
    fn test_clear_all_requires_confirmation() {
        let (mut editor, _) = editor_with_items(3);
        assert!(!editor.clear_all(|| false));
        assert_eq!(editor.items().len(), 3);

        assert!(editor.clear_all(|| true));
        assert!(editor.items().is_empty());
        assert!(editor.undo());
        assert_eq!(editor.items().len(), 3);
    }

    #[test]
    fn test_template_resets_history() {
        let (mut editor, _) = editor_with_items(2);
        editor.apply_template("holy-grail").unwrap();
        assert_eq!(editor.items().len(), 5);
        assert!(!editor.can_undo());
        assert!(!editor.can_redo());

        assert!(matches!(
            editor.apply_template("nope"),
            Err(EditorError::UnknownTemplate(name)) if name == "nope"
        ));
        assert_eq!(editor.items().len(), 5);
    }

    #[test]
    fn test_import_failure_keeps_state() {
        let (mut editor, _) = editor_with_items(2);
        assert!(editor.import_config(r#"{"items": []}"#).is_err());
        assert_eq!(editor.items().len(), 2);
        assert!(editor.can_undo());
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut editor = Editor::default();
        editor.apply_template("dashboard").unwrap();
        let json = editor.export_config().unwrap();

        let mut other = Editor::default();
        other.import_config(&json).unwrap();
        assert_eq!(other.state(), editor.state());
        assert!(!other.can_undo());
        assert_eq!(other.generate_code(), editor.generate_code());
    }

    #[test]
    fn test_drag_commit_is_single_history_step() {
        let (mut editor, ids) = editor_with_items(1);
        let metrics = metrics();
        assert!(editor.begin_drag(GridLevel::Root, move_start(ids[0]), &metrics));
        assert!(editor.is_dragging());

        let preview = editor.update_drag(GridLevel::Root, DVec2::new(250.0, 150.0), &metrics);
        assert!(preview.is_some());
        assert!(editor.commit_drag(GridLevel::Root));
        assert!(!editor.is_dragging());

        let layout = &editor.items()[0].layout.xs;
        assert_eq!(layout.start(Axis::Column), "3");
        assert_eq!(layout.end(Axis::Column), "4");
        assert_eq!(layout.start(Axis::Row), "2");

        assert!(editor.undo());
        assert_eq!(editor.items()[0].layout.xs.start(Axis::Column), "auto");
    }

    #[test]
    fn test_drag_uses_stored_span() {
        let (mut editor, ids) = editor_with_items(1);
        assert!(editor.update_layout_field(ids[0], LayoutField::ColSpan, "2"));
        let metrics = metrics();
        // start claims a 1x1 item
        assert!(editor.begin_drag(GridLevel::Root, move_start(ids[0]), &metrics));
        editor.update_drag(GridLevel::Root, DVec2::new(150.0, 50.0), &metrics);
        assert!(editor.commit_drag(GridLevel::Root));

        let layout = &editor.items()[0].layout.xs;
        assert_eq!(layout.start(Axis::Column), "2");
        assert_eq!(layout.end(Axis::Column), "4");
        assert_eq!(effective_span(layout, Axis::Column), 2);
    }

    #[test]
    fn test_sub_grid_drag_commits_once() {
        let (mut editor, ids) = editor_with_items(2);
        let container = ids[0];
        assert!(editor.convert_to_grid(container));
        let first = editor.add_item(Some(container)).unwrap();
        let second = editor.add_item(Some(container)).unwrap();
        let level = GridLevel::SubGrid(container);
        let before = editor.state().clone();

        // sub-grid default is 2x2; gaps make each cell 96px at 200px
        let metrics = editor.grid_metrics(level, 200.0, 200.0).unwrap();
        let start = DragStart {
            size: DVec2::new(96.0, 96.0),
            pointer: DVec2::new(48.0, 48.0),
            ..move_start(first)
        };
        assert!(!editor.begin_drag(GridLevel::Root, start.clone(), &metrics));
        assert!(editor.begin_drag(level, start, &metrics));
        assert!(editor.update_drag(level, DVec2::new(150.0, 150.0), &metrics).is_some());
        assert!(editor.commit_drag(level));

        let children = editor.items()[0].children();
        let moved = &children[0].layout.xs;
        assert_eq!(moved.start(Axis::Column), "2");
        assert_eq!(moved.start(Axis::Row), "2");
        assert_eq!(find_item(editor.items(), second), find_item(&before.items, second));
        assert_eq!(editor.items()[0].layout, before.items[0].layout);
        assert_eq!(editor.items()[1], before.items[1]);
        assert_eq!(editor.grid_settings(), &before.grid_settings);

        assert!(editor.undo());
        assert_eq!(editor.state(), &before);
        assert!(editor.undo());
        assert_ne!(editor.state(), &before);
    }

    #[test]
    fn test_update_tracks_from_text() {
        let (mut editor, ids) = editor_with_items(1);
        assert!(editor.update_tracks(None, Axis::Column, "1fr 200px auto").unwrap());
        let xs = &editor.grid_settings().xs;
        assert_eq!(xs.cols, 3);
        assert_eq!(xs.col_tracks.iter().map(Track::css).collect::<Vec<_>>(), vec!["1fr", "200px", "auto"]);

        assert!(editor.convert_to_grid(ids[0]));
        assert!(editor.update_tracks(Some(ids[0]), Axis::Row, "2fr 1fr 1fr").unwrap());
        let grid = editor.items()[0].grid.as_ref().unwrap();
        assert_eq!(grid.settings.xs.rows, 3);
        assert_eq!(editor.grid_settings().xs.rows, 4);
    }

    #[test]
    fn test_update_tracks_rejects_bad_text() {
        let (mut editor, _) = editor_with_items(1);
        let before = editor.state().clone();
        assert!(matches!(
            editor.update_tracks(None, Axis::Column, "   "),
            Err(EditorError::Tracks(TrackParseError::Empty))
        ));
        assert!(matches!(
            editor.update_tracks(None, Axis::Column, "1fr wide"),
            Err(EditorError::Tracks(TrackParseError::InvalidTrack { position: 1, .. }))
        ));
        assert_eq!(editor.state(), &before);
        assert!(!editor.update_tracks(Some(ItemId(42)), Axis::Row, "1fr").unwrap());
    }

    #[test]
    fn test_drag_rejections() {
        let (mut editor, ids) = editor_with_items(1);
        let metrics = metrics();

        assert!(!editor.begin_drag(GridLevel::SubGrid(ids[0]), move_start(ids[0]), &metrics));

        editor.set_interactive(false);
        assert!(!editor.begin_drag(GridLevel::Root, move_start(ids[0]), &metrics));

        editor.set_interactive(true);
        editor.set_breakpoint(Breakpoint::Md);
        assert!(!editor.begin_drag(GridLevel::Root, move_start(ids[0]), &metrics));
    }

    #[test]
    fn test_grid_metrics_per_level() {
        let (mut editor, ids) = editor_with_items(1);
        let root = editor.grid_metrics(GridLevel::Root, 400.0, 400.0).unwrap();
        assert_eq!(root.total_cols(), 4);

        assert!(editor.grid_metrics(GridLevel::SubGrid(ids[0]), 100.0, 100.0).is_none());
        assert!(editor.convert_to_grid(ids[0]));
        let nested = editor.grid_metrics(GridLevel::SubGrid(ids[0]), 100.0, 100.0).unwrap();
        assert_eq!(nested.total_cols(), 2);
    }

    #[test]
    fn test_cancelled_drag_leaves_tree() {
        let (mut editor, ids) = editor_with_items(1);
        let before = editor.state().clone();
        let metrics = metrics();
        assert!(editor.begin_drag(GridLevel::Root, move_start(ids[0]), &metrics));
        editor.update_drag(GridLevel::Root, DVec2::new(350.0, 350.0), &metrics);
        editor.cancel_drag(GridLevel::Root);
        assert!(!editor.commit_drag(GridLevel::Root));
        assert_eq!(editor.state(), &before);
    }

    #[test]
    fn test_removing_dragged_item_drops_session() {
        let (mut editor, ids) = editor_with_items(2);
        let metrics = metrics();
        assert!(editor.begin_drag(GridLevel::Root, move_start(ids[0]), &metrics));
        assert!(editor.remove_item(ids[0]));
        assert!(!editor.is_dragging());
        assert!(editor.drag_indicator(GridLevel::Root).is_none());
    }

    proptest! {
        #[test]
        fn prop_undo_everything_restores_start(ops in proptest::collection::vec(0u8..5, 1..24)) {
            let config = EditorConfig {
                history: HistoryConfig::unlimited(),
                ..EditorConfig::default()
            };
            let mut editor = Editor::new(config);
            let initial = editor.state().clone();

            for (step, op) in ops.iter().enumerate() {
                let target = ItemId(step as u64 % 3 + 1);
                match *op {
                    0 => { editor.add_item(None); }
                    1 => { editor.remove_item(target); }
                    2 => { editor.duplicate_item(target); }
                    3 => { editor.convert_to_grid(target); }
                    _ => { editor.update_layout_field(target, LayoutField::ColSpan, "2"); }
                }
            }

            while editor.undo() {}
            prop_assert_eq!(editor.state(), &initial);
        }
    }
}

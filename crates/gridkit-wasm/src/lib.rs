//! WebAssembly bindings for the gridkit layout editor.
//!
//! ## Example
//!
//! ```js
//! import { GridEditor } from 'gridkit';
//!
//! const editor = new GridEditor({ codegen: { flavor: 'jsx' } });
//!
//! const id = editor.addItem();
//! editor.updateLayoutField(id, 'colSpan', '2');
//! editor.setBreakpoint('md');
//! editor.updateGridSetting(undefined, { key: 'cols', value: 6 });
//! editor.updateTracks(undefined, 'rows', '64px 1fr auto');
//!
//! const code = editor.generateCode();
//! const json = editor.exportConfig();
//! const { ok, error } = editor.importConfig(json);
//! ```

use glam::DVec2;
use gridkit_editor::{Editor, EditorConfig};
use gridkit_tree::SettingUpdate;
use wasm_bindgen::prelude::*;

mod types;

pub use types::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// The editor interface for JavaScript.
#[wasm_bindgen]
pub struct GridEditor {
    editor: Editor,
}

#[wasm_bindgen]
impl GridEditor {
    /// Create an editor. `config` may be omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GridEditor, JsError> {
        let config: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsError::new(&format!("Invalid editor config: {}", e)))?
        };
        Ok(Self {
            editor: Editor::new(config),
        })
    }

    /// Get the version of the editor.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Current items and root grid settings.
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.editor.state())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(getter)]
    pub fn breakpoint(&self) -> String {
        self.editor.breakpoint().label().to_string()
    }

    #[wasm_bindgen(js_name = setBreakpoint)]
    pub fn set_breakpoint(&mut self, name: &str) -> Result<(), JsError> {
        let bp = parse_breakpoint(name).map_err(|e| JsError::new(&e))?;
        self.editor.set_breakpoint(bp);
        Ok(())
    }

    #[wasm_bindgen(js_name = setInteractive)]
    pub fn set_interactive(&mut self, interactive: bool) {
        self.editor.set_interactive(interactive);
    }

    // ------------------------------------------------------------------
    // Tree edits
    // ------------------------------------------------------------------

    /// Add an item; returns its id, or `undefined` when `parent` is unknown.
    #[wasm_bindgen(js_name = addItem)]
    pub fn add_item(&mut self, parent: Option<f64>) -> Option<f64> {
        self.editor
            .add_item(parent.map(item_id))
            .map(|id| id.0 as f64)
    }

    #[wasm_bindgen(js_name = removeItem)]
    pub fn remove_item(&mut self, id: f64) -> bool {
        self.editor.remove_item(item_id(id))
    }

    #[wasm_bindgen(js_name = duplicateItem)]
    pub fn duplicate_item(&mut self, id: f64) -> Option<f64> {
        self.editor.duplicate_item(item_id(id)).map(|id| id.0 as f64)
    }

    #[wasm_bindgen(js_name = convertToGrid)]
    pub fn convert_to_grid(&mut self, id: f64) -> bool {
        self.editor.convert_to_grid(item_id(id))
    }

    /// Write one layout field (`colStart`, `rowSpan`, `order`, ...) at the
    /// active breakpoint.
    #[wasm_bindgen(js_name = updateLayoutField)]
    pub fn update_layout_field(&mut self, id: f64, field: &str, value: &str) -> Result<bool, JsError> {
        let field = parse_field(field).map_err(|e| JsError::new(&e))?;
        Ok(self.editor.update_layout_field(item_id(id), field, value))
    }

    /// Apply `{ key, value }` to the root grid or to a container's sub-grid.
    #[wasm_bindgen(js_name = updateGridSetting)]
    pub fn update_grid_setting(&mut self, scope: Option<f64>, update: JsValue) -> Result<bool, JsError> {
        let update: SettingUpdate = serde_wasm_bindgen::from_value(update)
            .map_err(|e| JsError::new(&format!("Invalid setting update: {}", e)))?;
        Ok(self.editor.update_grid_setting(scope.map(item_id), update))
    }

    /// Replace `"cols"` or `"rows"` tracks from text such as `1fr 200px auto`.
    #[wasm_bindgen(js_name = updateTracks)]
    pub fn update_tracks(&mut self, scope: Option<f64>, axis: &str, text: &str) -> Result<bool, JsError> {
        let axis = parse_axis(axis).map_err(|e| JsError::new(&e))?;
        self.editor
            .update_tracks(scope.map(item_id), axis, text)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Copy from the `"smaller"` or `"larger"` neighbor breakpoint.
    #[wasm_bindgen(js_name = copyFromNeighbor)]
    pub fn copy_from_neighbor(&mut self, direction: &str) -> Result<bool, JsError> {
        let direction = parse_direction(direction).map_err(|e| JsError::new(&e))?;
        Ok(self.editor.copy_from_neighbor(direction))
    }

    /// Remove every item if `confirm()` returns a truthy value.
    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self, confirm: &js_sys::Function) -> bool {
        self.editor.clear_all(|| {
            confirm
                .call0(&JsValue::NULL)
                .map(|answer| answer.is_truthy())
                .unwrap_or(false)
        })
    }

    // ------------------------------------------------------------------
    // Templates, import and export
    // ------------------------------------------------------------------

    #[wasm_bindgen(js_name = templateNames)]
    pub fn template_names(&self) -> Vec<String> {
        self.editor.templates().names().map(|s| s.to_string()).collect()
    }

    #[wasm_bindgen(js_name = applyTemplate)]
    pub fn apply_template(&mut self, name: &str) -> Result<(), JsError> {
        self.editor
            .apply_template(name)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Replace the state with a configuration document.
    ///
    /// Returns `{ ok, error }`; a rejected document leaves the state unchanged.
    #[wasm_bindgen(js_name = importConfig)]
    pub fn import_config(&mut self, json: &str) -> Result<JsValue, JsError> {
        let report = ImportReport::from_result(self.editor.import_config(json));
        serde_wasm_bindgen::to_value(&report)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = exportConfig)]
    pub fn export_config(&self) -> Result<String, JsError> {
        self.editor
            .export_config()
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = generateCode)]
    pub fn generate_code(&self) -> String {
        self.editor.generate_code()
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        self.editor.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.editor.redo()
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.editor.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.editor.can_redo()
    }

    // ------------------------------------------------------------------
    // Drag sessions
    // ------------------------------------------------------------------

    /// Start a move or resize. `width`/`height` are the rendered size of the
    /// grid container the item lives in.
    #[wasm_bindgen(js_name = beginDrag)]
    pub fn begin_drag(&mut self, start: JsValue, width: f64, height: f64) -> Result<bool, JsError> {
        let start: DragStartJs = serde_wasm_bindgen::from_value(start)
            .map_err(|e| JsError::new(&format!("Invalid drag start: {}", e)))?;
        let (level, start) = start.into_core(self.editor.breakpoint());
        let Some(metrics) = self.editor.grid_metrics(level, width, height) else {
            return Ok(false);
        };
        Ok(self.editor.begin_drag(level, start, &metrics))
    }

    /// Feed a pointer move; returns the preview rectangle or `null`.
    #[wasm_bindgen(js_name = updateDrag)]
    pub fn update_drag(
        &mut self,
        parent: Option<f64>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<JsValue, JsError> {
        let level = level(parent);
        let indicator = self
            .editor
            .grid_metrics(level, width, height)
            .and_then(|metrics| self.editor.update_drag(level, DVec2::new(x, y), &metrics));
        serde_wasm_bindgen::to_value(&indicator)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = commitDrag)]
    pub fn commit_drag(&mut self, parent: Option<f64>) -> bool {
        self.editor.commit_drag(level(parent))
    }

    #[wasm_bindgen(js_name = cancelDrag)]
    pub fn cancel_drag(&mut self, parent: Option<f64>) {
        self.editor.cancel_drag(level(parent));
    }
}

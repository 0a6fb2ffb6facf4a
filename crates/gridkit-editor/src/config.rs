//! Editor configuration.

use gridkit_codegen::CodegenOptions;
use gridkit_core::Breakpoint;
use gridkit_history::HistoryConfig;
use serde::{Deserialize, Serialize};

/// Configuration for an [`Editor`](crate::Editor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    pub history: HistoryConfig,
    pub codegen: CodegenOptions,
    /// Breakpoint selected when the editor opens
    pub breakpoint: Breakpoint,
    /// Whether pointer sessions may start
    pub interactive: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            codegen: CodegenOptions::default(),
            breakpoint: Breakpoint::Xs,
            interactive: true,
        }
    }
}

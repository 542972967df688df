use crate::undo_stack::DEFAULT_HISTORY_LIMIT;
use formcraft_schema::DEFAULT_GRID_COLUMNS;
use serde::{Deserialize, Serialize};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorOptions {
    /// Snapshots kept by the undo stack
    pub history_limit: usize,

    /// Columns for a new grid when none are requested
    pub default_grid_columns: u8,

    /// Fixed prefix for generated IDs (random per session when unset)
    pub id_seed: Option<String>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_grid_columns: DEFAULT_GRID_COLUMNS,
            id_seed: None,
        }
    }
}

impl EditorOptions {
    pub fn with_id_seed(mut self, seed: impl Into<String>) -> Self {
        self.id_seed = Some(seed.into());
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

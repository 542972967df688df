use formcraft_editor::{EditorOptions, DEFAULT_HISTORY_LIMIT};
use formcraft_schema::DEFAULT_GRID_COLUMNS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "formcraft.config.json";

/// Formcraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding *.form.json files
    #[serde(default = "default_forms_dir")]
    pub forms_dir: String,

    /// Undo levels kept while applying scripts
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Columns for grids added without an explicit count
    #[serde(default = "default_grid_columns")]
    pub default_grid_columns: u8,
}

fn default_forms_dir() -> String {
    "forms".to_string()
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_grid_columns() -> u8 {
    DEFAULT_GRID_COLUMNS
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the forms directory
    pub fn get_forms_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.forms_dir)
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            history_limit: self.history_limit,
            default_grid_columns: self.default_grid_columns,
            ..EditorOptions::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            forms_dir: default_forms_dir(),
            history_limit: default_history_limit(),
            default_grid_columns: default_grid_columns(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "formsDir": "src/forms",
            "historyLimit": 10,
            "defaultGridColumns": 3
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.forms_dir, "src/forms");
        assert_eq!(config.editor_options().history_limit, 10);
        assert_eq!(config.editor_options().default_grid_columns, 3);
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.forms_dir, "forms");
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.default_grid_columns, 2);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }
}

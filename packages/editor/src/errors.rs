//! Error types for the editor

use formcraft_schema::SchemaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Invalid command script: {0}")]
    Script(#[source] serde_json::Error),
}

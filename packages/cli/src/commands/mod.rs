pub mod apply;
pub mod init;
pub mod inspect;
pub mod validate;

pub use apply::{apply, ApplyArgs};
pub use init::{init, InitArgs};
pub use inspect::{inspect, InspectArgs};
pub use validate::{validate, ValidateArgs};

use anyhow::{Context, Result};
use formcraft_schema::Schema;
use std::path::Path;

/// Read and parse a schema file
pub(crate) fn load_schema(path: &Path) -> Result<Schema> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    Schema::from_json(&source).with_context(|| format!("Invalid form schema in {}", path.display()))
}

//! # Formcraft Schema
//!
//! Data model for form documents: the element tree, per-type attributes,
//! form settings and page bindings, plus JSON round-tripping.
//!
//! ```rust,ignore
//! use formcraft_schema::Schema;
//!
//! let schema = Schema::from_json(&std::fs::read_to_string("contact.form.json")?)?;
//! schema.check_structure()?;
//! println!("{} has {} elements", schema.name, schema.element_count());
//! ```

mod defaults;
mod element;
mod error;
mod id_generator;
mod schema;

pub use defaults::{fallback_label, resolve_defaults, BuiltinDefaults, DefaultsRegistry, ElementDefaults};
pub use element::{
    Element, ElementId, ElementKind, ElementPatch, ElementType, DEFAULT_GRID_COLUMNS,
    GRID_SPAN_TOTAL, MAX_GRID_COLUMNS, MAX_HEADING_LEVEL,
};
pub use error::SchemaError;
pub use id_generator::{get_schema_id, IdGenerator};
pub use schema::{
    FormSettings, Page, PageId, Schema, SettingsPatch, DEFAULT_SUBMIT_TEXT,
    DEFAULT_SUCCESS_MESSAGE,
};

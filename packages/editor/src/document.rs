//! # Form Document
//!
//! The live, editable form: metadata, the arena element tree and settings.
//! This is also the snapshot type kept by the undo stack, so cloning it is
//! the copy-on-snapshot step.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Check → Edit → Snapshot → Export
//!   ↓      ↓       ↓        ↓         ↓
//! JSON  Schema  Tree ops  History   Schema
//! ```

use crate::pages;
use crate::tree::ElementTree;
use crate::EditorError;
use chrono::{DateTime, Utc};
use formcraft_schema::{FormSettings, Schema};

/// Editable form document
#[derive(Debug, Clone, PartialEq)]
pub struct FormDocument {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tree: ElementTree,
    pub settings: FormSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FormDocument {
    /// Empty document with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_parts(Schema::new(name), ElementTree::new())
    }

    /// Load from a schema, rejecting duplicate IDs and repairing page
    /// references that do not point at root elements
    pub fn from_schema(mut schema: Schema) -> Result<Self, EditorError> {
        let mut elements = std::mem::take(&mut schema.elements);
        let clamped: usize = elements.iter_mut().map(|element| element.clamp_ranges()).sum();
        if clamped > 0 {
            tracing::warn!(
                schema_id = %schema.id,
                clamped,
                "Clamped out-of-range grid and heading attributes"
            );
        }
        let tree = ElementTree::from_elements(elements)?;
        let mut document = Self::from_parts(schema, tree);

        let pruned = pages::prune(&mut document.settings, &document.tree);
        if pruned > 0 {
            tracing::warn!(
                schema_id = %document.id,
                pruned,
                "Dropped page entries that do not reference root elements"
            );
        }
        Ok(document)
    }

    fn from_parts(schema: Schema, tree: ElementTree) -> Self {
        Self {
            id: schema.id,
            name: schema.name,
            description: schema.description,
            tree,
            settings: schema.settings,
            created_at: schema.created_at,
            updated_at: schema.updated_at,
        }
    }

    /// Export as a nested schema value
    pub fn to_schema(&self) -> Schema {
        Schema {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            elements: self.tree.to_elements(),
            settings: self.settings.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Refresh `updated_at`; never moves backwards
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

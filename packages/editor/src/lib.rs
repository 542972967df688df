//! # Formcraft Editor
//!
//! In-memory editing engine for form schemas.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ schema: Schema JSON ⇄ nested element tree   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorSession                       │
//! │  - Arena tree with O(1) lookup              │
//! │  - Snapshot undo/redo (50 levels)           │
//! │  - Clipboard with fresh-ID paste            │
//! │  - Page bindings and active page            │
//! │  - Selection with a primary element         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ change listener: receives the new Schema    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Operations never fail**: invalid input is a no-op reported through
//!    the return value
//! 2. **Whole-document snapshots**: every change pushes a full copy, so undo
//!    is a restore rather than an inverse operation
//! 3. **IDs are stable**: moves keep IDs, copies always get fresh ones
//! 4. **Pages list root elements only**, and each at most once
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formcraft_editor::{EditorOptions, EditorSession};
//! use formcraft_schema::{ElementPatch, ElementType};
//!
//! let mut session = EditorSession::new(EditorOptions::default());
//! session.set_change_listener(|schema| autosave(schema));
//!
//! let grid = session.add_element(ElementType::Grid, None, None, Some(3)).unwrap();
//! let column = session.children_of(Some(&grid)).unwrap()[0].clone();
//! let email = session.add_element(ElementType::Email, Some(&column), None, None).unwrap();
//! session.update_element(&email, &ElementPatch::label("Work email"));
//!
//! session.undo();
//! ```

mod clipboard;
mod commands;
mod document;
mod errors;
mod options;
mod pages;
mod selection;
mod session;
mod tree;
mod undo_stack;

pub use clipboard::Clipboard;
pub use commands::{parse_command, parse_script, Command, CommandOutcome};
pub use document::FormDocument;
pub use errors::EditorError;
pub use options::EditorOptions;
pub use pages::PageIndex;
pub use selection::Selection;
pub use session::{ChangeListener, EditorSession};
pub use tree::{Direction, ElementTree};
pub use undo_stack::{UndoStack, DEFAULT_HISTORY_LIMIT};

// Re-export common types for convenience
pub use formcraft_schema::{
    Element, ElementId, ElementKind, ElementPatch, ElementType, PageId, Schema, SettingsPatch,
};

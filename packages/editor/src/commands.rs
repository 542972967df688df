//! # Command Scripts
//!
//! Serializable editor operations. A script is a JSON array of commands,
//! each tagged with its `op`:
//!
//! ```json
//! [
//!   { "op": "addPage", "title": "Contact" },
//!   { "op": "addElement", "type": "grid", "columns": 3 },
//!   { "op": "updateElement", "id": "f-2", "patch": { "label": "Name" } },
//!   { "op": "undo" }
//! ]
//! ```
//!
//! Indexes are signed: a negative index means append, as does a missing one.
//! Commands never fail; an operation the session rejects reports
//! `Unchanged`. `Changed` and `Created` mean the session recorded an edit,
//! so `updateElement` always reports `Changed`, even for an unknown ID.

use crate::session::EditorSession;
use crate::tree::Direction;
use crate::EditorError;
use formcraft_schema::{ElementId, ElementPatch, ElementType, PageId, SettingsPatch};
use serde::{Deserialize, Serialize};

/// One editor operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    AddElement {
        #[serde(rename = "type")]
        element_type: ElementType,
        #[serde(default)]
        parent_id: Option<ElementId>,
        #[serde(default)]
        index: Option<i64>,
        #[serde(default)]
        columns: Option<u8>,
    },

    UpdateElement {
        id: ElementId,
        patch: ElementPatch,
    },

    RemoveElement {
        id: ElementId,
    },

    MoveElement {
        id: ElementId,
        #[serde(default)]
        parent_id: Option<ElementId>,
        #[serde(default)]
        index: Option<i64>,
    },

    /// Swap the primary selection with a neighbour
    MoveDirection {
        direction: Direction,
    },

    CopyElement {
        id: ElementId,
    },

    PasteElement {
        #[serde(default)]
        parent_id: Option<ElementId>,
        #[serde(default)]
        index: Option<i64>,
    },

    DuplicateElement {
        id: ElementId,
    },

    RemoveSelected,

    Select {
        id: ElementId,
        #[serde(default)]
        multi: bool,
    },

    SelectAllOnPage,

    ClearSelection,

    Undo,

    Redo,

    SetName {
        name: String,
    },

    SetDescription {
        description: String,
    },

    UpdateSettings {
        patch: SettingsPatch,
    },

    AddPage {
        title: String,
    },

    RemovePage {
        page_id: PageId,
    },

    RenamePage {
        page_id: PageId,
        title: String,
    },

    AssignToPage {
        id: ElementId,
        page_id: PageId,
    },

    SetActivePage {
        #[serde(default)]
        page_id: Option<PageId>,
    },
}

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum CommandOutcome {
    /// A new element or page was created
    Created { id: String },
    Changed,
    Unchanged,
}

impl CommandOutcome {
    fn from_flag(changed: bool) -> Self {
        if changed {
            CommandOutcome::Changed
        } else {
            CommandOutcome::Unchanged
        }
    }

    fn from_created(id: Option<ElementId>) -> Self {
        match id {
            Some(id) => CommandOutcome::Created { id: id.to_string() },
            None => CommandOutcome::Unchanged,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, CommandOutcome::Unchanged)
    }
}

fn position(index: Option<i64>) -> Option<usize> {
    index.and_then(|index| usize::try_from(index).ok())
}

impl Command {
    /// Short name used in logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddElement { .. } => "addElement",
            Command::UpdateElement { .. } => "updateElement",
            Command::RemoveElement { .. } => "removeElement",
            Command::MoveElement { .. } => "moveElement",
            Command::MoveDirection { .. } => "moveDirection",
            Command::CopyElement { .. } => "copyElement",
            Command::PasteElement { .. } => "pasteElement",
            Command::DuplicateElement { .. } => "duplicateElement",
            Command::RemoveSelected => "removeSelected",
            Command::Select { .. } => "select",
            Command::SelectAllOnPage => "selectAllOnPage",
            Command::ClearSelection => "clearSelection",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::SetName { .. } => "setName",
            Command::SetDescription { .. } => "setDescription",
            Command::UpdateSettings { .. } => "updateSettings",
            Command::AddPage { .. } => "addPage",
            Command::RemovePage { .. } => "removePage",
            Command::RenamePage { .. } => "renamePage",
            Command::AssignToPage { .. } => "assignToPage",
            Command::SetActivePage { .. } => "setActivePage",
        }
    }

    pub fn apply(self, session: &mut EditorSession) -> CommandOutcome {
        match self {
            Command::AddElement {
                element_type,
                parent_id,
                index,
                columns,
            } => CommandOutcome::from_created(session.add_element(
                element_type,
                parent_id.as_ref(),
                position(index),
                columns,
            )),
            Command::UpdateElement { id, patch } => {
                session.update_element(&id, &patch);
                CommandOutcome::Changed
            }
            Command::RemoveElement { id } => {
                CommandOutcome::from_flag(session.remove_element(&id))
            }
            Command::MoveElement {
                id,
                parent_id,
                index,
            } => CommandOutcome::from_flag(session.move_element(
                &id,
                parent_id.as_ref(),
                position(index),
            )),
            Command::MoveDirection { direction } => {
                CommandOutcome::from_flag(session.move_element_direction(direction))
            }
            Command::CopyElement { id } => CommandOutcome::from_flag(session.copy_element(&id)),
            Command::PasteElement { parent_id, index } => CommandOutcome::from_created(
                session.paste_element(parent_id.as_ref(), position(index)),
            ),
            Command::DuplicateElement { id } => {
                CommandOutcome::from_created(session.duplicate_element(&id))
            }
            Command::RemoveSelected => CommandOutcome::from_flag(session.remove_selected() > 0),
            Command::Select { id, multi } => {
                session.toggle_select(id, multi);
                CommandOutcome::Changed
            }
            Command::SelectAllOnPage => {
                session.select_all_on_page();
                CommandOutcome::Changed
            }
            Command::ClearSelection => {
                session.clear_selection();
                CommandOutcome::Changed
            }
            Command::Undo => CommandOutcome::from_flag(session.undo()),
            Command::Redo => CommandOutcome::from_flag(session.redo()),
            Command::SetName { name } => CommandOutcome::from_flag(session.set_name(name)),
            Command::SetDescription { description } => {
                CommandOutcome::from_flag(session.set_description(description))
            }
            Command::UpdateSettings { patch } => {
                CommandOutcome::from_flag(session.update_settings(&patch))
            }
            Command::AddPage { title } => CommandOutcome::Created {
                id: session.add_page(title).to_string(),
            },
            Command::RemovePage { page_id } => {
                CommandOutcome::from_flag(session.remove_page(&page_id))
            }
            Command::RenamePage { page_id, title } => {
                CommandOutcome::from_flag(session.rename_page(&page_id, title))
            }
            Command::AssignToPage { id, page_id } => {
                CommandOutcome::from_flag(session.assign_element_to_page(&id, &page_id))
            }
            Command::SetActivePage { page_id } => {
                CommandOutcome::from_flag(session.set_active_page(page_id))
            }
        }
    }
}

impl EditorSession {
    /// Run one command against this session
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        let name = command.name();
        let outcome = command.apply(self);
        tracing::debug!(command = name, ?outcome, "Applied command");
        outcome
    }

    /// Run every command in order
    pub fn apply_all(&mut self, commands: Vec<Command>) -> Vec<CommandOutcome> {
        commands
            .into_iter()
            .map(|command| self.apply(command))
            .collect()
    }
}

/// Parse a JSON array of commands
pub fn parse_script(json: &str) -> Result<Vec<Command>, EditorError> {
    serde_json::from_str(json).map_err(EditorError::Script)
}

/// Parse a single command object
pub fn parse_command(json: &str) -> Result<Command, EditorError> {
    serde_json::from_str(json).map_err(EditorError::Script)
}

//! # Edit Session
//!
//! One open editor: the live document plus its undo stack, clipboard,
//! selection and active page.
//!
//! Every mutating operation runs to completion, refreshes `updated_at`,
//! pushes a snapshot and then notifies the change listener with the new
//! schema. Invalid input (unknown IDs, empty clipboard, a parent that cannot
//! hold children) is a silent no-op reported through the return value; no
//! snapshot is taken in that case. `update_element` is the exception: it
//! records a snapshot even when the ID is unknown.

use crate::clipboard::Clipboard;
use crate::document::FormDocument;
use crate::options::EditorOptions;
use crate::pages::{self, PageIndex};
use crate::selection::Selection;
use crate::tree::{Direction, ElementTree};
use crate::undo_stack::UndoStack;
use crate::EditorError;
use chrono::Utc;
use formcraft_schema::{
    resolve_defaults, BuiltinDefaults, DefaultsRegistry, Element, ElementId, ElementKind,
    ElementPatch, ElementType, IdGenerator, PageId, Schema, SettingsPatch, GRID_SPAN_TOTAL,
    MAX_GRID_COLUMNS,
};

/// Receives the new schema after every change
pub type ChangeListener = Box<dyn FnMut(&Schema)>;

/// Single editor session
pub struct EditorSession {
    document: FormDocument,
    history: UndoStack<FormDocument>,
    clipboard: Clipboard,
    selection: Selection,
    pages: PageIndex,
    ids: IdGenerator,
    defaults: Box<dyn DefaultsRegistry>,
    options: EditorOptions,
    listener: Option<ChangeListener>,

    /// Bumped on every change, for pollers such as autosave
    revision: u64,
}

impl EditorSession {
    /// Session over a new, empty form
    pub fn new(options: EditorOptions) -> Self {
        Self::with_document(FormDocument::new("Untitled Form"), options)
    }

    /// Session over an existing schema (edit an existing form, restore a draft)
    pub fn from_schema(schema: Schema, options: EditorOptions) -> Result<Self, EditorError> {
        Ok(Self::with_document(FormDocument::from_schema(schema)?, options))
    }

    fn with_document(document: FormDocument, options: EditorOptions) -> Self {
        let ids = match &options.id_seed {
            Some(seed) => IdGenerator::from_seed(seed.clone()),
            None => {
                let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
                IdGenerator::new(&format!("{}#{}", document.id, nanos))
            }
        };

        Self {
            history: UndoStack::with_max_levels(document.clone(), options.history_limit),
            pages: PageIndex::for_settings(&document.settings),
            document,
            clipboard: Clipboard::new(),
            selection: Selection::new(),
            ids,
            defaults: Box::new(BuiltinDefaults),
            options,
            listener: None,
            revision: 0,
        }
    }

    /// Use a different element defaults registry
    pub fn with_defaults(mut self, registry: impl DefaultsRegistry + 'static) -> Self {
        self.defaults = Box::new(registry);
        self
    }

    /// Install the change listener, replacing any previous one
    pub fn set_change_listener(&mut self, listener: impl FnMut(&Schema) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_change_listener(&mut self) {
        self.listener = None;
    }

    // ---------------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------------

    /// Current schema value
    pub fn schema(&self) -> Schema {
        self.document.to_schema()
    }

    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    pub fn tree(&self) -> &ElementTree {
        &self.document.tree
    }

    /// The element with `id`, without its children
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.document.tree.get(id)
    }

    /// The element with `id` and its whole subtree
    pub fn subtree(&self, id: &ElementId) -> Option<Element> {
        self.document.tree.subtree(id)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.document.tree.contains(id)
    }

    pub fn parent_of(&self, id: &ElementId) -> Option<&ElementId> {
        self.document.tree.parent_of(id)
    }

    pub fn children_of(&self, parent: Option<&ElementId>) -> Option<&[ElementId]> {
        self.document.tree.children(parent)
    }

    pub fn element_count(&self) -> usize {
        self.document.tree.len()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn history(&self) -> &UndoStack<FormDocument> {
        &self.history
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    /// Finish a mutating operation
    fn commit(&mut self, action: &'static str) {
        self.document.touch();
        self.history.push(self.document.clone());
        self.revision += 1;
        tracing::debug!(action, revision = self.revision, "Applied edit");
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            let schema = self.document.to_schema();
            listener(&schema);
        }
    }

    fn skip(action: &'static str, reason: &'static str) {
        tracing::debug!(action, reason, "Edit skipped");
    }

    /// Next generated ID not present in the tree
    fn fresh_id(ids: &mut IdGenerator, tree: &ElementTree) -> ElementId {
        loop {
            let id = ids.new_id();
            if !tree.contains(&id) {
                return id;
            }
        }
    }

    fn build_element(&mut self, element_type: ElementType, columns: Option<u8>) -> Element {
        let defaults = resolve_defaults(self.defaults.as_ref(), element_type);
        let tree = &self.document.tree;
        let id = Self::fresh_id(&mut self.ids, tree);

        let mut element = Element {
            id,
            label: defaults.label,
            required: defaults.required,
            kind: defaults.kind,
            elements: Vec::new(),
        };

        if element_type == ElementType::Grid {
            let columns = columns
                .unwrap_or(self.options.default_grid_columns)
                .clamp(1, MAX_GRID_COLUMNS);
            let span = GRID_SPAN_TOTAL / columns;
            element.kind = ElementKind::Grid { columns };

            let column_defaults = resolve_defaults(self.defaults.as_ref(), ElementType::GridColumn);
            element.elements = (0..columns)
                .map(|_| Element {
                    id: Self::fresh_id(&mut self.ids, tree),
                    label: column_defaults.label.clone(),
                    required: false,
                    kind: ElementKind::GridColumn { span },
                    elements: Vec::new(),
                })
                .collect();
        }
        element
    }

    /// Copy of `subtree` with fresh IDs throughout
    fn with_fresh_ids(&mut self, mut subtree: Element) -> Element {
        let ids = &mut self.ids;
        let tree = &self.document.tree;
        subtree.regenerate_ids(&mut || Self::fresh_id(ids, tree));
        subtree
    }

    // ---------------------------------------------------------------------
    // Tree operations
    // ---------------------------------------------------------------------

    /// Create an element of `element_type` at `(parent, index)`. A missing or
    /// out-of-range index appends. Grids get `columns` grid-column children
    /// (clamped to 1..=6). Root insertions join the active page.
    pub fn add_element(
        &mut self,
        element_type: ElementType,
        parent: Option<&ElementId>,
        index: Option<usize>,
        columns: Option<u8>,
    ) -> Option<ElementId> {
        if !self.document.tree.can_hold_children(parent) {
            Self::skip("add_element", "parent missing or cannot hold children");
            return None;
        }

        let element = self.build_element(element_type, columns);
        let id = self.document.tree.insert_subtree(element, parent, index)?;
        if parent.is_none() {
            self.pages.assign(&mut self.document.settings, &id);
        }
        self.commit("add_element");
        Some(id)
    }

    /// Merge `patch` into the element. Returns whether the element exists.
    /// A snapshot is recorded either way.
    pub fn update_element(&mut self, id: &ElementId, patch: &ElementPatch) -> bool {
        let found = match self.document.tree.get_mut(id) {
            Some(element) => {
                patch.apply(element);
                true
            }
            None => false,
        };
        if !found {
            Self::skip("update_element", "unknown element");
        }
        self.commit("update_element");
        found
    }

    /// Remove the element and its subtree, its page listing and any
    /// selection of the removed IDs
    pub fn remove_element(&mut self, id: &ElementId) -> bool {
        if !self.detach_element(id) {
            Self::skip("remove_element", "unknown element");
            return false;
        }
        self.commit("remove_element");
        true
    }

    fn detach_element(&mut self, id: &ElementId) -> bool {
        if !self.document.tree.contains(id) {
            return false;
        }
        let removed = self.document.tree.descendants(id);
        if self.document.tree.is_root(id) {
            pages::unassign_from_pages(&mut self.document.settings, id);
        }
        self.document.tree.detach(id);
        self.selection.prune(&removed);
        true
    }

    /// Relocate the element with its subtree, preserving IDs. The index is
    /// interpreted after the element has left its old position.
    pub fn move_element(
        &mut self,
        id: &ElementId,
        parent: Option<&ElementId>,
        index: Option<usize>,
    ) -> bool {
        let was_root = self.document.tree.is_root(id);
        if !self.document.tree.move_to(id, parent, index) {
            Self::skip("move_element", "unknown element or invalid target");
            return false;
        }

        match (was_root, parent.is_none()) {
            (true, false) => {
                pages::unassign_from_pages(&mut self.document.settings, id);
            }
            (false, true) => {
                self.pages.assign(&mut self.document.settings, id);
            }
            _ => {}
        }
        self.commit("move_element");
        true
    }

    /// Swap the primary selection with its neighbour
    pub fn move_element_direction(&mut self, direction: Direction) -> bool {
        let Some(primary) = self.selection.primary().cloned() else {
            Self::skip("move_element_direction", "nothing selected");
            return false;
        };
        if !self.document.tree.swap_with_sibling(&primary, direction) {
            Self::skip("move_element_direction", "at boundary or not in tree");
            return false;
        }
        self.commit("move_element_direction");
        true
    }

    /// Put a deep copy of the subtree on the clipboard
    pub fn copy_element(&mut self, id: &ElementId) -> bool {
        match self.document.tree.subtree(id) {
            Some(subtree) => {
                self.clipboard.copy(subtree);
                true
            }
            None => {
                Self::skip("copy_element", "unknown element");
                false
            }
        }
    }

    /// Insert a fresh-ID copy of the clipboard entry (default: append at root)
    pub fn paste_element(
        &mut self,
        parent: Option<&ElementId>,
        index: Option<usize>,
    ) -> Option<ElementId> {
        if !self.document.tree.can_hold_children(parent) {
            Self::skip("paste_element", "parent missing or cannot hold children");
            return None;
        }
        let ids = &mut self.ids;
        let tree = &self.document.tree;
        let Some(element) = self.clipboard.instantiate(|| Self::fresh_id(ids, tree)) else {
            Self::skip("paste_element", "clipboard empty");
            return None;
        };

        let id = self.document.tree.insert_subtree(element, parent, index)?;
        if parent.is_none() {
            self.pages.assign(&mut self.document.settings, &id);
        }
        self.commit("paste_element");
        Some(id)
    }

    /// Insert a fresh-ID copy right after the original
    pub fn duplicate_element(&mut self, id: &ElementId) -> Option<ElementId> {
        let Some((parent, index)) = self.document.tree.location(id) else {
            Self::skip("duplicate_element", "unknown element");
            return None;
        };
        let subtree = self.document.tree.subtree(id)?;
        let copy = self.with_fresh_ids(subtree);
        let new_id = self
            .document
            .tree
            .insert_subtree(copy, parent.as_ref(), Some(index + 1))?;

        if parent.is_none() {
            let original_page = self
                .document
                .settings
                .page_of(id)
                .map(|page| page.id.clone());
            match original_page {
                Some(page) => {
                    pages::assign_to(&mut self.document.settings, &new_id, &page);
                }
                None => {
                    self.pages.assign(&mut self.document.settings, &new_id);
                }
            }
        }
        self.commit("duplicate_element");
        Some(new_id)
    }

    /// Remove every selected element and clear the selection. One snapshot
    /// covers the whole action. Returns the number of subtrees removed.
    pub fn remove_selected(&mut self) -> usize {
        let targets = self.selection.ids().to_vec();
        let removed = targets
            .iter()
            .filter(|id| self.detach_element(id))
            .count();
        self.selection.clear();

        if removed > 0 {
            self.commit("remove_selected");
        }
        removed
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    pub fn toggle_select(&mut self, id: ElementId, multi: bool) {
        self.selection.toggle(id, multi);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Select every element visible on the active page
    pub fn select_all_on_page(&mut self) {
        let ids = self.page_elements();
        self.selection.select_many(ids);
    }

    // ---------------------------------------------------------------------
    // Pages
    // ---------------------------------------------------------------------

    pub fn active_page(&self) -> Option<&PageId> {
        self.pages.active()
    }

    /// Switch pages; unknown IDs are ignored
    pub fn set_active_page(&mut self, page: Option<PageId>) -> bool {
        self.pages.set_active(&self.document.settings, page)
    }

    /// Root elements on the active page (all roots in single-page mode)
    pub fn page_elements(&self) -> Vec<ElementId> {
        self.pages
            .page_elements(&self.document.settings, &self.document.tree)
    }

    /// Append a page. The first page becomes active if none is.
    pub fn add_page(&mut self, title: impl Into<String>) -> PageId {
        let page_id = loop {
            let candidate = self.ids.new_page_id();
            if self.document.settings.page(&candidate).is_none() {
                break candidate;
            }
        };
        pages::add_page(&mut self.document.settings, page_id.clone(), title);
        if self.pages.active().is_none() {
            self.pages
                .set_active(&self.document.settings, Some(page_id.clone()));
        }
        self.commit("add_page");
        page_id
    }

    /// Remove a page; its elements stay in the tree, unassigned. If it was
    /// the active page, the first remaining page takes over.
    pub fn remove_page(&mut self, page: &PageId) -> bool {
        if !pages::remove_page(&mut self.document.settings, page) {
            Self::skip("remove_page", "unknown page");
            return false;
        }
        self.pages.replace_missing(&self.document.settings);
        self.commit("remove_page");
        true
    }

    pub fn rename_page(&mut self, page: &PageId, title: impl Into<String>) -> bool {
        let Some(target) = self.document.settings.page_mut(page) else {
            Self::skip("rename_page", "unknown page");
            return false;
        };
        target.title = title.into();
        self.commit("rename_page");
        true
    }

    /// Move a root element onto `page`, off every other page
    pub fn assign_element_to_page(&mut self, id: &ElementId, page: &PageId) -> bool {
        if !self.document.tree.is_root(id) {
            Self::skip("assign_element_to_page", "not a root element");
            return false;
        }
        if !pages::assign_to(&mut self.document.settings, id, page) {
            Self::skip("assign_element_to_page", "unknown page");
            return false;
        }
        self.commit("assign_element_to_page");
        true
    }

    // ---------------------------------------------------------------------
    // Document metadata
    // ---------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.document.name == name {
            return false;
        }
        self.document.name = name;
        self.commit("set_name");
        true
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> bool {
        let description = description.into();
        if self.document.description == description {
            return false;
        }
        self.document.description = description;
        self.commit("set_description");
        true
    }

    pub fn update_settings(&mut self, patch: &SettingsPatch) -> bool {
        if !patch.apply(&mut self.document.settings) {
            return false;
        }
        self.commit("update_settings");
        true
    }

    /// Swap in a different schema (restore a draft). History restarts from
    /// it and the selection is cleared; the clipboard survives.
    pub fn replace_schema(&mut self, schema: Schema) -> Result<(), EditorError> {
        let document = FormDocument::from_schema(schema)?;
        self.pages = PageIndex::for_settings(&document.settings);
        self.history.reset(document.clone());
        self.document = document;
        self.selection.clear();
        self.revision += 1;
        tracing::debug!(schema_id = %self.document.id, "Replaced schema");
        self.notify();
        Ok(())
    }

    // ---------------------------------------------------------------------
    // History
    // ---------------------------------------------------------------------

    /// Restore the previous snapshot
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        self.restore(snapshot, "undo");
        true
    }

    /// Restore the next snapshot
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        self.restore(snapshot, "redo");
        true
    }

    fn restore(&mut self, snapshot: FormDocument, action: &'static str) {
        self.document = snapshot;
        self.pages.ensure_active(&self.document.settings);
        self.revision += 1;
        tracing::debug!(action, cursor = self.history.cursor(), "Restored snapshot");
        self.notify();
        self.history.finish_replay();
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("schema_id", &self.document.id)
            .field("elements", &self.document.tree.len())
            .field("revision", &self.revision)
            .field("history", &format!("{}/{}", self.history.cursor(), self.history.len()))
            .field("selection", &self.selection)
            .finish()
    }
}

//! Transient selection state: a set of element IDs plus the primary
//! (most recently touched) ID. Never persisted and never validated against
//! the tree; removal operations prune it.

use formcraft_schema::ElementId;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Selected IDs in selection order
    selected: Vec<ElementId>,
    primary: Option<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single select replaces the selection; multi select toggles `id`.
    /// The primary becomes `id` either way, even when it was just deselected.
    pub fn toggle(&mut self, id: ElementId, multi: bool) {
        if multi {
            if let Some(pos) = self.selected.iter().position(|s| s == &id) {
                self.selected.remove(pos);
            } else {
                self.selected.push(id.clone());
            }
        } else {
            self.selected.clear();
            self.selected.push(id.clone());
        }
        self.primary = Some(id);
    }

    /// Replace the selection with `ids`; the last one becomes primary
    pub fn select_many(&mut self, ids: Vec<ElementId>) {
        self.primary = ids.last().cloned();
        self.selected = ids;
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.primary = None;
    }

    /// Drop every ID in `removed`. Returns true if the selection changed.
    pub fn prune(&mut self, removed: &[ElementId]) -> bool {
        let before = self.selected.len();
        self.selected.retain(|id| !removed.contains(id));
        let mut changed = self.selected.len() != before;

        if self.primary.as_ref().is_some_and(|p| removed.contains(p)) {
            self.primary = None;
            changed = true;
        }
        changed
    }

    pub fn primary(&self) -> Option<&ElementId> {
        self.primary.as_ref()
    }

    pub fn ids(&self) -> &[ElementId] {
        &self.selected
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ElementId {
        ElementId::new(s)
    }

    #[test]
    fn test_single_select_replaces() {
        let mut selection = Selection::new();
        selection.toggle(id("a"), false);
        selection.toggle(id("b"), false);
        assert_eq!(selection.ids(), &[id("b")]);
        assert_eq!(selection.primary(), Some(&id("b")));
    }

    #[test]
    fn test_multi_select_toggles() {
        let mut selection = Selection::new();
        selection.toggle(id("a"), true);
        selection.toggle(id("b"), true);
        assert_eq!(selection.len(), 2);

        selection.toggle(id("a"), true);
        assert_eq!(selection.ids(), &[id("b")]);
        // Primary tracks the last touched ID, even on deselect
        assert_eq!(selection.primary(), Some(&id("a")));
        assert!(!selection.contains(&id("a")));
    }

    #[test]
    fn test_prune_and_clear() {
        let mut selection = Selection::new();
        selection.select_many(vec![id("a"), id("b"), id("c")]);
        assert_eq!(selection.primary(), Some(&id("c")));

        assert!(selection.prune(&[id("c"), id("z")]));
        assert_eq!(selection.ids(), &[id("a"), id("b")]);
        assert!(selection.primary().is_none());
        assert!(!selection.prune(&[id("z")]));

        selection.clear();
        assert!(selection.is_empty());
    }
}

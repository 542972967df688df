use formcraft_schema::{Element, ElementId};

/// Single-slot holder for one copied element subtree
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    entry: Option<Element>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a deep copy, replacing any previous entry. IDs are kept as-is.
    pub fn copy(&mut self, subtree: Element) {
        self.entry = Some(subtree);
    }

    pub fn peek(&self) -> Option<&Element> {
        self.entry.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// A fresh copy of the entry with every ID replaced by `next_id`
    pub fn instantiate(&self, mut next_id: impl FnMut() -> ElementId) -> Option<Element> {
        let mut element = self.entry.clone()?;
        element.regenerate_ids(&mut next_id);
        Some(element)
    }
}

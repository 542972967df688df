//! # Element Tree
//!
//! Arena storage for the form tree. Elements are keyed by ID; every node
//! records its parent and its ordered child IDs, and the root list is an
//! ordered ID list. Lookups by ID are O(1) instead of a depth-first search.
//!
//! ## Invariants
//!
//! - Every ID appears in exactly one sibling list (a node's `children` or
//!   `roots`), and that list's owner is the node's `parent`.
//! - Only container-like elements have children.
//! - Elements stored in the arena are detached: their `elements` vector is
//!   always empty; the structure lives in `children`.
//!
//! Structural operations never fail loudly. An unknown ID, a parent that
//! cannot hold children, or a move that would create a cycle leaves the tree
//! unchanged and reports it through the return value.

use formcraft_schema::{Element, ElementId, SchemaError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Direction for sibling reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
struct Node {
    element: Element,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// Arena-backed element tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementTree {
    nodes: HashMap<ElementId, Node>,
    roots: Vec<ElementId>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from nested root elements, rejecting duplicate IDs and
    /// children under non-container elements
    pub fn from_elements(elements: Vec<Element>) -> Result<Self, SchemaError> {
        let mut tree = Self::new();
        for element in elements {
            let id = tree.insert_nodes(element, None)?;
            tree.roots.push(id);
        }
        Ok(tree)
    }

    fn insert_nodes(
        &mut self,
        mut element: Element,
        parent: Option<ElementId>,
    ) -> Result<ElementId, SchemaError> {
        let id = element.id.clone();
        if self.nodes.contains_key(&id) {
            return Err(SchemaError::DuplicateId(id));
        }
        let element_type = element.element_type();
        if !element.elements.is_empty() && !element_type.accepts_children() {
            return Err(SchemaError::ChildrenNotAllowed {
                parent: id,
                element_type,
            });
        }

        let nested = std::mem::take(&mut element.elements);
        self.nodes.insert(
            id.clone(),
            Node {
                element,
                parent,
                children: Vec::with_capacity(nested.len()),
            },
        );

        for child in nested {
            let child_id = self.insert_nodes(child, Some(id.clone()))?;
            if let Some(node) = self.nodes.get_mut(&id) {
                node.children.push(child_id);
            }
        }
        Ok(id)
    }

    /// Nested root elements in document order
    pub fn to_elements(&self) -> Vec<Element> {
        self.roots
            .iter()
            .filter_map(|id| self.subtree(id))
            .collect()
    }

    /// Deep copy of the subtree rooted at `id`, as a nested element
    pub fn subtree(&self, id: &ElementId) -> Option<Element> {
        let node = self.nodes.get(id)?;
        let mut element = node.element.clone();
        element.elements = node
            .children
            .iter()
            .filter_map(|child| self.subtree(child))
            .collect();
        Some(element)
    }

    /// The element with `id`, without its children
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.nodes.get(id).map(|node| &node.element)
    }

    pub(crate) fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(id).map(|node| &mut node.element)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    pub fn is_root(&self, id: &ElementId) -> bool {
        self.nodes
            .get(id)
            .map(|node| node.parent.is_none())
            .unwrap_or(false)
    }

    /// Parent of `id`; `None` for root elements and unknown IDs
    pub fn parent_of(&self, id: &ElementId) -> Option<&ElementId> {
        self.nodes.get(id).and_then(|node| node.parent.as_ref())
    }

    /// Children of `parent` (`None` = root list); `None` if the parent is unknown
    pub fn children(&self, parent: Option<&ElementId>) -> Option<&[ElementId]> {
        match parent {
            None => Some(&self.roots),
            Some(id) => self.nodes.get(id).map(|node| node.children.as_slice()),
        }
    }

    /// Parent and index of `id` within its sibling list
    pub fn location(&self, id: &ElementId) -> Option<(Option<ElementId>, usize)> {
        let parent = self.nodes.get(id)?.parent.clone();
        let index = self
            .children(parent.as_ref())?
            .iter()
            .position(|sibling| sibling == id)?;
        Some((parent, index))
    }

    /// Whether `ancestor` is `id` itself or one of its ancestors
    pub fn is_ancestor_or_self(&self, ancestor: &ElementId, id: &ElementId) -> bool {
        let mut current = Some(id);
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            current = self.parent_of(candidate);
        }
        false
    }

    /// Whether new children may be inserted under `parent`
    pub fn can_hold_children(&self, parent: Option<&ElementId>) -> bool {
        match parent {
            None => true,
            Some(id) => self
                .nodes
                .get(id)
                .map(|node| node.element.element_type().accepts_children())
                .unwrap_or(false),
        }
    }

    /// `id` followed by all its descendants, in document order
    pub fn descendants(&self, id: &ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.collect_descendants(id, &mut out);
        out
    }

    fn collect_descendants(&self, id: &ElementId, out: &mut Vec<ElementId>) {
        if let Some(node) = self.nodes.get(id) {
            out.push(id.clone());
            for child in &node.children {
                self.collect_descendants(child, out);
            }
        }
    }

    /// Every ID in document order
    pub fn ids(&self) -> Vec<ElementId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        for root in &self.roots {
            self.collect_descendants(root, &mut out);
        }
        out
    }

    fn siblings_mut(&mut self, parent: Option<&ElementId>) -> Option<&mut Vec<ElementId>> {
        match parent {
            None => Some(&mut self.roots),
            Some(id) => self.nodes.get_mut(id).map(|node| &mut node.children),
        }
    }

    /// Insert a nested element at `(parent, index)`. A missing or
    /// out-of-range index appends. Returns `None` without touching the tree
    /// if the parent cannot hold children or any subtree ID already exists.
    pub fn insert_subtree(
        &mut self,
        element: Element,
        parent: Option<&ElementId>,
        index: Option<usize>,
    ) -> Option<ElementId> {
        if !self.can_hold_children(parent) {
            return None;
        }

        let mut incoming = Vec::with_capacity(element.subtree_len());
        element.collect_ids(&mut incoming);
        let mut seen = HashSet::with_capacity(incoming.len());
        if incoming
            .iter()
            .any(|id| self.nodes.contains_key(id) || !seen.insert(id))
        {
            return None;
        }

        if !is_well_formed(&element) {
            return None;
        }

        let id = self.insert_nodes(element, parent.cloned()).ok()?;
        let siblings = self.siblings_mut(parent)?;
        let at = index.unwrap_or(siblings.len()).min(siblings.len());
        siblings.insert(at, id.clone());
        Some(id)
    }

    /// Remove the subtree rooted at `id` and return it as a nested element
    pub fn detach(&mut self, id: &ElementId) -> Option<Element> {
        let (parent, index) = self.location(id)?;
        let subtree = self.subtree(id)?;

        for removed in self.descendants(id) {
            self.nodes.remove(&removed);
        }
        if let Some(siblings) = self.siblings_mut(parent.as_ref()) {
            siblings.remove(index);
        }
        Some(subtree)
    }

    /// Relocate the subtree rooted at `id`, preserving every ID. The index is
    /// interpreted after the element has been taken out of its old list.
    pub fn move_to(
        &mut self,
        id: &ElementId,
        parent: Option<&ElementId>,
        index: Option<usize>,
    ) -> bool {
        if !self.can_hold_children(parent) {
            return false;
        }
        if let Some(target) = parent {
            if self.is_ancestor_or_self(id, target) {
                return false;
            }
        }
        let Some((old_parent, old_index)) = self.location(id) else {
            return false;
        };

        if let Some(siblings) = self.siblings_mut(old_parent.as_ref()) {
            siblings.remove(old_index);
        }
        let Some(siblings) = self.siblings_mut(parent) else {
            return false;
        };
        let at = index.unwrap_or(siblings.len()).min(siblings.len());
        siblings.insert(at, id.clone());

        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = parent.cloned();
        }
        true
    }

    /// Swap `id` with its neighbour in `direction`. False at the boundary.
    pub fn swap_with_sibling(&mut self, id: &ElementId, direction: Direction) -> bool {
        let Some((parent, index)) = self.location(id) else {
            return false;
        };
        let Some(siblings) = self.siblings_mut(parent.as_ref()) else {
            return false;
        };

        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < siblings.len() => index + 1,
            _ => return false,
        };
        siblings.swap(index, target);
        true
    }
}

fn is_well_formed(element: &Element) -> bool {
    (element.elements.is_empty() || element.element_type().accepts_children())
        && element.elements.iter().all(is_well_formed)
}

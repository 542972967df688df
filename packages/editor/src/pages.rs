//! # Page Bindings
//!
//! `settings.pages[i].elements` is the authoritative record of which root
//! elements appear on which page of a multi-step form. The index keeps it
//! consistent:
//!
//! - an element ID is on at most one page (assignment always removes it from
//!   every page first, or happens once for a freshly created ID)
//! - every listed ID is an existing root element (removal and
//!   moving away from the root strip the ID from all pages eagerly)
//!
//! The active page is session state, not part of the document.

use crate::tree::ElementTree;
use formcraft_schema::{ElementId, FormSettings, Page, PageId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageIndex {
    active: Option<PageId>,
}

impl PageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on the first page, if the form has pages
    pub fn for_settings(settings: &FormSettings) -> Self {
        Self {
            active: settings.pages().first().map(|page| page.id.clone()),
        }
    }

    pub fn active(&self) -> Option<&PageId> {
        self.active.as_ref()
    }

    /// Switch the active page. Unknown pages are ignored.
    pub fn set_active(&mut self, settings: &FormSettings, page: Option<PageId>) -> bool {
        match page {
            Some(id) if settings.page(&id).is_none() => false,
            page => {
                self.active = page;
                true
            }
        }
    }

    /// Append `id` to the active page. No-op in single-page mode.
    pub fn assign(&self, settings: &mut FormSettings, id: &ElementId) -> bool {
        match &self.active {
            Some(active) => assign_to(settings, id, active),
            None => false,
        }
    }

    /// Root elements visible on the active page, in root order. Without an
    /// active page or without pages, every root element.
    pub fn page_elements(&self, settings: &FormSettings, tree: &ElementTree) -> Vec<ElementId> {
        let page = self.active.as_ref().and_then(|id| settings.page(id));
        match page {
            Some(page) => tree
                .roots()
                .iter()
                .filter(|id| page.contains(id))
                .cloned()
                .collect(),
            None => tree.roots().to_vec(),
        }
    }

    /// Replace an active page that no longer exists with the first
    /// remaining page
    pub fn replace_missing(&mut self, settings: &FormSettings) {
        if let Some(active) = &self.active {
            if settings.page(active).is_none() {
                self.active = settings.pages().first().map(|page| page.id.clone());
            }
        }
    }

    /// Like [`PageIndex::replace_missing`], but also picks the first page
    /// when none is active. Used after restoring a snapshot, so a multi-page
    /// form always has somewhere for new root elements to land.
    pub fn ensure_active(&mut self, settings: &FormSettings) {
        let valid = self
            .active
            .as_ref()
            .is_some_and(|active| settings.page(active).is_some());
        if !valid {
            self.active = settings.pages().first().map(|page| page.id.clone());
        }
    }
}

/// Append `id` to `page` after removing it from every page
pub fn assign_to(settings: &mut FormSettings, id: &ElementId, page: &PageId) -> bool {
    if settings.page(page).is_none() {
        return false;
    }
    unassign_from_pages(settings, id);
    match settings.page_mut(page) {
        Some(target) => {
            target.elements.push(id.clone());
            true
        }
        None => false,
    }
}

/// Remove `id` from every page. Returns true if any page listed it.
pub fn unassign_from_pages(settings: &mut FormSettings, id: &ElementId) -> bool {
    let mut removed = false;
    if let Some(pages) = settings.pages.as_mut() {
        for page in pages.iter_mut() {
            let before = page.elements.len();
            page.elements.retain(|e| e != id);
            removed |= page.elements.len() != before;
        }
    }
    removed
}

pub fn add_page(settings: &mut FormSettings, id: PageId, title: impl Into<String>) {
    settings.pages.get_or_insert_with(Vec::new).push(Page {
        id,
        title: title.into(),
        elements: Vec::new(),
    });
}

/// Remove a page; its elements stay in the tree, unassigned
pub fn remove_page(settings: &mut FormSettings, id: &PageId) -> bool {
    let Some(pages) = settings.pages.as_mut() else {
        return false;
    };
    let before = pages.len();
    pages.retain(|page| &page.id != id);
    pages.len() != before
}

/// Drop references to non-root or missing elements and repeated listings.
/// Returns the number of entries removed.
pub fn prune(settings: &mut FormSettings, tree: &ElementTree) -> usize {
    let mut seen = std::collections::HashSet::new();
    let mut pruned = 0;
    if let Some(pages) = settings.pages.as_mut() {
        for page in pages.iter_mut() {
            let before = page.elements.len();
            page.elements
                .retain(|id| tree.is_root(id) && seen.insert(id.clone()));
            pruned += before - page.elements.len();
        }
    }
    pruned
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_schema::{Element, ElementKind, ElementType};

    fn tree_with(ids: &[&str]) -> ElementTree {
        ElementTree::from_elements(
            ids.iter()
                .map(|id| Element::new(*id, *id, ElementKind::bare(ElementType::Text)))
                .collect(),
        )
        .unwrap()
    }

    fn two_pages() -> FormSettings {
        let mut settings = FormSettings::default();
        add_page(&mut settings, PageId::new("p1"), "One");
        add_page(&mut settings, PageId::new("p2"), "Two");
        settings
    }

    #[test]
    fn test_assign_goes_to_active_page_only() {
        let mut settings = two_pages();
        let index = PageIndex::for_settings(&settings);
        assert_eq!(index.active(), Some(&PageId::new("p1")));

        assert!(index.assign(&mut settings, &ElementId::new("a")));
        assert_eq!(settings.pages()[0].elements, vec![ElementId::new("a")]);
        assert!(settings.pages()[1].elements.is_empty());
    }

    #[test]
    fn test_single_page_mode() {
        let mut settings = FormSettings::default();
        let index = PageIndex::for_settings(&settings);
        assert!(!index.assign(&mut settings, &ElementId::new("a")));

        let tree = tree_with(&["a", "b"]);
        assert_eq!(index.page_elements(&settings, &tree).len(), 2);
    }

    #[test]
    fn test_page_elements_follow_root_order() {
        let mut settings = two_pages();
        let tree = tree_with(&["a", "b", "c"]);
        assign_to(&mut settings, &ElementId::new("c"), &PageId::new("p1"));
        assign_to(&mut settings, &ElementId::new("a"), &PageId::new("p1"));
        assign_to(&mut settings, &ElementId::new("b"), &PageId::new("p2"));

        let index = PageIndex::for_settings(&settings);
        assert_eq!(
            index.page_elements(&settings, &tree),
            vec![ElementId::new("a"), ElementId::new("c")]
        );
    }

    #[test]
    fn test_reassign_keeps_one_page() {
        let mut settings = two_pages();
        let a = ElementId::new("a");
        assign_to(&mut settings, &a, &PageId::new("p1"));
        assign_to(&mut settings, &a, &PageId::new("p2"));
        assert!(!settings.pages()[0].contains(&a));
        assert!(settings.pages()[1].contains(&a));

        assert!(unassign_from_pages(&mut settings, &a));
        assert!(settings.page_of(&a).is_none());
        assert!(!assign_to(&mut settings, &a, &PageId::new("missing")));
    }

    #[test]
    fn test_active_page_validation() {
        let mut settings = two_pages();
        let mut index = PageIndex::new();
        assert!(!index.set_active(&settings, Some(PageId::new("nope"))));
        assert!(index.set_active(&settings, Some(PageId::new("p2"))));

        assert!(remove_page(&mut settings, &PageId::new("p2")));
        index.replace_missing(&settings);
        assert_eq!(index.active(), Some(&PageId::new("p1")));

        assert!(remove_page(&mut settings, &PageId::new("p1")));
        index.replace_missing(&settings);
        assert!(index.active().is_none());
    }

    #[test]
    fn test_ensure_active_picks_first_page() {
        let settings = two_pages();
        let mut index = PageIndex::new();
        index.replace_missing(&settings);
        assert!(index.active().is_none());

        index.ensure_active(&settings);
        assert_eq!(index.active(), Some(&PageId::new("p1")));

        assert!(index.set_active(&settings, Some(PageId::new("p2"))));
        index.ensure_active(&settings);
        assert_eq!(index.active(), Some(&PageId::new("p2")));

        index.ensure_active(&FormSettings::default());
        assert!(index.active().is_none());
    }

    #[test]
    fn test_prune_repairs_bindings() {
        let mut settings = two_pages();
        let tree = tree_with(&["a", "b"]);
        if let Some(pages) = settings.pages.as_mut() {
            pages[0].elements = vec![ElementId::new("a"), ElementId::new("ghost")];
            pages[1].elements = vec![ElementId::new("a"), ElementId::new("b")];
        }
        assert_eq!(prune(&mut settings, &tree), 2);
        assert_eq!(settings.pages()[0].elements, vec![ElementId::new("a")]);
        assert_eq!(settings.pages()[1].elements, vec![ElementId::new("b")]);
    }
}

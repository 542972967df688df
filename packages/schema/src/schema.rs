//! # Form Schema Document
//!
//! The document a form builder edits: metadata, the root element list and
//! form settings, including the page bindings of multi-step forms.

use crate::element::{Element, ElementId, ElementType};
use crate::error::SchemaError;
use crate::id_generator::get_schema_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_SUBMIT_TEXT: &str = "Submit";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you for your submission!";

/// Page identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One step of a multi-page form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    pub title: String,

    /// Root-level element IDs shown on this page
    #[serde(default)]
    pub elements: Vec<ElementId>,
}

impl Page {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: PageId::new(id),
            title: title.into(),
            elements: Vec::new(),
        }
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSettings {
    #[serde(default = "default_submit_text")]
    pub submit_button_text: String,

    #[serde(default = "default_success_message")]
    pub success_message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<Page>>,
}

fn default_submit_text() -> String {
    DEFAULT_SUBMIT_TEXT.to_string()
}

fn default_success_message() -> String {
    DEFAULT_SUCCESS_MESSAGE.to_string()
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            submit_button_text: default_submit_text(),
            success_message: default_success_message(),
            redirect_url: None,
            pages: None,
        }
    }
}

impl FormSettings {
    pub fn pages(&self) -> &[Page] {
        self.pages.as_deref().unwrap_or(&[])
    }

    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.pages().iter().find(|page| &page.id == id)
    }

    pub fn page_mut(&mut self, id: &PageId) -> Option<&mut Page> {
        self.pages
            .as_mut()
            .and_then(|pages| pages.iter_mut().find(|page| &page.id == id))
    }

    /// The page an element is assigned to, if any
    pub fn page_of(&self, id: &ElementId) -> Option<&Page> {
        self.pages().iter().find(|page| page.contains(id))
    }
}

/// Partial update of form settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub submit_button_text: Option<String>,
    pub success_message: Option<String>,
    pub redirect_url: Option<String>,
}

impl SettingsPatch {
    /// Returns true if anything changed
    pub fn apply(&self, settings: &mut FormSettings) -> bool {
        let before = settings.clone();

        if let Some(text) = &self.submit_button_text {
            settings.submit_button_text = text.clone();
        }
        if let Some(message) = &self.success_message {
            settings.success_message = message.clone();
        }
        if let Some(url) = &self.redirect_url {
            settings.redirect_url = if url.is_empty() {
                None
            } else {
                Some(url.clone())
            };
        }

        *settings != before
    }
}

/// A complete form document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub elements: Vec<Element>,

    #[serde(default)]
    pub settings: FormSettings,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schema {
    /// Create an empty form
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let now = Utc::now();
        Self {
            id: get_schema_id(&name, now),
            name,
            description: String::new(),
            elements: Vec::new(),
            settings: FormSettings::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn root_ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|e| e.id.clone()).collect()
    }

    /// Every element ID in document order
    pub fn all_ids(&self) -> Vec<ElementId> {
        let mut ids = Vec::new();
        for element in &self.elements {
            element.collect_ids(&mut ids);
        }
        ids
    }

    pub fn find_element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find_map(|e| e.find(id))
    }

    pub fn element_count(&self) -> usize {
        self.elements.iter().map(Element::subtree_len).sum()
    }

    /// Check the tree invariants: unique IDs everywhere and children only
    /// under container-like elements
    pub fn check_structure(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for element in &self.elements {
            check_element(element, &mut seen)?;
        }
        Ok(())
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new("Untitled Form")
    }
}

fn check_element(element: &Element, seen: &mut HashSet<ElementId>) -> Result<(), SchemaError> {
    if !seen.insert(element.id.clone()) {
        return Err(SchemaError::DuplicateId(element.id.clone()));
    }

    let element_type: ElementType = element.element_type();
    if !element.elements.is_empty() && !element_type.accepts_children() {
        return Err(SchemaError::ChildrenNotAllowed {
            parent: element.id.clone(),
            element_type,
        });
    }

    if let Some((field, value, range)) = element.kind.bounded() {
        if !range.contains(&value) {
            return Err(SchemaError::OutOfRange {
                id: element.id.clone(),
                field,
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }
    }

    for child in &element.elements {
        check_element(child, seen)?;
    }
    Ok(())
}

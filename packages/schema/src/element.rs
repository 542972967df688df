//! # Form Elements
//!
//! An element is one node of the form tree: either an input field or a
//! layout block. Type-specific attributes live in [`ElementKind`], a tagged
//! union keyed by the element type, so each variant only carries the fields
//! that make sense for it.
//!
//! ## Wire format
//!
//! ```json
//! { "id": "a1-3", "type": "select", "label": "Country",
//!   "required": true, "options": ["NL", "DE"] }
//! ```
//!
//! Container-like elements (`container`, `grid`, `grid-column`, `section`,
//! `card`) may carry an `elements` array of children.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Opaque element identifier, unique across the whole tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::borrow::Borrow<str> for ElementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Closed set of element types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementType {
    // Layout
    Container,
    Grid,
    GridColumn,
    Section,
    Card,
    Divider,
    Spacer,
    Heading,
    Logo,
    TextBlock,

    // Inputs
    Text,
    Email,
    Phone,
    Number,
    Url,
    Textarea,
    Select,
    Radio,
    Checkbox,
    Switch,
    Date,
    Time,
    File,
    Rating,
    Signature,
}

impl ElementType {
    pub const ALL: [ElementType; 25] = [
        ElementType::Container,
        ElementType::Grid,
        ElementType::GridColumn,
        ElementType::Section,
        ElementType::Card,
        ElementType::Divider,
        ElementType::Spacer,
        ElementType::Heading,
        ElementType::Logo,
        ElementType::TextBlock,
        ElementType::Text,
        ElementType::Email,
        ElementType::Phone,
        ElementType::Number,
        ElementType::Url,
        ElementType::Textarea,
        ElementType::Select,
        ElementType::Radio,
        ElementType::Checkbox,
        ElementType::Switch,
        ElementType::Date,
        ElementType::Time,
        ElementType::File,
        ElementType::Rating,
        ElementType::Signature,
    ];

    /// Wire tag, e.g. `grid-column`
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Container => "container",
            ElementType::Grid => "grid",
            ElementType::GridColumn => "grid-column",
            ElementType::Section => "section",
            ElementType::Card => "card",
            ElementType::Divider => "divider",
            ElementType::Spacer => "spacer",
            ElementType::Heading => "heading",
            ElementType::Logo => "logo",
            ElementType::TextBlock => "text-block",
            ElementType::Text => "text",
            ElementType::Email => "email",
            ElementType::Phone => "phone",
            ElementType::Number => "number",
            ElementType::Url => "url",
            ElementType::Textarea => "textarea",
            ElementType::Select => "select",
            ElementType::Radio => "radio",
            ElementType::Checkbox => "checkbox",
            ElementType::Switch => "switch",
            ElementType::Date => "date",
            ElementType::Time => "time",
            ElementType::File => "file",
            ElementType::Rating => "rating",
            ElementType::Signature => "signature",
        }
    }

    pub fn is_layout(&self) -> bool {
        matches!(
            self,
            ElementType::Container
                | ElementType::Grid
                | ElementType::GridColumn
                | ElementType::Section
                | ElementType::Card
                | ElementType::Divider
                | ElementType::Spacer
                | ElementType::Heading
                | ElementType::Logo
                | ElementType::TextBlock
        )
    }

    pub fn is_input(&self) -> bool {
        !self.is_layout()
    }

    /// Whether elements of this type may hold children
    pub fn accepts_children(&self) -> bool {
        matches!(
            self,
            ElementType::Container
                | ElementType::Grid
                | ElementType::GridColumn
                | ElementType::Section
                | ElementType::Card
        )
    }

    /// Whether this is a choice field that lists options
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            ElementType::Select | ElementType::Radio | ElementType::Checkbox
        )
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| format!("Unknown element type: {}", s))
    }
}

pub const DEFAULT_GRID_COLUMNS: u8 = 2;
pub const MAX_GRID_COLUMNS: u8 = 6;
pub const GRID_SPAN_TOTAL: u8 = 12;
pub const MAX_HEADING_LEVEL: u8 = 6;

fn default_columns() -> u8 {
    DEFAULT_GRID_COLUMNS
}

fn default_span() -> u8 {
    GRID_SPAN_TOTAL
}

fn default_spacer_height() -> u32 {
    24
}

fn default_heading_level() -> u8 {
    2
}

fn default_rating_max() -> u8 {
    5
}

/// Type-specific attributes, tagged by element type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ElementKind {
    Container,
    Grid {
        #[serde(default = "default_columns")]
        columns: u8,
    },
    GridColumn {
        #[serde(default = "default_span")]
        span: u8,
    },
    Section {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Card {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Divider,
    Spacer {
        #[serde(default = "default_spacer_height")]
        height: u32,
    },
    Heading {
        #[serde(default = "default_heading_level")]
        level: u8,
    },
    Logo {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        src: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
    TextBlock {
        #[serde(default)]
        content: String,
    },
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Email {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Phone {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
    Url {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Textarea {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rows: Option<u32>,
    },
    Select {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(default)]
        options: Vec<String>,
    },
    Radio {
        #[serde(default)]
        options: Vec<String>,
    },
    Checkbox {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        options: Vec<String>,
    },
    Switch,
    Date,
    Time,
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accept: Option<String>,
        #[serde(default)]
        multiple: bool,
    },
    Rating {
        #[serde(default = "default_rating_max")]
        max: u8,
    },
    Signature,
}

impl ElementKind {
    /// Attributes with every optional field empty
    pub fn bare(ty: ElementType) -> Self {
        match ty {
            ElementType::Container => ElementKind::Container,
            ElementType::Grid => ElementKind::Grid {
                columns: DEFAULT_GRID_COLUMNS,
            },
            ElementType::GridColumn => ElementKind::GridColumn {
                span: GRID_SPAN_TOTAL,
            },
            ElementType::Section => ElementKind::Section { description: None },
            ElementType::Card => ElementKind::Card { description: None },
            ElementType::Divider => ElementKind::Divider,
            ElementType::Spacer => ElementKind::Spacer {
                height: default_spacer_height(),
            },
            ElementType::Heading => ElementKind::Heading {
                level: default_heading_level(),
            },
            ElementType::Logo => ElementKind::Logo {
                src: None,
                alt: None,
            },
            ElementType::TextBlock => ElementKind::TextBlock {
                content: String::new(),
            },
            ElementType::Text => ElementKind::Text { placeholder: None },
            ElementType::Email => ElementKind::Email { placeholder: None },
            ElementType::Phone => ElementKind::Phone { placeholder: None },
            ElementType::Number => ElementKind::Number {
                placeholder: None,
                min: None,
                max: None,
                step: None,
            },
            ElementType::Url => ElementKind::Url { placeholder: None },
            ElementType::Textarea => ElementKind::Textarea {
                placeholder: None,
                rows: None,
            },
            ElementType::Select => ElementKind::Select {
                placeholder: None,
                options: Vec::new(),
            },
            ElementType::Radio => ElementKind::Radio {
                options: Vec::new(),
            },
            ElementType::Checkbox => ElementKind::Checkbox {
                options: Vec::new(),
            },
            ElementType::Switch => ElementKind::Switch,
            ElementType::Date => ElementKind::Date,
            ElementType::Time => ElementKind::Time,
            ElementType::File => ElementKind::File {
                accept: None,
                multiple: false,
            },
            ElementType::Rating => ElementKind::Rating {
                max: default_rating_max(),
            },
            ElementType::Signature => ElementKind::Signature,
        }
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Container => ElementType::Container,
            ElementKind::Grid { .. } => ElementType::Grid,
            ElementKind::GridColumn { .. } => ElementType::GridColumn,
            ElementKind::Section { .. } => ElementType::Section,
            ElementKind::Card { .. } => ElementType::Card,
            ElementKind::Divider => ElementType::Divider,
            ElementKind::Spacer { .. } => ElementType::Spacer,
            ElementKind::Heading { .. } => ElementType::Heading,
            ElementKind::Logo { .. } => ElementType::Logo,
            ElementKind::TextBlock { .. } => ElementType::TextBlock,
            ElementKind::Text { .. } => ElementType::Text,
            ElementKind::Email { .. } => ElementType::Email,
            ElementKind::Phone { .. } => ElementType::Phone,
            ElementKind::Number { .. } => ElementType::Number,
            ElementKind::Url { .. } => ElementType::Url,
            ElementKind::Textarea { .. } => ElementType::Textarea,
            ElementKind::Select { .. } => ElementType::Select,
            ElementKind::Radio { .. } => ElementType::Radio,
            ElementKind::Checkbox { .. } => ElementType::Checkbox,
            ElementKind::Switch => ElementType::Switch,
            ElementKind::Date => ElementType::Date,
            ElementKind::Time => ElementType::Time,
            ElementKind::File { .. } => ElementType::File,
            ElementKind::Rating { .. } => ElementType::Rating,
            ElementKind::Signature => ElementType::Signature,
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            ElementKind::Text { placeholder }
            | ElementKind::Email { placeholder }
            | ElementKind::Phone { placeholder }
            | ElementKind::Url { placeholder }
            | ElementKind::Number { placeholder, .. }
            | ElementKind::Textarea { placeholder, .. }
            | ElementKind::Select { placeholder, .. } => placeholder.as_deref(),
            _ => None,
        }
    }

    /// Returns false if this kind has no placeholder
    pub fn set_placeholder(&mut self, value: impl Into<String>) -> bool {
        match self {
            ElementKind::Text { placeholder }
            | ElementKind::Email { placeholder }
            | ElementKind::Phone { placeholder }
            | ElementKind::Url { placeholder }
            | ElementKind::Number { placeholder, .. }
            | ElementKind::Textarea { placeholder, .. }
            | ElementKind::Select { placeholder, .. } => {
                *placeholder = Some(value.into());
                true
            }
            _ => false,
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match self {
            ElementKind::Select { options, .. }
            | ElementKind::Radio { options }
            | ElementKind::Checkbox { options } => Some(options),
            _ => None,
        }
    }

    /// Returns false if this kind has no options
    pub fn set_options(&mut self, values: Vec<String>) -> bool {
        match self {
            ElementKind::Select { options, .. }
            | ElementKind::Radio { options }
            | ElementKind::Checkbox { options } => {
                *options = values;
                true
            }
            _ => false,
        }
    }

    /// The bounded numeric attribute of this kind: its name, current value
    /// and allowed range
    pub fn bounded(&self) -> Option<(&'static str, u8, RangeInclusive<u8>)> {
        match self {
            ElementKind::Grid { columns } => Some(("columns", *columns, 1..=MAX_GRID_COLUMNS)),
            ElementKind::GridColumn { span } => Some(("span", *span, 1..=GRID_SPAN_TOTAL)),
            ElementKind::Heading { level } => Some(("level", *level, 1..=MAX_HEADING_LEVEL)),
            _ => None,
        }
    }

    /// Pull the bounded attribute into its range. Returns true if it moved.
    pub fn clamp_ranges(&mut self) -> bool {
        let Some((_, value, range)) = self.bounded() else {
            return false;
        };
        let clamped = value.clamp(*range.start(), *range.end());
        if clamped == value {
            return false;
        }
        match self {
            ElementKind::Grid { columns } => *columns = clamped,
            ElementKind::GridColumn { span } => *span = clamped,
            ElementKind::Heading { level } => *level = clamped,
            _ => {}
        }
        true
    }
}

/// A node in the form tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub required: bool,

    #[serde(flatten)]
    pub kind: ElementKind,

    /// Children, only meaningful for container-like types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<Element>,
}

impl Element {
    /// Clamp bounded attributes throughout the subtree. Returns the number
    /// of elements adjusted.
    pub fn clamp_ranges(&mut self) -> usize {
        let mut adjusted = usize::from(self.kind.clamp_ranges());
        for child in &mut self.elements {
            adjusted += child.clamp_ranges();
        }
        adjusted
    }

    pub fn new(id: impl Into<ElementId>, label: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            required: false,
            kind,
            elements: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.elements = children;
        self
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    /// Depth-first search in document order, starting with `self`
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id.as_str() == id {
            return Some(self);
        }
        self.elements.iter().find_map(|child| child.find(id))
    }

    /// Append this element's ID and all descendant IDs in document order
    pub fn collect_ids(&self, out: &mut Vec<ElementId>) {
        out.push(self.id.clone());
        for child in &self.elements {
            child.collect_ids(out);
        }
    }

    /// Number of elements in this subtree, including `self`
    pub fn subtree_len(&self) -> usize {
        1 + self.elements.iter().map(Element::subtree_len).sum::<usize>()
    }

    /// Rewrite every ID in the subtree using `next_id`
    pub fn regenerate_ids(&mut self, next_id: &mut impl FnMut() -> ElementId) {
        self.id = next_id();
        for child in &mut self.elements {
            child.regenerate_ids(next_id);
        }
    }
}

/// Partial update merged into an existing element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    pub label: Option<String>,
    pub required: Option<bool>,
    pub placeholder: Option<String>,
    pub options: Option<Vec<String>>,

    /// Replacement attributes; ignored unless the type matches
    pub kind: Option<ElementKind>,
}

impl ElementPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.required.is_none()
            && self.placeholder.is_none()
            && self.options.is_none()
            && self.kind.is_none()
    }

    /// Merge into `element`. Returns true if anything changed.
    pub fn apply(&self, element: &mut Element) -> bool {
        let before = element.clone();

        if let Some(kind) = &self.kind {
            if kind.element_type() == element.element_type() {
                element.kind = kind.clone();
                element.kind.clamp_ranges();
            }
        }
        if let Some(placeholder) = &self.placeholder {
            element.kind.set_placeholder(placeholder.clone());
        }
        if let Some(options) = &self.options {
            element.kind.set_options(options.clone());
        }
        if let Some(label) = &self.label {
            element.label = label.clone();
        }
        if let Some(required) = self.required {
            element.required = required;
        }

        *element != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tags_are_kebab_case() {
        assert_eq!(ElementType::GridColumn.as_str(), "grid-column");
        assert_eq!(ElementType::TextBlock.as_str(), "text-block");
        assert_eq!(
            serde_json::to_string(&ElementType::GridColumn).unwrap(),
            "\"grid-column\""
        );
        for ty in ElementType::ALL {
            assert_eq!(ty.as_str().parse::<ElementType>().unwrap(), ty);
            assert_eq!(ElementKind::bare(ty).element_type(), ty);
        }
        assert!("slider".parse::<ElementType>().is_err());
    }

    #[test]
    fn test_only_container_types_accept_children() {
        let containers: Vec<_> = ElementType::ALL
            .iter()
            .filter(|ty| ty.accepts_children())
            .collect();
        assert_eq!(containers.len(), 5);
        assert!(ElementType::Card.accepts_children());
        assert!(!ElementType::Text.accepts_children());
        assert!(ElementType::Heading.is_layout());
        assert!(ElementType::Signature.is_input());
    }

    #[test]
    fn test_element_json_shape() {
        let element = Element {
            id: ElementId::new("e-1"),
            label: "Country".to_string(),
            required: true,
            kind: ElementKind::Select {
                placeholder: None,
                options: vec!["NL".to_string(), "DE".to_string()],
            },
            elements: vec![],
        };

        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["type"], "select");
        assert_eq!(value["id"], "e-1");
        assert_eq!(value["options"][1], "DE");
        assert!(value.get("elements").is_none());
        assert!(value.get("placeholder").is_none());
    }

    #[test]
    fn test_parse_nested_grid_with_unit_variants() {
        let json = r#"{
            "id": "g", "type": "grid", "label": "Row", "columns": 2,
            "elements": [
                { "id": "c1", "type": "grid-column", "label": "Left", "span": 6,
                  "elements": [ { "id": "d", "type": "divider", "label": "Line" } ] },
                { "id": "c2", "type": "grid-column", "label": "Right" }
            ]
        }"#;

        let grid: Element = serde_json::from_str(json).unwrap();
        assert_eq!(grid.kind, ElementKind::Grid { columns: 2 });
        assert_eq!(grid.elements.len(), 2);
        assert_eq!(grid.elements[1].kind, ElementKind::GridColumn { span: 12 });
        assert_eq!(grid.find("d").unwrap().kind, ElementKind::Divider);
        assert_eq!(grid.subtree_len(), 4);

        let mut ids = Vec::new();
        grid.collect_ids(&mut ids);
        let ids: Vec<&str> = ids.iter().map(ElementId::as_str).collect();
        assert_eq!(ids, vec!["g", "c1", "d", "c2"]);
    }

    #[test]
    fn test_number_bounds_accept_integers() {
        let json = r#"{ "id": "n", "type": "number", "label": "Age", "min": 0, "max": 120 }"#;
        let element: Element = serde_json::from_str(json).unwrap();
        match element.kind {
            ElementKind::Number { min, max, .. } => {
                assert_eq!(min, Some(0.0));
                assert_eq!(max, Some(120.0));
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_patch_ignores_inapplicable_fields() {
        let mut divider = Element::new("d", "Line", ElementKind::Divider);
        let patch = ElementPatch {
            placeholder: Some("type here".to_string()),
            options: Some(vec!["a".to_string()]),
            kind: Some(ElementKind::Heading { level: 1 }),
            ..Default::default()
        };
        assert!(!patch.apply(&mut divider));
        assert_eq!(divider.kind, ElementKind::Divider);
    }

    #[test]
    fn test_patch_clamps_bounded_attributes() {
        let mut grid = Element::new("g", "Row", ElementKind::Grid { columns: 2 });
        let patch = ElementPatch {
            kind: Some(ElementKind::Grid { columns: 200 }),
            ..Default::default()
        };
        assert!(patch.apply(&mut grid));
        assert_eq!(grid.kind, ElementKind::Grid { columns: MAX_GRID_COLUMNS });

        let mut column = Element::new("c", "Column", ElementKind::GridColumn { span: 6 });
        let patch = ElementPatch {
            kind: Some(ElementKind::GridColumn { span: 0 }),
            ..Default::default()
        };
        assert!(patch.apply(&mut column));
        assert_eq!(column.kind, ElementKind::GridColumn { span: 1 });
    }

    #[test]
    fn test_clamp_ranges_walks_subtree() {
        let json = r#"{
            "id": "g", "type": "grid", "label": "Row", "columns": 9,
            "elements": [
                { "id": "c1", "type": "grid-column", "label": "Left", "span": 0 },
                { "id": "c2", "type": "grid-column", "label": "Right", "span": 6 }
            ]
        }"#;
        let mut grid: Element = serde_json::from_str(json).unwrap();
        assert_eq!(grid.clamp_ranges(), 2);
        assert_eq!(grid.kind, ElementKind::Grid { columns: 6 });
        assert_eq!(grid.elements[0].kind, ElementKind::GridColumn { span: 1 });
        assert_eq!(grid.elements[1].kind, ElementKind::GridColumn { span: 6 });
        assert_eq!(grid.clamp_ranges(), 0);
    }

    #[test]
    fn test_patch_merges_fields() {
        let mut select = Element::new("s", "Pick", ElementKind::bare(ElementType::Select));
        let patch = ElementPatch {
            label: Some("Pick one".to_string()),
            required: Some(true),
            placeholder: Some("Choose...".to_string()),
            options: Some(vec!["x".to_string(), "y".to_string()]),
            kind: None,
        };
        assert!(patch.apply(&mut select));
        assert_eq!(select.label, "Pick one");
        assert!(select.required);
        assert_eq!(select.kind.placeholder(), Some("Choose..."));
        assert_eq!(select.kind.options().unwrap().len(), 2);

        // Same patch twice changes nothing
        assert!(!patch.apply(&mut select));
    }

    #[test]
    fn test_regenerate_ids_touches_every_node() {
        let mut card = Element::new("card", "Card", ElementKind::bare(ElementType::Card))
            .with_children(vec![
                Element::new("a", "A", ElementKind::bare(ElementType::Text)),
                Element::new("b", "B", ElementKind::bare(ElementType::Email)),
            ]);
        let mut counter = 0;
        card.regenerate_ids(&mut || {
            counter += 1;
            ElementId::new(format!("fresh-{}", counter))
        });

        let mut ids = Vec::new();
        card.collect_ids(&mut ids);
        assert_eq!(
            ids,
            vec![
                ElementId::new("fresh-1"),
                ElementId::new("fresh-2"),
                ElementId::new("fresh-3")
            ]
        );
    }
}

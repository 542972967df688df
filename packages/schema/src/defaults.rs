//! # Element Defaults
//!
//! New elements get their label and attributes from a registry keyed by
//! element type. The registry may have no entry for a type; the editor then
//! falls back to the type's bare attributes and a generated label.

use crate::element::{ElementKind, ElementType};

/// Default attribute set for a new element
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDefaults {
    pub label: String,
    pub required: bool,
    pub kind: ElementKind,
}

impl ElementDefaults {
    fn new(label: &str, kind: ElementKind) -> Self {
        Self {
            label: label.to_string(),
            required: false,
            kind,
        }
    }
}

/// Lookup of defaults by element type
pub trait DefaultsRegistry {
    fn defaults(&self, ty: ElementType) -> Option<ElementDefaults>;
}

/// Label used when the registry has nothing for a type
pub fn fallback_label(ty: ElementType) -> String {
    format!("New {} field", ty)
}

/// Resolve defaults for `ty`, falling back to bare attributes
pub fn resolve_defaults(registry: &dyn DefaultsRegistry, ty: ElementType) -> ElementDefaults {
    match registry.defaults(ty) {
        Some(defaults) if defaults.kind.element_type() == ty => defaults,
        _ => ElementDefaults {
            label: fallback_label(ty),
            required: false,
            kind: ElementKind::bare(ty),
        },
    }
}

fn sample_options() -> Vec<String> {
    vec![
        "Option 1".to_string(),
        "Option 2".to_string(),
        "Option 3".to_string(),
    ]
}

/// Stock defaults table
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinDefaults;

impl DefaultsRegistry for BuiltinDefaults {
    fn defaults(&self, ty: ElementType) -> Option<ElementDefaults> {
        let defaults = match ty {
            ElementType::Container => ElementDefaults::new("Container", ElementKind::Container),
            ElementType::Grid => ElementDefaults::new("Grid", ElementKind::bare(ty)),
            ElementType::GridColumn => ElementDefaults::new("Column", ElementKind::bare(ty)),
            ElementType::Section => ElementDefaults::new("Section", ElementKind::bare(ty)),
            ElementType::Card => ElementDefaults::new("Card", ElementKind::bare(ty)),
            ElementType::Divider => ElementDefaults::new("Divider", ElementKind::Divider),
            ElementType::Spacer => ElementDefaults::new("Spacer", ElementKind::bare(ty)),
            ElementType::Heading => ElementDefaults::new("Heading", ElementKind::bare(ty)),
            ElementType::Logo => ElementDefaults::new(
                "Logo",
                ElementKind::Logo {
                    src: None,
                    alt: Some("Logo".to_string()),
                },
            ),
            ElementType::TextBlock => ElementDefaults::new(
                "Text Block",
                ElementKind::TextBlock {
                    content: "Add your text here".to_string(),
                },
            ),
            ElementType::Text => ElementDefaults::new(
                "Text Input",
                ElementKind::Text {
                    placeholder: Some("Enter text...".to_string()),
                },
            ),
            ElementType::Email => ElementDefaults::new(
                "Email",
                ElementKind::Email {
                    placeholder: Some("you@example.com".to_string()),
                },
            ),
            ElementType::Phone => ElementDefaults::new(
                "Phone Number",
                ElementKind::Phone {
                    placeholder: Some("+1 (555) 000-0000".to_string()),
                },
            ),
            ElementType::Number => ElementDefaults::new(
                "Number",
                ElementKind::Number {
                    placeholder: Some("0".to_string()),
                    min: None,
                    max: None,
                    step: None,
                },
            ),
            ElementType::Url => ElementDefaults::new(
                "Website",
                ElementKind::Url {
                    placeholder: Some("https://".to_string()),
                },
            ),
            ElementType::Textarea => ElementDefaults::new(
                "Message",
                ElementKind::Textarea {
                    placeholder: Some("Enter your message...".to_string()),
                    rows: Some(4),
                },
            ),
            ElementType::Select => ElementDefaults::new(
                "Dropdown",
                ElementKind::Select {
                    placeholder: Some("Select an option".to_string()),
                    options: sample_options(),
                },
            ),
            ElementType::Radio => ElementDefaults::new(
                "Multiple Choice",
                ElementKind::Radio {
                    options: sample_options(),
                },
            ),
            ElementType::Checkbox => ElementDefaults::new(
                "Checkboxes",
                ElementKind::Checkbox {
                    options: sample_options(),
                },
            ),
            ElementType::Switch => ElementDefaults::new("Toggle", ElementKind::Switch),
            ElementType::Date => ElementDefaults::new("Date", ElementKind::Date),
            ElementType::Time => ElementDefaults::new("Time", ElementKind::Time),
            ElementType::File => ElementDefaults::new("File Upload", ElementKind::bare(ty)),
            ElementType::Rating => ElementDefaults::new("Rating", ElementKind::bare(ty)),
            ElementType::Signature => ElementDefaults::new("Signature", ElementKind::Signature),
        };
        Some(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoDefaults;

    impl DefaultsRegistry for NoDefaults {
        fn defaults(&self, _ty: ElementType) -> Option<ElementDefaults> {
            None
        }
    }

    #[test]
    fn test_builtin_table_is_exhaustive_and_typed() {
        for ty in ElementType::ALL {
            let defaults = BuiltinDefaults.defaults(ty).unwrap();
            assert_eq!(defaults.kind.element_type(), ty);
            assert!(!defaults.label.is_empty());
        }
    }

    #[test]
    fn test_fallback_label() {
        let defaults = resolve_defaults(&NoDefaults, ElementType::GridColumn);
        assert_eq!(defaults.label, "New grid-column field");
        assert_eq!(defaults.kind, ElementKind::GridColumn { span: 12 });
        assert!(!defaults.required);
    }

    #[test]
    fn test_builtin_choice_fields_have_options() {
        let select = resolve_defaults(&BuiltinDefaults, ElementType::Radio);
        assert_eq!(select.kind.options().unwrap().len(), 3);
    }
}

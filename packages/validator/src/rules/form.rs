use crate::diagnostic::Diagnostic;
use crate::rules::ValidationRule;
use formcraft_schema::Schema;
use std::collections::HashSet;

/// The form must have a non-empty name
pub struct FormNameRule;

impl ValidationRule for FormNameRule {
    fn name(&self) -> &'static str {
        "form-name"
    }

    fn description(&self) -> &'static str {
        "Require a form name"
    }

    fn check_schema(&self, schema: &Schema) -> Vec<Diagnostic> {
        if schema.name.trim().is_empty() {
            vec![Diagnostic::error("form-name", "Form name is required")
                .with_suggestion("Give the form a name before publishing")]
        } else {
            Vec::new()
        }
    }
}

/// The form must have at least one element
pub struct HasElementsRule;

impl ValidationRule for HasElementsRule {
    fn name(&self) -> &'static str {
        "has-elements"
    }

    fn description(&self) -> &'static str {
        "Require at least one root element"
    }

    fn check_schema(&self, schema: &Schema) -> Vec<Diagnostic> {
        if schema.elements.is_empty() {
            vec![Diagnostic::error(
                "has-elements",
                "Form must have at least one element",
            )]
        } else {
            Vec::new()
        }
    }
}

/// Root element IDs must be unique. Nested elements are not scanned.
pub struct UniqueRootIdsRule;

impl ValidationRule for UniqueRootIdsRule {
    fn name(&self) -> &'static str {
        "unique-root-ids"
    }

    fn description(&self) -> &'static str {
        "Disallow duplicate IDs among root elements"
    }

    fn check_schema(&self, schema: &Schema) -> Vec<Diagnostic> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut diagnostics = Vec::new();

        for element in &schema.elements {
            if !seen.insert(&element.id) && reported.insert(&element.id) {
                diagnostics.push(
                    Diagnostic::error(
                        "unique-root-ids",
                        format!("Duplicate element ID: {}", element.id),
                    )
                    .at(&element.id),
                );
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_schema::{Element, ElementKind};

    #[test]
    fn test_blank_name_is_error() {
        let schema = Schema::new("   ");
        let diagnostics = FormNameRule.check_schema(&schema);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_error());
    }

    #[test]
    fn test_empty_form_is_error() {
        let mut schema = Schema::new("Empty");
        assert_eq!(HasElementsRule.check_schema(&schema).len(), 1);

        schema.elements.push(Element::new("a", "A", ElementKind::Date));
        assert!(HasElementsRule.check_schema(&schema).is_empty());
    }

    #[test]
    fn test_duplicates_reported_once_per_id() {
        let mut schema = Schema::new("Dupes");
        schema.elements = vec![
            Element::new("a", "A", ElementKind::Date),
            Element::new("a", "A", ElementKind::Date),
            Element::new("a", "A", ElementKind::Date),
            Element::new("b", "B", ElementKind::Container)
                .with_children(vec![Element::new("b", "Nested", ElementKind::Time)]),
        ];

        let diagnostics = UniqueRootIdsRule.check_schema(&schema);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Duplicate element ID: a");
    }
}

use crate::diagnostic::Diagnostic;
use crate::rules::ValidationRule;
use formcraft_schema::Schema;

/// Pages without elements render as blank steps
pub struct EmptyPageRule;

impl ValidationRule for EmptyPageRule {
    fn name(&self) -> &'static str {
        "empty-page"
    }

    fn description(&self) -> &'static str {
        "Warn about pages with no elements"
    }

    fn check_schema(&self, schema: &Schema) -> Vec<Diagnostic> {
        schema
            .settings
            .pages()
            .iter()
            .filter(|page| page.elements.is_empty())
            .map(|page| {
                Diagnostic::warning(
                    "empty-page",
                    format!("Page '{}' has no elements", page.title),
                )
                .with_suggestion("Add elements to the page or remove it")
            })
            .collect()
    }
}

/// In a multi-page form, root elements outside every page are never shown
pub struct UnassignedElementRule;

impl ValidationRule for UnassignedElementRule {
    fn name(&self) -> &'static str {
        "unassigned-element"
    }

    fn description(&self) -> &'static str {
        "Warn about root elements that are on no page"
    }

    fn check_schema(&self, schema: &Schema) -> Vec<Diagnostic> {
        if schema.settings.pages().is_empty() {
            return Vec::new();
        }
        schema
            .elements
            .iter()
            .filter(|element| schema.settings.page_of(&element.id).is_none())
            .map(|element| {
                Diagnostic::warning(
                    "unassigned-element",
                    format!("'{}' is not on any page", element.label),
                )
                .at(&element.id)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_schema::{Element, ElementKind, Page};

    fn paged_schema() -> Schema {
        let mut schema = Schema::new("Paged");
        schema.elements = vec![
            Element::new("a", "A", ElementKind::Date),
            Element::new("b", "B", ElementKind::Time),
        ];
        let mut first = Page::new("p1", "First");
        first.elements.push("a".into());
        schema.settings.pages = Some(vec![first, Page::new("p2", "Second")]);
        schema
    }

    #[test]
    fn test_empty_page_warns() {
        let diagnostics = EmptyPageRule.check_schema(&paged_schema());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Page 'Second' has no elements");
    }

    #[test]
    fn test_unassigned_root_warns() {
        let diagnostics = UnassignedElementRule.check_schema(&paged_schema());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].element_id, Some("b".into()));
    }

    #[test]
    fn test_single_page_form_has_no_assignments() {
        let mut schema = paged_schema();
        schema.settings.pages = None;
        assert!(UnassignedElementRule.check_schema(&schema).is_empty());
    }
}

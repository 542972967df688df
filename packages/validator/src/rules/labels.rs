use crate::diagnostic::Diagnostic;
use crate::rules::ValidationRule;
use formcraft_schema::Element;

/// Every element, at any depth, needs a non-empty label
pub struct ElementLabelRule;

impl ValidationRule for ElementLabelRule {
    fn name(&self) -> &'static str {
        "element-label"
    }

    fn description(&self) -> &'static str {
        "Require a label on every element"
    }

    fn check_element(&self, element: &Element) -> Vec<Diagnostic> {
        if !element.label.trim().is_empty() {
            return Vec::new();
        }
        vec![Diagnostic::error(
            "element-label",
            format!(
                "Element {} ({}) must have a label",
                element.id,
                element.element_type()
            ),
        )
        .at(&element.id)]
    }
}

use crate::diagnostic::Diagnostic;
use crate::rules::ValidationRule;
use formcraft_schema::Element;

/// Select, radio and checkbox fields should offer something to choose
pub struct ChoiceOptionsRule;

impl ValidationRule for ChoiceOptionsRule {
    fn name(&self) -> &'static str {
        "choice-options"
    }

    fn description(&self) -> &'static str {
        "Warn about choice fields without options"
    }

    fn check_element(&self, element: &Element) -> Vec<Diagnostic> {
        let Some(options) = element.kind.options() else {
            return Vec::new();
        };
        if options.iter().any(|option| !option.trim().is_empty()) {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            "choice-options",
            format!("'{}' has no options to choose from", element.label),
        )
        .at(&element.id)
        .with_suggestion("Add at least one option or change the field type")]
    }
}

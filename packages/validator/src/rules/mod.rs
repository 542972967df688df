mod choice_options;
mod form;
mod labels;
mod pages;
mod redirect_url;

pub use choice_options::ChoiceOptionsRule;
pub use form::{FormNameRule, HasElementsRule, UniqueRootIdsRule};
pub use labels::ElementLabelRule;
pub use pages::{EmptyPageRule, UnassignedElementRule};
pub use redirect_url::RedirectUrlRule;

use crate::diagnostic::Diagnostic;
use formcraft_schema::{Element, Schema};

/// Trait for implementing validation rules
pub trait ValidationRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check form-level properties (metadata, settings, root list)
    fn check_schema(&self, _schema: &Schema) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Check one element; called for every element in document order
    fn check_element(&self, _element: &Element) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Registry of all available validation rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(FormNameRule),
                Box::new(HasElementsRule),
                Box::new(UniqueRootIdsRule),
                Box::new(ElementLabelRule),
                Box::new(ChoiceOptionsRule),
                Box::new(EmptyPageRule),
                Box::new(UnassignedElementRule),
                Box::new(RedirectUrlRule::new()),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn ValidationRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}

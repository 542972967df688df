use crate::diagnostic::{Diagnostic, DiagnosticLevel};
use crate::rules::RuleRegistry;
use formcraft_schema::{Element, Schema};

/// Options for configuring validation
#[derive(Debug)]
pub struct ValidateOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,

    /// Drop diagnostics less severe than this
    pub min_level: DiagnosticLevel,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            registry: None,
            min_level: DiagnosticLevel::Info,
        }
    }
}

impl ValidateOptions {
    /// Only report errors
    pub fn errors_only() -> Self {
        Self {
            min_level: DiagnosticLevel::Error,
            ..Self::default()
        }
    }
}

/// Validate a schema and return diagnostics: form-level findings first, then
/// element findings in document order
pub fn validate(schema: &Schema, options: ValidateOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let mut diagnostics = Vec::new();

    for rule in registry.rules() {
        diagnostics.extend(rule.check_schema(schema));
    }
    for element in &schema.elements {
        validate_element(element, &registry, &mut diagnostics);
    }

    diagnostics.retain(|diagnostic| diagnostic.level <= options.min_level);
    tracing::debug!(
        schema_id = %schema.id,
        findings = diagnostics.len(),
        "Validated schema"
    );
    diagnostics
}

/// Recursively check an element and its children
fn validate_element(element: &Element, registry: &RuleRegistry, diagnostics: &mut Vec<Diagnostic>) {
    for rule in registry.rules() {
        diagnostics.extend(rule.check_element(element));
    }
    for child in &element.elements {
        validate_element(child, registry, diagnostics);
    }
}

/// Error messages that block publishing; empty means the form is publishable
pub fn validate_schema(schema: &Schema) -> Vec<String> {
    validate(schema, ValidateOptions::errors_only())
        .into_iter()
        .map(|diagnostic| diagnostic.message)
        .collect()
}

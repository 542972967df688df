//! # Formcraft Validator
//!
//! Publish-time checks for form schemas. Errors block publishing; warnings
//! point at forms that will work but probably not the way the author meant.

mod diagnostic;
mod rules;
mod validator;

pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use rules::{RuleRegistry, ValidationRule};
pub use validator::{validate, validate_schema, ValidateOptions};

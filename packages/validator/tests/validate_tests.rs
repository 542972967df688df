//! Validation of complete forms loaded from JSON

use formcraft_schema::Schema;
use formcraft_validator::{validate, validate_schema, DiagnosticLevel, ValidateOptions};

const PUBLISHABLE: &str = r#"{
    "id": "form-1",
    "name": "Contact",
    "description": "",
    "elements": [
        { "id": "name", "type": "text", "label": "Name", "required": true },
        {
            "id": "grid", "type": "grid", "label": "Grid", "columns": 2,
            "elements": [
                { "id": "col-a", "type": "grid-column", "label": "Column", "span": 6,
                  "elements": [{ "id": "topic", "type": "select", "label": "Topic", "options": ["Sales", "Support"] }] },
                { "id": "col-b", "type": "grid-column", "label": "Column", "span": 6 }
            ]
        }
    ],
    "settings": {
        "submitButtonText": "Send",
        "successMessage": "Thanks!",
        "redirectUrl": "/thanks"
    },
    "createdAt": "2024-05-01T10:00:00Z",
    "updatedAt": "2024-05-01T10:00:00Z"
}"#;

const BROKEN: &str = r#"{
    "id": "form-2",
    "name": "",
    "description": "",
    "elements": [
        { "id": "dup", "type": "text", "label": "First" },
        { "id": "dup", "type": "email", "label": "Second" },
        {
            "id": "card", "type": "card", "label": "Card",
            "elements": [{ "id": "inner", "type": "radio", "label": " ", "options": [] }]
        }
    ],
    "settings": {
        "submitButtonText": "Submit",
        "successMessage": "Thank you for your submission!",
        "pages": [
            { "id": "p1", "title": "Start", "elements": ["card"] },
            { "id": "p2", "title": "Later", "elements": [] }
        ]
    },
    "createdAt": "2024-05-01T10:00:00Z",
    "updatedAt": "2024-05-01T10:00:00Z"
}"#;

#[test]
fn test_publishable_form_has_no_findings() {
    let schema = Schema::from_json(PUBLISHABLE).unwrap();
    assert!(validate_schema(&schema).is_empty());
    assert!(validate(&schema, ValidateOptions::default()).is_empty());
}

#[test]
fn test_broken_form_errors() {
    let schema = Schema::from_json(BROKEN).unwrap();
    assert_eq!(
        validate_schema(&schema),
        vec![
            "Form name is required".to_string(),
            "Duplicate element ID: dup".to_string(),
            "Element inner (radio) must have a label".to_string(),
        ]
    );
}

#[test]
fn test_broken_form_warnings() {
    let schema = Schema::from_json(BROKEN).unwrap();
    let warnings: Vec<_> = validate(&schema, ValidateOptions::default())
        .into_iter()
        .filter(|diagnostic| diagnostic.level == DiagnosticLevel::Warning)
        .map(|diagnostic| diagnostic.rule)
        .collect();

    assert_eq!(
        warnings,
        vec![
            "empty-page",
            "unassigned-element",
            "unassigned-element",
            "choice-options",
        ]
    );
}

#[test]
fn test_empty_form_needs_elements() {
    let schema = Schema::new("Blank");
    assert_eq!(
        validate_schema(&schema),
        vec!["Form must have at least one element".to_string()]
    );
}

#[test]
fn test_diagnostics_serialize_camel_case() {
    let schema = Schema::from_json(BROKEN).unwrap();
    let diagnostics = validate(&schema, ValidateOptions::errors_only());
    let json = serde_json::to_value(&diagnostics[1]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "level": "error",
            "rule": "unique-root-ids",
            "message": "Duplicate element ID: dup",
            "elementId": "dup"
        })
    );
}

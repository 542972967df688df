//! Error types for the schema model

use crate::element::{ElementId, ElementType};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid schema format: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate element id: {0}")]
    DuplicateId(ElementId),

    #[error("Element {parent} of type {element_type} cannot contain children")]
    ChildrenNotAllowed {
        parent: ElementId,
        element_type: ElementType,
    },

    #[error("Element {id} has {field} {value}, expected {min}..={max}")]
    OutOfRange {
        id: ElementId,
        field: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },
}

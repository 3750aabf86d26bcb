use thiserror::Error;

use super::value::{NumericValue, ValueKind};
use super::DataType;

/// Failure while turning a schema document into a [`super::DataDescription`].
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("could not parse schema JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("unknown data type `{0}`")]
    UnknownType(String),

    #[error("invalid array spec: {0}")]
    InvalidArraySpec(&'static str),

    #[error("struct field `{field}`: {source}")]
    StructField {
        field: String,
        source: Box<SchemaError>,
    },

    #[error("schema nesting deeper than {max} levels")]
    TooDeep { max: usize },
}

/// Failure of a runtime value against a parsed description.
///
/// `Element` and `Field` wrap the failure of a nested value so the rendered
/// message carries the path down to the offending element.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("expected {expected} value, got {found}")]
    TypeMismatch { expected: DataType, found: ValueKind },

    #[error("value {value} not in range [{min}, {max}]")]
    OutOfRange {
        value: NumericValue,
        min: NumericValue,
        max: NumericValue,
    },

    #[error("value {value} does not match step {step} from {min}")]
    StepViolation {
        value: NumericValue,
        step: NumericValue,
        min: NumericValue,
    },

    #[error("expected exactly {expected} elements, got {found}")]
    LengthMismatch { expected: u32, found: usize },

    #[error("field `{0}` is not declared")]
    UnknownField(String),

    #[error("element {index}: {source}")]
    Element {
        index: usize,
        source: Box<ValidationError>,
    },

    #[error("field `{name}`: {source}")]
    Field {
        name: String,
        source: Box<ValidationError>,
    },
}

use serde::{Deserialize, Serialize};

use crate::schema::{DataDescription, ValidationError, Value};

/// A named action (command) a device exposes, with typed input and output.
///
/// Actions that take or return nothing use a `void` description on the
/// corresponding side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDescription {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub input_data: DataDescription,
    pub output_data: DataDescription,
}

impl ActionDescription {
    /// Check caller-supplied arguments against the input description.
    pub fn validate_input(&self, value: &Value) -> Result<(), ValidationError> {
        self.input_data.validate(value)
    }

    /// Check a device response against the output description.
    pub fn validate_output(&self, value: &Value) -> Result<(), ValidationError> {
        self.output_data.validate(value)
    }
}

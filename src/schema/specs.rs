//! Constraint payloads, one per data type.
//!
//! Leaf specs deserialize directly from the `specs` payload of a schema
//! document; absent fields fall back to the defaults in [`super::defaults`],
//! while fields present in the payload (including explicit zeros) override
//! them. Composite specs are assembled by the parser in the parent module.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::ValidationError;
use super::value::{NumericValue, Value, ValueKind};
use super::DataDescription;

/// Text constrained to a maximum length in bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringSpec {
    /// Zero means unlimited.
    #[serde(default)]
    pub length: u32,
}

impl StringSpec {
    pub(super) fn check_str(&self, v: &str) -> Result<(), ValidationError> {
        if self.length != 0 && v.len() > self.length as usize {
            return Err(ValidationError::OutOfRange {
                value: NumericValue::Int(v.len() as i64),
                min: NumericValue::Int(0),
                max: NumericValue::Int(self.length as i64),
            });
        }
        Ok(())
    }
}

/// Signed integer with optional step alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegerSpec {
    #[serde(default = "default_integer_min")]
    pub min: i64,
    #[serde(default = "default_integer_max")]
    pub max: i64,
    /// Zero disables the step constraint.
    #[serde(default)]
    pub step: i64,
    /// Display unit, never part of validation.
    #[serde(default)]
    pub unit: String,
}

fn default_integer_min() -> i64 {
    defaults::INTEGER_MIN
}

fn default_integer_max() -> i64 {
    defaults::INTEGER_MAX
}

impl Default for IntegerSpec {
    fn default() -> Self {
        IntegerSpec {
            min: defaults::INTEGER_MIN,
            max: defaults::INTEGER_MAX,
            step: 0,
            unit: String::new(),
        }
    }
}

impl IntegerSpec {
    pub(super) fn check_int(&self, v: i64) -> Result<(), ValidationError> {
        if v < self.min || v > self.max {
            return Err(ValidationError::OutOfRange {
                value: NumericValue::Int(v),
                min: NumericValue::Int(self.min),
                max: NumericValue::Int(self.max),
            });
        }
        // offsets wrap at the i64 boundary; the default min is i64::MIN
        if self.step != 0 && v.wrapping_sub(self.min).wrapping_rem(self.step) != 0 {
            return Err(ValidationError::StepViolation {
                value: NumericValue::Int(v),
                step: NumericValue::Int(self.step),
                min: NumericValue::Int(self.min),
            });
        }
        Ok(())
    }
}

/// Floating-point number with optional step alignment under a tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberSpec {
    #[serde(default = "default_number_min")]
    pub min: f64,
    #[serde(default = "default_number_max")]
    pub max: f64,
    /// A magnitude within `precision` of zero disables the step constraint.
    #[serde(default)]
    pub step: f64,
    /// Display unit, never part of validation.
    #[serde(default)]
    pub unit: String,
    /// Tolerance for step alignment under floating round-off.
    #[serde(default = "default_number_precision")]
    pub precision: f64,
}

fn default_number_min() -> f64 {
    defaults::NUMBER_MIN
}

fn default_number_max() -> f64 {
    defaults::NUMBER_MAX
}

fn default_number_precision() -> f64 {
    defaults::NUMBER_PRECISION
}

impl Default for NumberSpec {
    fn default() -> Self {
        NumberSpec {
            min: defaults::NUMBER_MIN,
            max: defaults::NUMBER_MAX,
            step: 0.0,
            unit: String::new(),
            precision: defaults::NUMBER_PRECISION,
        }
    }
}

impl NumberSpec {
    pub(super) fn check_float(&self, v: f64) -> Result<(), ValidationError> {
        if v < self.min || v > self.max {
            return Err(ValidationError::OutOfRange {
                value: NumericValue::Float(v),
                min: NumericValue::Float(self.min),
                max: NumericValue::Float(self.max),
            });
        }
        if self.step.abs() > self.precision {
            let remainder = (v - self.min) % self.step;
            // tolerate round-off on either side of a step boundary
            if (remainder - self.step).abs() > self.precision && remainder > self.precision {
                return Err(ValidationError::StepViolation {
                    value: NumericValue::Float(v),
                    step: NumericValue::Float(self.step),
                    min: NumericValue::Float(self.min),
                });
            }
        }
        Ok(())
    }
}

/// Display strings for the two states; validation only checks the kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BooleanSpec {
    #[serde(default)]
    pub true_desc: String,
    #[serde(default)]
    pub false_desc: String,
}

/// Fixed-size sequence with one shared element description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArraySpec {
    /// Exact element count; sequences of any other length are rejected.
    pub length: u32,
    /// Description every element is validated against.
    pub data: Box<DataDescription>,
}

impl ArraySpec {
    pub(super) fn check_items(&self, items: &[Value]) -> Result<(), ValidationError> {
        if items.len() != self.length as usize {
            return Err(ValidationError::LengthMismatch {
                expected: self.length,
                found: items.len(),
            });
        }
        for (index, item) in items.iter().enumerate() {
            self.data
                .validate(item)
                .map_err(|source| ValidationError::Element {
                    index,
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }
}

/// Named fields, each with its own description.
///
/// Validation walks the fields present in the value: undeclared fields are
/// rejected, declared fields absent from the value are not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StructSpec {
    pub fields: BTreeMap<String, DataDescription>,
}

impl StructSpec {
    pub(super) fn check_fields(
        &self,
        value_fields: &BTreeMap<String, Value>,
    ) -> Result<(), ValidationError> {
        for (name, field_value) in value_fields {
            let desc = self
                .fields
                .get(name)
                .ok_or_else(|| ValidationError::UnknownField(name.clone()))?;
            // a null field is rejected even when its description is void
            if matches!(field_value, Value::Null) {
                return Err(ValidationError::Field {
                    name: name.clone(),
                    source: Box::new(ValidationError::TypeMismatch {
                        expected: desc.data_type,
                        found: ValueKind::Null,
                    }),
                });
            }
            desc.validate(field_value)
                .map_err(|source| ValidationError::Field {
                    name: name.clone(),
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }
}

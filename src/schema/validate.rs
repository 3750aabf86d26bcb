//! Validation dispatch over parsed descriptions.
//!
//! Validation is a pure predicate: it never mutates the description tree or
//! the value, so a parsed schema can be shared across threads and checked
//! against payloads concurrently.

use super::error::ValidationError;
use super::value::Value;
use super::{DataDescription, DataSpec, DataType};

impl DataDescription {
    /// Check a runtime value against this description.
    ///
    /// Numeric kinds accept both integer and float values: an integer is
    /// widened for a number description, and a float stands in for an
    /// integer only when it is exactly integral.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match &self.spec {
            DataSpec::Void => Ok(()),
            DataSpec::String(spec) => match value {
                Value::String(s) => spec.check_str(s),
                other => Err(mismatch(DataType::String, other)),
            },
            DataSpec::Boolean(_) => match value {
                Value::Bool(_) => Ok(()),
                other => Err(mismatch(DataType::Boolean, other)),
            },
            DataSpec::Integer(spec) => match value {
                Value::Int(v) => spec.check_int(*v),
                Value::Float(v) => match as_integral(*v) {
                    Some(i) => spec.check_int(i),
                    None => Err(mismatch(DataType::Integer, value)),
                },
                other => Err(mismatch(DataType::Integer, other)),
            },
            DataSpec::Number(spec) => match value {
                Value::Float(v) => spec.check_float(*v),
                Value::Int(v) => spec.check_float(*v as f64),
                other => Err(mismatch(DataType::Number, other)),
            },
            DataSpec::Array(spec) => match value {
                Value::Array(items) => spec.check_items(items),
                other => Err(mismatch(DataType::Array, other)),
            },
            DataSpec::Struct(spec) => match value {
                Value::Map(fields) => spec.check_fields(fields),
                other => Err(mismatch(DataType::Struct, other)),
            },
        }
    }
}

fn mismatch(expected: DataType, found: &Value) -> ValidationError {
    ValidationError::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

/// The integer a float represents exactly, if any.
///
/// Only exactly-integral floats qualify; NaN never does. Rounding is
/// half-away-from-zero, so negative values convert exactly.
fn as_integral(v: f64) -> Option<i64> {
    let rounded = v.round();
    if v != rounded {
        return None;
    }
    Some(rounded as i64)
}

#[cfg(test)]
mod tests {
    use super::super::Value;
    use super::*;
    use serde_json::json;

    fn parse(schema: serde_json::Value) -> DataDescription {
        DataDescription::parse_value(schema).unwrap()
    }

    #[test]
    fn test_integral_floats_accepted_for_integer() {
        let desc = parse(json!({
            "type": "integer",
            "specs": { "min": -10, "max": 10 }
        }));
        assert!(desc.validate(&Value::Float(5.0)).is_ok());
        assert!(desc.validate(&Value::Float(-3.0)).is_ok());
        assert!(desc.validate(&Value::Float(0.0)).is_ok());
    }

    #[test]
    fn test_fractional_floats_rejected_for_integer() {
        let desc = parse(json!({ "type": "integer", "specs": {} }));
        for bad in [5.3, -3.5, 0.000001, f64::NAN] {
            assert!(matches!(
                desc.validate(&Value::Float(bad)),
                Err(ValidationError::TypeMismatch { .. })
            ));
        }
    }

    #[test]
    fn test_negative_integral_float_converts_exactly() {
        // -3.0 must land on -3, not on a neighbouring integer
        let desc = parse(json!({
            "type": "integer",
            "specs": { "min": -3, "max": -3 }
        }));
        assert!(desc.validate(&Value::Float(-3.0)).is_ok());
    }

    #[test]
    fn test_integers_widened_for_number() {
        let desc = parse(json!({
            "type": "number",
            "specs": { "min": 0, "max": 5, "step": 0.5 }
        }));
        assert!(desc.validate(&Value::Int(0)).is_ok());
        assert!(desc.validate(&Value::Int(2)).is_ok());
        assert!(desc.validate(&Value::Int(4)).is_ok());
        assert!(desc.validate(&Value::Float(1.2)).is_err());
    }

    #[test]
    fn test_type_mismatches() {
        let desc = parse(json!({ "type": "integer", "specs": { "min": 0, "max": 5 } }));
        let err = desc.validate(&Value::from("1")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                expected: DataType::Integer,
                found: crate::schema::ValueKind::String,
            }
        );

        let desc = parse(json!({ "type": "string", "specs": { "length": 5 } }));
        assert!(desc.validate(&Value::Int(1)).is_err());

        let desc = parse(json!({ "type": "boolean", "specs": {} }));
        assert!(desc.validate(&Value::Bool(false)).is_ok());
        assert!(desc.validate(&Value::Int(0)).is_err());
    }

    #[test]
    fn test_void_accepts_anything() {
        let desc = parse(json!({ "type": "void", "specs": {} }));
        assert!(desc.validate(&Value::Null).is_ok());
        assert!(desc.validate(&Value::from("text")).is_ok());
        assert!(desc.validate(&Value::Float(1.5)).is_ok());
        assert!(desc.validate(&Value::Array(vec![])).is_ok());
    }

    #[test]
    fn test_null_rejected_for_concrete_kinds() {
        for kind in ["string", "integer", "number", "boolean", "array", "struct"] {
            let schema = if kind == "array" {
                json!({ "type": "array", "specs": { "length": 1, "data": { "type": "void", "specs": {} } } })
            } else {
                json!({ "type": kind, "specs": {} })
            };
            let desc = parse(schema);
            assert!(
                desc.validate(&Value::Null).is_err(),
                "{kind} should reject null"
            );
        }
    }

    #[test]
    fn test_array_validation() {
        let desc = parse(json!({
            "type": "array",
            "specs": {
                "length": 5,
                "data": { "type": "number", "specs": { "min": 50, "max": 100 } }
            }
        }));

        let short = Value::Array(vec![Value::Float(60.0); 3]);
        assert!(matches!(
            desc.validate(&short),
            Err(ValidationError::LengthMismatch {
                expected: 5,
                found: 3
            })
        ));

        let out_of_range = Value::Array(vec![
            Value::Int(60),
            Value::Int(70),
            Value::Int(120),
            Value::Int(80),
            Value::Int(90),
        ]);
        let err = desc.validate(&out_of_range).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Element { index: 2, ref source }
                if matches!(**source, ValidationError::OutOfRange { .. })
        ));

        let ok = Value::Array(vec![
            Value::Float(50.0),
            Value::Float(62.5),
            Value::Float(75.0),
            Value::Float(87.5),
            Value::Float(100.0),
        ]);
        assert!(desc.validate(&ok).is_ok());
    }

    #[test]
    fn test_struct_validation() {
        let desc = parse(json!({
            "type": "struct",
            "specs": {
                "name": { "type": "string", "specs": { "length": 15 } },
                "age": { "type": "integer", "specs": { "min": 0, "max": 15 } }
            }
        }));

        let ok = Value::from(json!({ "name": "123456", "age": 0 }));
        assert!(desc.validate(&ok).is_ok());

        let undeclared = Value::from(json!({ "name": "12", "be": 0 }));
        let err = desc.validate(&undeclared).unwrap_err();
        assert_eq!(err, ValidationError::UnknownField("be".to_string()));

        let undeclared = Value::from(json!({ "test": "12", "age": 0 }));
        assert!(matches!(
            desc.validate(&undeclared),
            Err(ValidationError::UnknownField(ref name)) if name == "test"
        ));

        let wrong_types = Value::from(json!({ "name": 12, "age": "name" }));
        let err = desc.validate(&wrong_types).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Field { ref source, .. }
                if matches!(**source, ValidationError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_struct_accepts_subset_of_declared_fields() {
        // declared-but-absent fields are deliberately not checked
        let desc = parse(json!({
            "type": "struct",
            "specs": {
                "name": { "type": "string", "specs": { "length": 15 } },
                "age": { "type": "integer", "specs": { "min": 0, "max": 15 } }
            }
        }));
        assert!(desc.validate(&Value::from(json!({ "name": "x" }))).is_ok());
        assert!(desc.validate(&Value::from(json!({}))).is_ok());
    }

    #[test]
    fn test_struct_rejects_null_field_even_for_void() {
        let desc = parse(json!({
            "type": "struct",
            "specs": { "ack": { "type": "void", "specs": {} } }
        }));
        let err = desc.validate(&Value::from(json!({ "ack": null }))).unwrap_err();
        assert!(matches!(err, ValidationError::Field { ref name, .. } if name == "ack"));
    }

    #[test]
    fn test_struct_accepts_renamed_record_fields() {
        use serde::Serialize;

        #[derive(Serialize)]
        struct Reading {
            #[serde(rename = "temp")]
            temperature: f64,
        }

        let desc = parse(json!({
            "type": "struct",
            "specs": { "temp": { "type": "number", "specs": { "min": -40, "max": 125 } } }
        }));
        let value = Value::from_serialize(&Reading { temperature: 21.5 }).unwrap();
        assert!(desc.validate(&value).is_ok());
    }

    #[test]
    fn test_nested_struct_error_carries_path() {
        let desc = parse(json!({
            "type": "struct",
            "specs": {
                "window": {
                    "type": "array",
                    "specs": {
                        "length": 2,
                        "data": { "type": "integer", "specs": { "min": 0, "max": 10 } }
                    }
                }
            }
        }));
        let err = desc
            .validate(&Value::from(json!({ "window": [1, 99] })))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "field `window`: element 1: value 99 not in range [0, 10]"
        );
    }
}

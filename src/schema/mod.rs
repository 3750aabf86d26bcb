//! Typed data descriptions and runtime payload validation.
//!
//! A description is authored as a compact JSON document with a `type`
//! discriminator and a type-specific `specs` payload:
//!
//! ```json
//! { "type": "integer", "specs": { "min": 0, "max": 100, "step": 5, "unit": "%" } }
//! ```
//!
//! [`DataDescription::parse_str`] builds the description tree once, at model
//! load time; [`DataDescription::validate`] then checks arbitrary runtime
//! [`Value`]s against it, read-only.

pub mod defaults;

mod error;
mod specs;
mod validate;
mod value;

pub use error::{SchemaError, ValidationError};
pub use specs::{ArraySpec, BooleanSpec, IntegerSpec, NumberSpec, StringSpec, StructSpec};
pub use value::{NumericValue, Value, ValueKind};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// The closed set of schema kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Struct,
    Void,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Integer => "integer",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::Array => "array",
            DataType::Struct => "struct",
            DataType::Void => "void",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(DataType::String),
            "integer" => Ok(DataType::Integer),
            "number" => Ok(DataType::Number),
            "boolean" => Ok(DataType::Boolean),
            "array" => Ok(DataType::Array),
            "struct" => Ok(DataType::Struct),
            "void" => Ok(DataType::Void),
            other => Err(SchemaError::UnknownType(other.to_string())),
        }
    }
}

/// Constraint payload for one schema kind.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSpec {
    String(StringSpec),
    Integer(IntegerSpec),
    Number(NumberSpec),
    Boolean(BooleanSpec),
    Array(ArraySpec),
    Struct(StructSpec),
    Void,
}

impl DataSpec {
    /// The data type this payload belongs to.
    pub fn data_type(&self) -> DataType {
        match self {
            DataSpec::String(_) => DataType::String,
            DataSpec::Integer(_) => DataType::Integer,
            DataSpec::Number(_) => DataType::Number,
            DataSpec::Boolean(_) => DataType::Boolean,
            DataSpec::Array(_) => DataType::Array,
            DataSpec::Struct(_) => DataType::Struct,
            DataSpec::Void => DataType::Void,
        }
    }
}

/// A typed, possibly nested description of an acceptable value shape.
///
/// `data_type` and `spec` must agree; the parser guarantees this, callers
/// assembling descriptions in code should construct them via
/// `DataDescription::from(spec)`. The tree owns its nested descriptions
/// outright: there is no sharing and no way to express a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct DataDescription {
    pub data_type: DataType,
    pub spec: DataSpec,
}

impl From<DataSpec> for DataDescription {
    fn from(spec: DataSpec) -> Self {
        DataDescription {
            data_type: spec.data_type(),
            spec,
        }
    }
}

#[derive(Deserialize)]
struct RawDescription {
    #[serde(rename = "type")]
    data_type: String,
    specs: Option<serde_json::Value>,
}

impl DataDescription {
    /// Parse a schema document from JSON text.
    pub fn parse_str(input: &str) -> Result<Self, SchemaError> {
        let raw: serde_json::Value = serde_json::from_str(input)?;
        Self::parse_value(raw)
    }

    /// Parse an already-decoded schema document.
    pub fn parse_value(value: serde_json::Value) -> Result<Self, SchemaError> {
        Self::parse_at(value, 0)
    }

    fn parse_at(value: serde_json::Value, depth: usize) -> Result<Self, SchemaError> {
        if depth > defaults::MAX_NESTING_DEPTH {
            return Err(SchemaError::TooDeep {
                max: defaults::MAX_NESTING_DEPTH,
            });
        }

        let raw: RawDescription = serde_json::from_value(value)?;
        let data_type: DataType = raw.data_type.parse()?;
        let spec = match data_type {
            DataType::String => DataSpec::String(leaf_specs(raw.specs)?),
            DataType::Integer => DataSpec::Integer(leaf_specs(raw.specs)?),
            DataType::Number => DataSpec::Number(leaf_specs(raw.specs)?),
            DataType::Boolean => DataSpec::Boolean(leaf_specs(raw.specs)?),
            DataType::Array => DataSpec::Array(parse_array_specs(raw.specs, depth)?),
            DataType::Struct => DataSpec::Struct(parse_struct_specs(raw.specs, depth)?),
            DataType::Void => DataSpec::Void,
        };
        Ok(DataDescription { data_type, spec })
    }
}

/// Decode a leaf payload onto its defaulted spec struct.
///
/// Absent fields keep the defaults; fields present in the payload override
/// them, explicit zeros included. An absent payload means all defaults.
fn leaf_specs<T: DeserializeOwned + Default>(
    specs: Option<serde_json::Value>,
) -> Result<T, SchemaError> {
    match specs {
        Some(raw) => serde_json::from_value(raw).map_err(SchemaError::from),
        None => Ok(T::default()),
    }
}

fn parse_array_specs(
    specs: Option<serde_json::Value>,
    depth: usize,
) -> Result<ArraySpec, SchemaError> {
    #[derive(Deserialize)]
    struct RawArraySpec {
        #[serde(default)]
        length: u32,
        data: Option<serde_json::Value>,
    }

    let Some(raw) = specs else {
        return Err(SchemaError::InvalidArraySpec("length must be positive"));
    };
    let raw: RawArraySpec = serde_json::from_value(raw)?;
    if raw.length == 0 {
        return Err(SchemaError::InvalidArraySpec("length must be positive"));
    }
    let Some(data) = raw.data else {
        return Err(SchemaError::InvalidArraySpec(
            "missing element data description",
        ));
    };
    let element = DataDescription::parse_at(data, depth + 1)?;
    Ok(ArraySpec {
        length: raw.length,
        data: Box::new(element),
    })
}

fn parse_struct_specs(
    specs: Option<serde_json::Value>,
    depth: usize,
) -> Result<StructSpec, SchemaError> {
    let raw: BTreeMap<String, serde_json::Value> = match specs {
        Some(value) => serde_json::from_value(value)?,
        None => BTreeMap::new(),
    };

    let mut fields = BTreeMap::new();
    for (name, value) in raw {
        let desc =
            DataDescription::parse_at(value, depth + 1).map_err(|source| SchemaError::StructField {
                field: name.clone(),
                source: Box::new(source),
            })?;
        fields.insert(name, desc);
    }
    Ok(StructSpec { fields })
}

impl Serialize for DataDescription {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct EmptySpecs {}

        let mut state = serializer.serialize_struct("DataDescription", 2)?;
        state.serialize_field("type", &self.data_type)?;
        match &self.spec {
            DataSpec::String(spec) => state.serialize_field("specs", spec)?,
            DataSpec::Integer(spec) => state.serialize_field("specs", spec)?,
            DataSpec::Number(spec) => state.serialize_field("specs", spec)?,
            DataSpec::Boolean(spec) => state.serialize_field("specs", spec)?,
            DataSpec::Array(spec) => state.serialize_field("specs", spec)?,
            DataSpec::Struct(spec) => state.serialize_field("specs", spec)?,
            DataSpec::Void => state.serialize_field("specs", &EmptySpecs {})?,
        }
        state.end()
    }
}

impl<'de> Deserialize<'de> for DataDescription {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        DataDescription::parse_value(raw).map_err(de::Error::custom)
    }
}

//! Thing models for devices and sensors.
//!
//! A thing model names the properties, events and actions of one device
//! class, each carrying a recursively-typed data description. Descriptions
//! are parsed once from a compact JSON document and then used, read-only, to
//! validate runtime payloads: incoming sensor readings, outgoing command
//! arguments, event reports.
//!
//! ```
//! use thingmodel::{ThingModel, Value};
//!
//! let model = ThingModel::from_json(r#"{
//!     "name": "thermostat",
//!     "properties": [{
//!         "name": "target",
//!         "access_mode": "wr",
//!         "data": { "type": "number", "specs": { "min": 5, "max": 30, "step": 0.5 } }
//!     }]
//! }"#)?;
//!
//! assert!(model.validate_property("target", &Value::Float(21.5)).is_ok());
//! assert!(model.validate_property("target", &Value::Float(21.3)).is_err());
//! # Ok::<(), thingmodel::ModelError>(())
//! ```

pub mod model;
pub mod schema;

pub use model::{
    AccessMode, ActionDescription, EventDescription, EventType, ModelError, PropertyDescription,
    ThingModel,
};
pub use schema::{
    ArraySpec, BooleanSpec, DataDescription, DataSpec, DataType, IntegerSpec, NumberSpec,
    NumericValue, SchemaError, StringSpec, StructSpec, ValidationError, Value, ValueKind,
};

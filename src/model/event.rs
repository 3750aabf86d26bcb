use serde::{Deserialize, Serialize};

use crate::schema::{DataDescription, ValidationError, Value};

/// Severity class attached to an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Routine reports and notifications.
    #[default]
    Info,
    Warning,
    /// A function is failing or unavailable.
    Error,
    /// Urgent condition, e.g. a sensor tripping on a hazard.
    Alert,
}

/// A named event a device reports, with the payload shape it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDescription {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub event_type: EventType,
    pub data: DataDescription,
}

impl EventDescription {
    /// Check a reported payload against the event's data description.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.data.validate(value)
    }
}

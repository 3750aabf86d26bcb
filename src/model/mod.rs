//! Thing models: the named properties, events and actions of one device or
//! sensor class.
//!
//! A model is loaded once from a JSON document; every embedded data
//! description is parsed through the [`crate::schema`] engine at that point.
//! After loading, the named lists are mutated only through the add/remove
//! operations here. None of this is internally synchronized: concurrent
//! mutation and lookup need external locking.

mod action;
mod event;
mod property;

pub use action::ActionDescription;
pub use event::{EventDescription, EventType};
pub use property::{AccessMode, PropertyDescription};

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::{ValidationError, Value};

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("could not parse thing model JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("{kind} name cannot be empty")]
    EmptyName { kind: &'static str },

    #[error("duplicate {kind} name `{name}`")]
    DuplicateName { kind: &'static str, name: String },

    #[error("invalid access mode `{0}`")]
    InvalidAccessMode(String),

    #[error("{kind} `{name}` not found")]
    NotFound { kind: &'static str, name: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// The thing model of one device or sensor class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThingModel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub properties: Vec<PropertyDescription>,
    #[serde(default)]
    pub events: Vec<EventDescription>,
    #[serde(default)]
    pub actions: Vec<ActionDescription>,
}

impl ThingModel {
    /// Load a thing model document, parsing every contained data description.
    pub fn from_json(input: &str) -> Result<Self, ModelError> {
        let model: ThingModel = serde_json::from_str(input)?;
        check_names("property", model.properties.iter().map(|p| p.name.as_str()))?;
        check_names("event", model.events.iter().map(|e| e.name.as_str()))?;
        check_names("action", model.actions.iter().map(|a| a.name.as_str()))?;
        log::debug!(
            "loaded thing model '{}': {} properties, {} events, {} actions",
            model.name,
            model.properties.len(),
            model.events.len(),
            model.actions.len()
        );
        Ok(model)
    }

    /// Serialize the whole model back to its wire shape.
    pub fn to_json(&self) -> Result<String, ModelError> {
        serde_json::to_string(self).map_err(Into::into)
    }

    pub fn get_property(&self, name: &str) -> Option<&PropertyDescription> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn get_event(&self, name: &str) -> Option<&EventDescription> {
        self.events.iter().find(|e| e.name == name)
    }

    pub fn get_action(&self, name: &str) -> Option<&ActionDescription> {
        self.actions.iter().find(|a| a.name == name)
    }

    /// Add a property; empty and duplicate names are rejected.
    pub fn add_property(&mut self, property: PropertyDescription) -> Result<(), ModelError> {
        if property.name.is_empty() {
            return Err(ModelError::EmptyName { kind: "property" });
        }
        if self.get_property(&property.name).is_some() {
            return Err(ModelError::DuplicateName {
                kind: "property",
                name: property.name,
            });
        }
        log::debug!("adding property '{}'", property.name);
        self.properties.push(property);
        Ok(())
    }

    /// Add an event; empty and duplicate names are rejected.
    pub fn add_event(&mut self, event: EventDescription) -> Result<(), ModelError> {
        if event.name.is_empty() {
            return Err(ModelError::EmptyName { kind: "event" });
        }
        if self.get_event(&event.name).is_some() {
            return Err(ModelError::DuplicateName {
                kind: "event",
                name: event.name,
            });
        }
        log::debug!("adding event '{}'", event.name);
        self.events.push(event);
        Ok(())
    }

    /// Add an action; empty and duplicate names are rejected.
    pub fn add_action(&mut self, action: ActionDescription) -> Result<(), ModelError> {
        if action.name.is_empty() {
            return Err(ModelError::EmptyName { kind: "action" });
        }
        if self.get_action(&action.name).is_some() {
            return Err(ModelError::DuplicateName {
                kind: "action",
                name: action.name,
            });
        }
        log::debug!("adding action '{}'", action.name);
        self.actions.push(action);
        Ok(())
    }

    /// Remove the named property; returns whether it existed.
    pub fn remove_property(&mut self, name: &str) -> bool {
        let before = self.properties.len();
        self.properties.retain(|p| p.name != name);
        self.properties.len() != before
    }

    /// Remove the named event; returns whether it existed.
    pub fn remove_event(&mut self, name: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.name != name);
        self.events.len() != before
    }

    /// Remove the named action; returns whether it existed.
    pub fn remove_action(&mut self, name: &str) -> bool {
        let before = self.actions.len();
        self.actions.retain(|a| a.name != name);
        self.actions.len() != before
    }

    /// Check a value against the named property's data description.
    pub fn validate_property(&self, name: &str, value: &Value) -> Result<(), ModelError> {
        let property = self.get_property(name).ok_or_else(|| ModelError::NotFound {
            kind: "property",
            name: name.to_string(),
        })?;
        property.validate(value).map_err(Into::into)
    }

    /// Check a payload against the named event's data description.
    pub fn validate_event(&self, name: &str, value: &Value) -> Result<(), ModelError> {
        let event = self.get_event(name).ok_or_else(|| ModelError::NotFound {
            kind: "event",
            name: name.to_string(),
        })?;
        event.validate(value).map_err(Into::into)
    }

    /// Check arguments against the named action's input description.
    pub fn validate_action_input(&self, name: &str, value: &Value) -> Result<(), ModelError> {
        let action = self.get_action(name).ok_or_else(|| ModelError::NotFound {
            kind: "action",
            name: name.to_string(),
        })?;
        action.validate_input(value).map_err(Into::into)
    }

    /// Check a response against the named action's output description.
    pub fn validate_action_output(&self, name: &str, value: &Value) -> Result<(), ModelError> {
        let action = self.get_action(name).ok_or_else(|| ModelError::NotFound {
            kind: "action",
            name: name.to_string(),
        })?;
        action.validate_output(value).map_err(Into::into)
    }

    pub fn get_readable_properties(&self) -> Vec<&PropertyDescription> {
        self.properties.iter().filter(|p| p.readable()).collect()
    }

    pub fn get_writable_properties(&self) -> Vec<&PropertyDescription> {
        self.properties.iter().filter(|p| p.writable()).collect()
    }
}

fn check_names<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), ModelError> {
    let mut seen = HashSet::new();
    for name in names {
        if name.is_empty() {
            return Err(ModelError::EmptyName { kind });
        }
        if !seen.insert(name) {
            return Err(ModelError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

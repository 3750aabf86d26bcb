use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::ModelError;
use crate::schema::{DataDescription, ValidationError, Value};

/// Access support for a property: `r` marks it readable, `w` writable.
///
/// Serialized as the compact string used on the wire (`"wr"`, `"r"`, `"w"`);
/// an absent or empty string defaults to read-write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessMode {
    pub read: bool,
    pub write: bool,
}

impl AccessMode {
    pub const READ_WRITE: AccessMode = AccessMode {
        read: true,
        write: true,
    };
    pub const READ_ONLY: AccessMode = AccessMode {
        read: true,
        write: false,
    };
    pub const WRITE_ONLY: AccessMode = AccessMode {
        read: false,
        write: true,
    };
}

impl Default for AccessMode {
    fn default() -> Self {
        AccessMode::READ_WRITE
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.write {
            f.write_str("w")?;
        }
        if self.read {
            f.write_str("r")?;
        }
        Ok(())
    }
}

impl FromStr for AccessMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > 2 || !s.bytes().all(|c| c == b'r' || c == b'w') {
            return Err(ModelError::InvalidAccessMode(s.to_string()));
        }
        Ok(AccessMode {
            read: s.contains('r'),
            write: s.contains('w'),
        })
    }
}

impl Serialize for AccessMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccessMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(AccessMode::default());
        }
        raw.parse().map_err(de::Error::custom)
    }
}

/// A named, typed property of a device or sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescription {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Whether a reported state must always carry this property.
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub access_mode: AccessMode,
    pub data: DataDescription,
}

impl PropertyDescription {
    pub fn readable(&self) -> bool {
        self.access_mode.read
    }

    pub fn writable(&self) -> bool {
        self.access_mode.write
    }

    /// Check a runtime value against the property's data description.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.data.validate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_mode_parse() {
        assert_eq!("wr".parse::<AccessMode>().unwrap(), AccessMode::READ_WRITE);
        assert_eq!("rw".parse::<AccessMode>().unwrap(), AccessMode::READ_WRITE);
        assert_eq!("r".parse::<AccessMode>().unwrap(), AccessMode::READ_ONLY);
        assert_eq!("w".parse::<AccessMode>().unwrap(), AccessMode::WRITE_ONLY);
        assert!("x".parse::<AccessMode>().is_err());
        assert!("rwx".parse::<AccessMode>().is_err());
    }

    #[test]
    fn test_access_mode_display() {
        assert_eq!(AccessMode::READ_WRITE.to_string(), "wr");
        assert_eq!(AccessMode::READ_ONLY.to_string(), "r");
        assert_eq!(AccessMode::WRITE_ONLY.to_string(), "w");
    }

    #[test]
    fn test_access_mode_absent_or_empty_defaults_to_read_write() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default)]
            mode: AccessMode,
        }

        let w: Wrapper = serde_json::from_str("{}").unwrap();
        assert_eq!(w.mode, AccessMode::READ_WRITE);
        let w: Wrapper = serde_json::from_str(r#"{ "mode": "" }"#).unwrap();
        assert_eq!(w.mode, AccessMode::READ_WRITE);
        let w: Wrapper = serde_json::from_str(r#"{ "mode": "r" }"#).unwrap();
        assert_eq!(w.mode, AccessMode::READ_ONLY);
    }
}

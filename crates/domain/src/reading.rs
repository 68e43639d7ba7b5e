//! Canonical sensor readings.
//!
//! A reading is the normalized form of one measurement from a
//! temperature/humidity sensor, keyed by `(instance, tag)`. At most one
//! reading per key is meaningful at a time — newer readings supersede older
//! ones wherever they are stored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::instance::InstanceId;
use crate::time::Timestamp;

/// The measurement kind carried by a [`Reading`].
///
/// The serialized form is the full lowercase name; the short `t` / `h`
/// aliases are also accepted on deserialization, for callers that key on
/// single-letter tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingTag {
    #[serde(alias = "t")]
    Temperature,
    #[serde(alias = "h")]
    Humidity,
}

impl ReadingTag {
    /// The canonical lowercase token, used in topics and response bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
        }
    }
}

impl fmt::Display for ReadingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temperature" | "t" => Ok(Self::Temperature),
            "humidity" | "h" => Ok(Self::Humidity),
            other => Err(ParseError::UnknownTag(other.to_string())),
        }
    }
}

/// One normalized measurement from a resolved sensor instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Logical sensor position this reading belongs to.
    pub instance: InstanceId,
    /// Measurement kind.
    pub tag: ReadingTag,
    /// Measured value (°C for temperature, percent for humidity).
    pub value: f64,
    /// Decode-time timestamp; shared by readings derived from the same line.
    #[serde(rename = "ts")]
    pub observed_at: Timestamp,
}

impl Reading {
    /// Retained-state topic for this reading, derived from its identity.
    #[must_use]
    pub fn topic(&self) -> String {
        format!("/sensor/{}/{}/state", self.instance, self.tag)
    }
}

//! Logical instance identifiers.
//!
//! An instance id names a physical sensor position (e.g. "living room",
//! "outside north wall") and stays stable across battery changes, while the
//! protocol-level id transmitted by the sensor does not. The mapping between
//! the two is static configuration, resolved by the identity resolver in the
//! `app` crate.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier for a physical sensor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(u16);

impl InstanceId {
    /// Wrap a raw instance number.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Access the inner number.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for InstanceId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u16> for InstanceId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

//! Canonical events — the union of everything a normalizer can emit.

use crate::reading::Reading;
use crate::switch::SwitchEvent;
use crate::time::Timestamp;

/// A normalized, typed record produced after classification and identity
/// resolution. This is what flows into the sink fan-out.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalEvent {
    /// Temperature or humidity measurement from a resolved instance.
    Reading(Reading),
    /// Button press from a switch transmitter.
    Switch(SwitchEvent),
}

impl CanonicalEvent {
    /// Retained-state topic for this event.
    #[must_use]
    pub fn topic(&self) -> String {
        match self {
            Self::Reading(reading) => reading.topic(),
            Self::Switch(event) => event.topic(),
        }
    }

    /// Decode-time timestamp carried by the event.
    #[must_use]
    pub fn observed_at(&self) -> Timestamp {
        match self {
            Self::Reading(reading) => reading.observed_at,
            Self::Switch(event) => event.observed_at,
        }
    }
}

impl From<Reading> for CanonicalEvent {
    fn from(reading: Reading) -> Self {
        Self::Reading(reading)
    }
}

impl From<SwitchEvent> for CanonicalEvent {
    fn from(event: SwitchEvent) -> Self {
        Self::Switch(event)
    }
}

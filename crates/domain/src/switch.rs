//! Canonical switch events.
//!
//! Switch transmitters carry their identity in the radio frame itself, so
//! there is no instance-resolution step: the `(device id, channel, button)`
//! triple is published verbatim.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::time::Timestamp;

/// Vendor segment used in switch topics.
///
/// The Waveman family speaks the Intertechno protocol, which is what
/// subscribers key on. Supporting another vendor means another model tag in
/// the dispatch table and its own vendor constant.
pub const SWITCH_VENDOR: &str = "intertechno";

/// Binary state of a switch button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    /// Upper-case token used as the plain-text publish payload.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

impl FromStr for SwitchState {
    type Err = ParseError;

    /// Case-insensitive parse into the fixed `{on, off}` token set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("on") {
            Ok(Self::On)
        } else if s.eq_ignore_ascii_case("off") {
            Ok(Self::Off)
        } else {
            Err(ParseError::UnknownSwitchState(s.to_string()))
        }
    }
}

/// One normalized button press from a switch transmitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchEvent {
    /// Raw protocol-level device id, published verbatim.
    pub device_id: String,
    /// Channel index on the transmitter.
    pub channel: u8,
    /// Button index within the channel.
    pub button: u8,
    /// Normalized button state.
    pub state: SwitchState,
    /// Decode-time timestamp.
    #[serde(rename = "ts")]
    pub observed_at: Timestamp,
}

impl SwitchEvent {
    /// Retained-state topic for this event, derived from its identity.
    #[must_use]
    pub fn topic(&self) -> String {
        format!(
            "/switch/{SWITCH_VENDOR}/{}/{}/{}/state",
            self.device_id, self.channel, self.button
        )
    }
}

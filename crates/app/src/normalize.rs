//! Normalizers — per-family conversion of raw fields into canonical events.
//!
//! Both normalizers are pure: the decode-time timestamp is passed in by the
//! caller, and nothing outside the arguments is consulted or mutated.

use rfbridge_domain::error::ParseError;
use rfbridge_domain::instance::InstanceId;
use rfbridge_domain::reading::{Reading, ReadingTag};
use rfbridge_domain::record::{SensorFields, SwitchFields};
use rfbridge_domain::switch::SwitchEvent;
use rfbridge_domain::time::Timestamp;

/// Produce the temperature and humidity readings for a resolved instance.
///
/// Both readings share the caller-supplied `observed_at` timestamp.
#[must_use]
pub fn normalize_sensor(
    fields: &SensorFields,
    instance: InstanceId,
    observed_at: Timestamp,
) -> [Reading; 2] {
    [
        Reading {
            instance,
            tag: ReadingTag::Temperature,
            value: fields.temperature_c,
            observed_at,
        },
        Reading {
            instance,
            tag: ReadingTag::Humidity,
            value: fields.humidity,
            observed_at,
        },
    ]
}

/// Produce a switch event from the raw identity triple and state token.
///
/// # Errors
///
/// Returns [`ParseError::UnknownSwitchState`] when the transmitted state
/// token is outside the `{on, off}` set.
pub fn normalize_switch(
    fields: &SwitchFields,
    observed_at: Timestamp,
) -> Result<SwitchEvent, ParseError> {
    Ok(SwitchEvent {
        device_id: fields.id.clone(),
        channel: fields.channel,
        button: fields.button,
        state: fields.state.parse()?,
        observed_at,
    })
}

//! Raw records — one decoded line of rtl_433 JSON output.
//!
//! A [`RawRecord`] is transient: it exists only while one line moves through
//! the pipeline. Field layout varies by device family, so the record keeps
//! the decoded JSON as-is and exposes typed extraction per family. Fields a
//! family does not know about (e.g. rtl_433's `time` and battery fields) are
//! ignored.

use serde::Deserialize;
use serde_json::Value;

/// Why a line (or a known-model record) could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The line is not valid JSON, or a required field is missing/mistyped.
    #[error("malformed record")]
    Json(#[from] serde_json::Error),

    /// The line is valid JSON but not an object.
    #[error("record is not a JSON object")]
    NotAnObject,
}

/// Untyped structured data decoded from one input line.
#[derive(Debug, Clone)]
pub struct RawRecord {
    value: Value,
}

impl RawRecord {
    /// Decode one raw text line.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the line is not a JSON object.
    pub fn decode(line: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(line)?;
        if value.is_object() {
            Ok(Self { value })
        } else {
            Err(DecodeError::NotAnObject)
        }
    }

    /// The declared model tag, used for dispatch.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.value.get("model").and_then(Value::as_str)
    }

    /// Extract the temperature/humidity family fields.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] when a required field is missing or has
    /// the wrong type.
    pub fn sensor_fields(&self) -> Result<SensorFields, DecodeError> {
        Ok(serde_json::from_value(self.value.clone())?)
    }

    /// Extract the switch family fields.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] when a required field is missing or has
    /// the wrong type.
    pub fn switch_fields(&self) -> Result<SwitchFields, DecodeError> {
        Ok(serde_json::from_value(self.value.clone())?)
    }
}

/// Measurement fields shared by the WT450 and Nexus families.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorFields {
    /// Raw protocol-level device id; resolved to an instance before use.
    pub id: u32,
    /// Temperature in degrees Celsius.
    #[serde(rename = "temperature_C")]
    pub temperature_c: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
}

/// State fields transmitted by the Waveman switch family.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SwitchFields {
    /// Raw device id, kept as-is (no identity resolution for switches).
    pub id: String,
    /// Channel index on the transmitter.
    pub channel: u8,
    /// Button index within the channel.
    pub button: u8,
    /// State token as transmitted; case-normalized during normalization.
    pub state: String,
}

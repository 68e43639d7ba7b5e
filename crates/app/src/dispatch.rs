//! Model dispatch — classify a record by its declared model tag.

/// Model tags routed to the temperature/humidity normalizer.
const TEMP_HUMIDITY_MODELS: &[&str] = &["WT450 sensor", "Nexus Temperature/Humidity"];

/// Model tags routed to the switch normalizer.
const SWITCH_MODELS: &[&str] = &["Waveman Switch Transmitter"];

/// Device family a record's model tag belongs to.
///
/// Each known tag maps to exactly one family; tags outside the table
/// classify to `None` and the record is logged and dropped by the pipeline.
/// Supporting a new family means a new variant, its tag list, and a
/// normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// WT450 / Nexus temperature and humidity sensors.
    TempHumidity,
    /// Waveman switch transmitters.
    Switch,
}

impl ModelKind {
    /// Look up a model tag in the fixed dispatch table.
    #[must_use]
    pub fn classify(model: &str) -> Option<Self> {
        if TEMP_HUMIDITY_MODELS.contains(&model) {
            Some(Self::TempHumidity)
        } else if SWITCH_MODELS.contains(&model) {
            Some(Self::Switch)
        } else {
            None
        }
    }
}

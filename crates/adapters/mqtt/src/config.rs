//! MQTT adapter configuration.

use serde::Deserialize;

/// Configuration for the broker publisher sink.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MqttConfig {
    /// Whether the publisher sink is wired in at all.
    pub enabled: bool,
    /// Broker host name or address.
    pub host: String,
    /// Broker TCP port.
    pub port: u16,
    /// Optional broker credentials.
    pub username: Option<String>,
    pub password: Option<String>,
    /// Client-id prefix; a random suffix is appended per process so two
    /// bridges never kick each other off the broker.
    pub client_id_prefix: String,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: "localhost".to_string(),
            port: 1883,
            username: None,
            password: None,
            client_id_prefix: "rfbridge".to_string(),
        }
    }
}

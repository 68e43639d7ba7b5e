//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `rfbridge.toml` in the working directory. Every field has a
//! sensible default so the file is optional — except the identity table,
//! which is empty until configured (an unmapped sensor is skipped, not an
//! error). Environment variables take precedence over file values.

use std::collections::HashMap;

use serde::Deserialize;

use rfbridge_adapter_mqtt::MqttConfig;
use rfbridge_adapter_rtl433::Rtl433Config;
use rfbridge_domain::instance::InstanceId;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Broker publisher settings.
    pub mqtt: MqttConfig,
    /// Decoder subprocess settings.
    pub rtl433: Rtl433Config,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Identity mapping table (raw rtl_433 id → logical instance).
    pub identity: Vec<IdentityEntry>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// One identity table entry.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityEntry {
    /// Raw device id as transmitted by the sensor.
    pub id: u32,
    /// Logical instance the id maps to.
    pub instance: u16,
}

impl Config {
    /// Load configuration from `rfbridge.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("rfbridge.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("RFBRIDGE_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("RFBRIDGE_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("RFBRIDGE_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("RFBRIDGE_MQTT_HOST") {
            self.mqtt.host = val;
        }
        if let Ok(val) = std::env::var("RFBRIDGE_MQTT_PORT") {
            if let Ok(port) = val.parse() {
                self.mqtt.port = port;
            }
        }
        if let Ok(val) = std::env::var("RFBRIDGE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        let mut seen = std::collections::HashSet::new();
        for entry in &self.identity {
            if !seen.insert(entry.id) {
                return Err(ConfigError::Validation(format!(
                    "duplicate identity mapping for raw id {}",
                    entry.id
                )));
            }
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Materialize the identity table for the resolver.
    #[must_use]
    pub fn identity_map(&self) -> HashMap<u32, InstanceId> {
        self.identity
            .iter()
            .map(|entry| (entry.id, InstanceId::new(entry.instance)))
            .collect()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "rfbridged=info,rfbridge=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

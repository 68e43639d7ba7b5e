//! rtl_433 subprocess configuration.

use serde::Deserialize;

/// Configuration for the decoder subprocess.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Rtl433Config {
    /// Program to spawn.
    pub program: String,
    /// Arguments passed to the program.
    ///
    /// The defaults select JSON line output and the three protocols the
    /// normalizers understand (WT450, Nexus, Waveman).
    pub args: Vec<String>,
}

impl Default for Rtl433Config {
    fn default() -> Self {
        Self {
            program: "rtl_433".to_string(),
            args: ["-l", "12000", "-F", "json", "-R", "4", "-R", "33", "-R", "19"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

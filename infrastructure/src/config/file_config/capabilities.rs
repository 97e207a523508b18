//! Capability configuration from TOML (`[capabilities]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Mock back-end behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCapabilitiesConfig {
    /// Simulated back-end latency in milliseconds
    pub latency_ms: u64,
    /// Advisory argument validation before execution
    pub validate_arguments: bool,
}

impl Default for FileCapabilitiesConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            validate_arguments: true,
        }
    }
}

impl FileCapabilitiesConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

//! Capability result value object

use super::group::CapabilityGroup;
use serde::{Deserialize, Serialize};

/// Message returned when a capability name is not recognized
pub const UNKNOWN_CAPABILITY_MESSAGE: &str = "Error: Sub-agen tidak dikenal atau gagal merespons.";

/// Outcome of executing a capability
///
/// `payload` is opaque to the orchestration core: its shape is defined by
/// the executor and it is handed back to the model verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityResult {
    /// Group that produced this result
    pub group: CapabilityGroup,
    /// Structured output payload
    pub payload: serde_json::Value,
}

impl CapabilityResult {
    pub fn new(group: CapabilityGroup, payload: serde_json::Value) -> Self {
        Self { group, payload }
    }

    /// Orchestrator-tagged failure with an explicit error payload
    pub fn failure(capability_name: &str, message: impl Into<String>) -> Self {
        Self {
            group: CapabilityGroup::Orchestrator,
            payload: serde_json::json!({
                "status": "error",
                "capability": capability_name,
                "message": message.into(),
            }),
        }
    }

    /// Failure for a name the executor does not recognize
    pub fn unknown(capability_name: &str) -> Self {
        Self::failure(capability_name, UNKNOWN_CAPABILITY_MESSAGE)
    }

    /// `status` field of the payload, if present
    pub fn status(&self) -> Option<&str> {
        self.payload.get("status").and_then(|v| v.as_str())
    }

    pub fn is_failure(&self) -> bool {
        self.status() == Some("error")
    }

    /// `message` field of the payload, if present
    pub fn message(&self) -> Option<&str> {
        self.payload.get("message").and_then(|v| v.as_str())
    }
}

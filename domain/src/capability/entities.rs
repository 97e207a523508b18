//! Capability domain entities

use super::group::CapabilityGroup;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declaration of a capability the model may request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityDeclaration {
    /// Unique name of the capability (e.g., "manage_patient")
    pub name: String,
    /// Human-readable description shown to the model
    pub description: String,
    /// Parameter specifications, in declaration order
    pub parameters: Vec<CapabilityParameter>,
    /// The group this capability acts on behalf of
    pub group: CapabilityGroup,
}

/// Parameter specification for a capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string", "number")
    pub param_type: String,
    /// Allowed values, empty when the parameter is free-form
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,
}

impl CapabilityDeclaration {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        group: CapabilityGroup,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            group,
        }
    }

    pub fn with_parameter(mut self, param: CapabilityParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&CapabilityParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &CapabilityParameter> {
        self.parameters.iter().filter(|p| p.required)
    }
}

impl CapabilityParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
            allowed_values: Vec::new(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }

    /// Restrict the parameter to a fixed set of values
    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_enumerated(&self) -> bool {
        !self.allowed_values.is_empty()
    }
}

/// The model's request to invoke a capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityCall {
    /// Name of the capability to call
    pub capability_name: String,
    /// Arguments keyed by field name
    pub arguments: HashMap<String, serde_json::Value>,
    /// Provider-assigned call id, when the model API supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_id: Option<String>,
    /// Opaque reasoning signature the model API attached to the call; must be
    /// sent back unchanged with the call on later requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought_signature: Option<String>,
}

impl CapabilityCall {
    pub fn new(capability_name: impl Into<String>) -> Self {
        Self {
            capability_name: capability_name.into(),
            arguments: HashMap::new(),
            native_id: None,
            thought_signature: None,
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    pub fn with_native_id(mut self, id: impl Into<String>) -> Self {
        self.native_id = Some(id.into());
        self
    }

    pub fn with_thought_signature(mut self, signature: impl Into<String>) -> Self {
        self.thought_signature = Some(signature.into());
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a string argument, falling back to `default` when absent or not a string
    pub fn string_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_string(key).unwrap_or(default)
    }

    /// Arguments as a JSON object (for logging and wire formats)
    pub fn arguments_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.arguments
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_builder() {
        let decl = CapabilityDeclaration::new(
            "manage_patient",
            "Patient administration",
            CapabilityGroup::PatientAdmin,
        )
        .with_parameter(
            CapabilityParameter::new("action", "What to do", true)
                .with_allowed_values(["admission", "discharge"]),
        )
        .with_parameter(CapabilityParameter::new("details", "Extra details", false));

        assert_eq!(decl.parameters.len(), 2);
        assert!(decl.parameter("action").unwrap().is_enumerated());
        assert!(!decl.parameter("details").unwrap().is_enumerated());
        assert_eq!(decl.required_parameters().count(), 1);
        assert!(decl.parameter("missing").is_none());
    }

    #[test]
    fn test_call_accessors() {
        let call = CapabilityCall::new("manage_patient")
            .with_arg("patientName", "Budi Santoso")
            .with_arg("room", 12)
            .with_native_id("call-1");

        assert_eq!(call.get_string("patientName"), Some("Budi Santoso"));
        assert_eq!(call.get_string("room"), None);
        assert_eq!(call.string_or("date", "besok"), "besok");
        assert_eq!(call.native_id.as_deref(), Some("call-1"));
        assert_eq!(call.arguments_json()["room"], 12);
    }

    #[test]
    fn test_thought_signature_is_kept_in_history_json() {
        let plain = CapabilityCall::new("manage_patient");
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.get("thought_signature").is_none());

        let signed = plain.with_thought_signature("SIG123");
        let restored: CapabilityCall =
            serde_json::from_value(serde_json::to_value(&signed).unwrap()).unwrap();
        assert_eq!(restored.thought_signature.as_deref(), Some("SIG123"));
    }
}

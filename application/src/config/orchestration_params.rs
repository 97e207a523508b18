//! Orchestration parameters: engine behaviour control.
//!
//! [`OrchestrationParams`] groups the static parameters that the
//! [`OrchestrationEngine`](crate::use_cases::orchestrate::OrchestrationEngine)
//! needs for every turn. These are application-layer concerns, not domain
//! policy.

use hospital_domain::{Model, PromptTemplate};
use serde::{Deserialize, Serialize};

/// Engine parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestrationParams {
    /// Model that plays the orchestrator.
    pub model: Model,
    /// Instruction sent with both round trips of a turn.
    pub system_instruction: String,
    /// Run advisory argument validation before executing a capability.
    pub validate_arguments: bool,
}

impl Default for OrchestrationParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            system_instruction: PromptTemplate::orchestrator_system().to_string(),
            validate_arguments: true,
        }
    }
}

impl OrchestrationParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn with_validate_arguments(mut self, enabled: bool) -> Self {
        self.validate_arguments = enabled;
        self
    }
}

//! Model gateway port
//!
//! Defines the interface for one request/response round trip with the
//! language model that plays the orchestrator.

use async_trait::async_trait;
use hospital_domain::{Model, ModelResponse, Turn};
use thiserror::Error;

/// Errors that can occur during model gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Which of the two round trips of a turn a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// Capability catalog attached; the model may request one call.
    Decision,
    /// No catalog; the model phrases the answer from the recorded result.
    FinalAnswer,
}

impl RequestMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMode::Decision => "decision",
            RequestMode::FinalAnswer => "final_answer",
        }
    }
}

/// A single request to the model
///
/// Borrowed view over the session history; the gateway serializes it into
/// whatever the provider expects.
#[derive(Debug, Clone, Copy)]
pub struct ModelRequest<'a> {
    pub model: &'a Model,
    pub system_instruction: &'a str,
    pub history: &'a [Turn],
    /// JSON Schema declarations, present only in decision mode
    pub capabilities: Option<&'a [serde_json::Value]>,
}

impl<'a> ModelRequest<'a> {
    pub fn decision(
        model: &'a Model,
        system_instruction: &'a str,
        history: &'a [Turn],
        capabilities: &'a [serde_json::Value],
    ) -> Self {
        Self {
            model,
            system_instruction,
            history,
            capabilities: Some(capabilities),
        }
    }

    pub fn final_answer(
        model: &'a Model,
        system_instruction: &'a str,
        history: &'a [Turn],
    ) -> Self {
        Self {
            model,
            system_instruction,
            history,
            capabilities: None,
        }
    }

    pub fn mode(&self) -> RequestMode {
        if self.capabilities.is_some() {
            RequestMode::Decision
        } else {
            RequestMode::FinalAnswer
        }
    }
}

/// Gateway for model communication
///
/// This port defines how the application layer talks to the model provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Send the request and wait for the complete response
    async fn generate(&self, request: ModelRequest<'_>) -> Result<ModelResponse, GatewayError>;

    /// Provider name for logs
    fn provider(&self) -> &str;
}

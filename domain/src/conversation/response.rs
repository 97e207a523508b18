//! Model response types.
//!
//! A model reply is a sequence of content blocks mixing free text and
//! capability-call requests. In the decision round the engine honours at
//! most one call; [`ModelResponse::keep_first_call`] enforces that before
//! the reply is recorded in history.

use crate::capability::entities::CapabilityCall;
use serde::{Deserialize, Serialize};

/// A single block of content within a model response.
///
/// # Examples
///
/// ```
/// use hospital_domain::conversation::response::ContentBlock;
/// use hospital_domain::capability::CapabilityCall;
///
/// let text = ContentBlock::Text("Baik, saya proses.".to_string());
/// assert!(text.as_text().is_some());
///
/// let call = ContentBlock::Call(
///     CapabilityCall::new("manage_patient").with_arg("patientName", "Budi Santoso"),
/// );
/// assert!(call.as_call().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Free text from the model.
    Text(String),
    /// A request to invoke a capability.
    Call(CapabilityCall),
}

impl ContentBlock {
    /// Returns the text content if this is a `Text` block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the call if this is a `Call` block.
    pub fn as_call(&self) -> Option<&CapabilityCall> {
        match self {
            ContentBlock::Call(call) => Some(call),
            _ => None,
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural end of response.
    Stop,
    /// Hit the token limit; the response may be truncated.
    MaxTokens,
    /// Blocked by the provider's safety filters.
    Safety,
    /// Provider-specific reason.
    Other(String),
}

/// A structured response from the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Content blocks in the response (text and/or calls).
    pub content: Vec<ContentBlock>,
    /// Why the model stopped generating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
    /// Model identifier (if returned by the API).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ModelResponse {
    /// Create a text-only response.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text(text.into())],
            finish_reason: Some(FinishReason::Stop),
            model: None,
        }
    }

    /// Create a response holding a single call, optionally preceded by text.
    pub fn with_call(text: Option<&str>, call: CapabilityCall) -> Self {
        let mut content = Vec::new();
        if let Some(text) = text {
            content.push(ContentBlock::Text(text.to_string()));
        }
        content.push(ContentBlock::Call(call));
        Self {
            content,
            finish_reason: Some(FinishReason::Stop),
            model: None,
        }
    }

    /// Concatenate all `Text` blocks into a single string.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// All capability calls, in order.
    pub fn calls(&self) -> Vec<&CapabilityCall> {
        self.content.iter().filter_map(|b| b.as_call()).collect()
    }

    /// The first capability call, if any.
    pub fn first_call(&self) -> Option<&CapabilityCall> {
        self.content.iter().find_map(|b| b.as_call())
    }

    pub fn has_calls(&self) -> bool {
        self.first_call().is_some()
    }

    /// Drop every call after the first one.
    ///
    /// Returns the number of calls removed. Multi-call turns are not
    /// supported, so the dropped calls are never executed nor recorded.
    pub fn keep_first_call(&mut self) -> usize {
        let mut seen = false;
        let before = self.content.len();
        self.content.retain(|block| match block {
            ContentBlock::Call(_) if seen => false,
            ContentBlock::Call(_) => {
                seen = true;
                true
            }
            ContentBlock::Text(_) => true,
        });
        before - self.content.len()
    }
}

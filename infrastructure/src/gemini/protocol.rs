//! Gemini `generateContent` wire types.
//!
//! Only the fields this adapter reads or writes are modelled; unknown
//! fields in responses are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn new(role: &str, parts: Vec<Part>) -> Self {
        Self {
            role: Some(role.to_string()),
            parts,
        }
    }

    /// Role-less content, as used for the system instruction
    pub fn instruction(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

/// One part of a content; exactly one of the payload fields is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_response: Option<FunctionResponse>,
    /// Set on reasoning summaries of thinking models
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
    /// Reasoning signature of thinking models, echoed back verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought_signature: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn function_call(call: FunctionCall) -> Self {
        Self {
            function_call: Some(call),
            ..Default::default()
        }
    }

    pub fn function_response(response: FunctionResponse) -> Self {
        Self {
            function_response: Some(response),
            ..Default::default()
        }
    }

    pub fn is_thought(&self) -> bool {
        self.thought.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub response: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub function_declarations: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    pub model_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Body of a non-2xx response
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest {
            contents: vec![Content::new("user", vec![Part::text("Halo")])],
            system_instruction: Some(Content::instruction("Anda adalah orkestrator.")),
            tools: vec![Tool {
                function_declarations: vec![json!({ "name": "manage_patient" })],
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{ "role": "user", "parts": [{ "text": "Halo" }] }],
                "systemInstruction": { "parts": [{ "text": "Anda adalah orkestrator." }] },
                "tools": [{ "functionDeclarations": [{ "name": "manage_patient" }] }]
            })
        );
    }

    #[test]
    fn test_request_without_tools_omits_field() {
        let request = GenerateContentRequest {
            contents: vec![],
            system_instruction: None,
            tools: vec![],
        };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "contents": [] }));
    }

    #[test]
    fn test_response_deserialization() {
        let body = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "Baik." },
                        { "functionCall": { "name": "manage_patient", "args": { "action": "admission" } } }
                    ]
                },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": { "totalTokenCount": 42 },
            "modelVersion": "gemini-2.5-flash"
        });

        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        let candidate = &response.candidates[0];
        let parts = &candidate.content.as_ref().unwrap().parts;
        assert_eq!(parts[0].text.as_deref(), Some("Baik."));
        assert_eq!(parts[1].function_call.as_ref().unwrap().name, "manage_patient");
        assert_eq!(candidate.finish_reason.as_deref(), Some("STOP"));
        assert_eq!(response.model_version.as_deref(), Some("gemini-2.5-flash"));
    }

    #[test]
    fn test_error_envelope() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.code, Some(400));
        assert_eq!(envelope.error.message, "API key not valid.");
        assert_eq!(envelope.error.status.as_deref(), Some("INVALID_ARGUMENT"));
    }
}

//! Conversions between domain conversation types and Gemini wire types
//!
//! History entries map onto Gemini contents as follows:
//!
//! | Turn | role | part |
//! |------|------|------|
//! | `User` | `user` | `text` |
//! | `Model` | `model` | `text` / `functionCall` |
//! | `CapabilityResult` | `user` | `functionResponse` |

use super::error::{GeminiError, Result};
use super::protocol::{
    Content, FunctionCall, FunctionResponse, GenerateContentRequest, GenerateContentResponse,
    Part, Tool,
};
use hospital_application::ports::model_gateway::ModelRequest;
use hospital_domain::{CapabilityCall, ContentBlock, FinishReason, ModelResponse, Turn};
use serde_json::{Value, json};

// ─── Domain → Gemini ─────────────────────────────────────────────

fn block_to_part(block: &ContentBlock) -> Part {
    match block {
        ContentBlock::Text(text) => Part::text(text.clone()),
        ContentBlock::Call(call) => Part {
            thought_signature: call.thought_signature.clone(),
            ..Part::function_call(FunctionCall {
                id: call.native_id.clone(),
                name: call.capability_name.clone(),
                args: call.arguments_json(),
            })
        },
    }
}

/// Convert one history entry; `None` when it would have no parts.
pub fn turn_to_content(turn: &Turn) -> Option<Content> {
    let content = match turn {
        Turn::User { text } => Content::new("user", vec![Part::text(text.clone())]),
        Turn::Model { content } => {
            Content::new("model", content.iter().map(block_to_part).collect())
        }
        Turn::CapabilityResult { call, result } => Content::new(
            "user",
            vec![Part::function_response(FunctionResponse {
                id: call.native_id.clone(),
                name: call.capability_name.clone(),
                response: json!({ "result": result.payload }),
            })],
        ),
    };
    (!content.parts.is_empty()).then_some(content)
}

/// Build the request body for a model request.
pub fn build_request(request: &ModelRequest<'_>) -> GenerateContentRequest {
    let tools = match request.capabilities {
        Some(declarations) if !declarations.is_empty() => vec![Tool {
            function_declarations: declarations.to_vec(),
        }],
        _ => Vec::new(),
    };

    GenerateContentRequest {
        contents: request.history.iter().filter_map(turn_to_content).collect(),
        system_instruction: (!request.system_instruction.is_empty())
            .then(|| Content::instruction(request.system_instruction)),
        tools,
    }
}

// ─── Gemini → Domain ─────────────────────────────────────────────

pub fn convert_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "STOP" => FinishReason::Stop,
        "MAX_TOKENS" => FinishReason::MaxTokens,
        "SAFETY" => FinishReason::Safety,
        other => FinishReason::Other(other.to_string()),
    }
}

fn function_call_to_domain(call: FunctionCall, signature: Option<String>) -> CapabilityCall {
    let mut domain = CapabilityCall::new(call.name);
    if let Value::Object(args) = call.args {
        domain.arguments = args.into_iter().collect();
    }
    domain.native_id = call.id;
    domain.thought_signature = signature;
    domain
}

/// Convert the first candidate into a [`ModelResponse`].
///
/// Thought parts are dropped. A response without candidates is an error,
/// reported as a block when the prompt feedback carries a reason.
pub fn convert_response(response: GenerateContentResponse) -> Result<ModelResponse> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(match response.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => GeminiError::Blocked(reason),
            None => GeminiError::EmptyCandidates,
        });
    };

    let content = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter(|part| !part.is_thought())
        .filter_map(|part| {
            if let Some(call) = part.function_call {
                Some(ContentBlock::Call(function_call_to_domain(
                    call,
                    part.thought_signature,
                )))
            } else {
                part.text.map(ContentBlock::Text)
            }
        })
        .collect();

    Ok(ModelResponse {
        content,
        finish_reason: candidate.finish_reason.as_deref().map(convert_finish_reason),
        model: response.model_version,
    })
}

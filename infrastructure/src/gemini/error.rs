//! Error types for the Gemini adapter

use hospital_application::ports::model_gateway::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("API key not found (set {0} or [model] api_key)")]
    MissingApiKey(String),

    #[error("Prompt blocked: {0}")]
    Blocked(String),

    #[error("Response contained no candidates")]
    EmptyCandidates,
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            GeminiError::Http(e) if e.is_decode() => GatewayError::MalformedResponse(e.to_string()),
            GeminiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            GeminiError::Json(e) => GatewayError::MalformedResponse(e.to_string()),
            GeminiError::Status { status, message } if status == 401 || status == 403 => {
                GatewayError::AuthenticationFailed(message)
            }
            GeminiError::Status { status, message } => {
                GatewayError::RequestFailed(format!("HTTP {}: {}", status, message))
            }
            GeminiError::MissingApiKey(var) => {
                GatewayError::AuthenticationFailed(format!("API key not found in {}", var))
            }
            e @ (GeminiError::Blocked(_) | GeminiError::EmptyCandidates) => {
                GatewayError::MalformedResponse(e.to_string())
            }
        }
    }
}

//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording what happened in
//! each turn (user messages, model decisions, capability calls and results,
//! final answers, failures and resets) to a structured log.
//!
//! This is separate from `tracing`-based diagnostics: tracing handles
//! human-readable operation logs, while this port captures the conversation
//! transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "user_message", "capability_call").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events.
///
/// `log` is synchronous and infallible; implementations swallow write errors.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

//! Application layer for hospital-ops
//!
//! This crate contains the orchestration use case, the conversation session,
//! port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::OrchestrationParams;
pub use ports::{
    capability_executor::CapabilityExecutorPort,
    capability_schema::CapabilitySchemaPort,
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    model_gateway::{GatewayError, ModelGateway, ModelRequest, RequestMode},
    phase_observer::{CallbackObserver, CompositePhaseObserver, NoPhaseObserver, PhaseObserver},
};
pub use use_cases::conversation_session::ConversationSession;
pub use use_cases::orchestrate::{OrchestrationEngine, TurnOutcome, TurnRejected};

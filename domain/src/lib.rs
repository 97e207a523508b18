//! Domain layer for hospital-ops
//!
//! This crate contains the core types of the hospital operations orchestrator.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Orchestrator and capability groups
//!
//! A single language model acts as the **orchestrator**. For each user
//! request it either answers directly or delegates to exactly one
//! **capability**, which belongs to one of four groups:
//!
//! - **Patient administration**: admission, discharge, status
//! - **Scheduling**: booking, rescheduling, cancellation
//! - **Medical records**: history, test results, diagnoses
//! - **Billing**: invoices, insurance, payments
//!
//! ## Turns
//!
//! A turn is one user-message-to-final-answer cycle. It is recorded in the
//! [`ConversationHistory`] and narrated to the UI as a stream of
//! [`PhaseEvent`]s that drive the [`ProcessingState`].

pub mod capability;
pub mod conversation;
pub mod core;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use capability::{
    ArgumentIssue, CapabilityCall, CapabilityCatalog, CapabilityDeclaration, CapabilityGroup,
    CapabilityParameter, CapabilityResult, CapabilityValidator, DefaultCapabilityValidator,
    fill_missing_required,
};
pub use conversation::{
    history::{ConversationHistory, Turn},
    message::{Message, Sender},
    response::{ContentBlock, FinishReason, ModelResponse},
};
pub use core::{error::DomainError, model::Model};
pub use prompt::{PromptTemplate, QUICK_ACTIONS, QuickAction};
pub use session::{
    event::{PhaseEvent, TurnPhase},
    processing::ProcessingState,
};

//! Prompt domain
//!
//! The orchestrator's system instruction, its fixed fallback replies and the
//! canned quick actions.

mod template;

pub use template::{PromptTemplate, QUICK_ACTIONS, QuickAction};

//! Application-level configuration.
//!
//! - [`OrchestrationParams`]: model, system instruction and validation switch

pub mod orchestration_params;

pub use orchestration_params::OrchestrationParams;

//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod capability_executor;
pub mod capability_schema;
pub mod conversation_logger;
pub mod model_gateway;
pub mod phase_observer;

//! Infrastructure layer for hospital-ops
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod capabilities;
pub mod config;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use capabilities::{
    CapabilityHandler, CapabilityRegistry, DEFAULT_LATENCY, JsonSchemaCapabilityConverter,
    MockCapabilityExecutor,
};
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileCapabilitiesConfig, FileConfig,
    FileLoggingConfig, FileModelConfig, FileOutputConfig, FileReplConfig, Severity,
};
pub use gemini::{DEFAULT_BASE_URL, GeminiError, GeminiGateway, GeminiSettings};
pub use logging::JsonlConversationLogger;

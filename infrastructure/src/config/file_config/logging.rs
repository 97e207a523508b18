//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Both outputs are off unless a path is given.
///
/// ```toml
/// [logging]
/// conversation_log = "~/.local/state/hospital-ops/conversation.jsonl"
/// file = "/tmp/hospital-ops.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL conversation transcript
    pub conversation_log: Option<String>,
    /// Diagnostic `tracing` output
    pub file: Option<String>,
}

//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Print single-shot replies as JSON
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show the thinking spinner
    pub show_progress: bool,
    /// Path to history file; the platform data dir is used when unset
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Resolved history path
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("hospital-ops").join("history.txt")))
    }
}

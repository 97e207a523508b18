//! Configuration file loading for hospital-ops
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HOSPITAL_OPS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./hospital-ops.toml` or `./.hospital-ops.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/hospital-ops/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, FileCapabilitiesConfig, FileConfig, FileLoggingConfig,
    FileModelConfig, FileOutputConfig, FileReplConfig, Severity,
};
pub use loader::ConfigLoader;

//! Raw configuration types deserialized from TOML
//!
//! Every section defaults independently, so a file may set only the
//! fields it cares about.

mod capabilities;
mod issue;
mod logging;
mod model;
mod output;
mod repl;

pub use capabilities::FileCapabilitiesConfig;
pub use issue::{ConfigIssue, ConfigIssueCode, Severity};
pub use logging::FileLoggingConfig;
pub use model::FileModelConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub model: FileModelConfig,
    pub capabilities: FileCapabilitiesConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Collect every issue in the configuration.
    ///
    /// Nothing here is fatal: each issue names the fallback that will be used.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.model.validate();

        let paths = [
            ("repl.history_file", &self.repl.history_file),
            ("logging.conversation_log", &self.logging.conversation_log),
            ("logging.file", &self.logging.file),
        ];
        for (field, value) in paths {
            if value.as_deref().is_some_and(|p| p.trim().is_empty()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyPath {
                        field: field.to_string(),
                    },
                    format!("{}: empty path, ignored", field),
                ));
            }
        }

        issues
    }

    /// The conversation log path, if one is set and non-empty.
    pub fn conversation_log_path(&self) -> Option<&str> {
        non_empty(&self.logging.conversation_log)
    }

    pub fn log_file_path(&self) -> Option<&str> {
        non_empty(&self.logging.file)
    }

    pub fn history_file_path(&self) -> Option<&str> {
        non_empty(&self.repl.history_file)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.model.name, "gemini-2.5-flash");
        assert_eq!(config.model.api_key_env, "API_KEY");
        assert_eq!(config.capabilities.latency_ms, 1500);
        assert!(config.capabilities.validate_arguments);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert!(config.conversation_log_path().is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let toml_str = r#"
[model]
name = "gemini-2.5-pro"

[capabilities]
latency_ms = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.name, "gemini-2.5-pro");
        // Unset fields keep their defaults
        assert_eq!(config.model.timeout_seconds, 60);
        assert_eq!(config.capabilities.latency_ms, 0);
        assert!(config.capabilities.validate_arguments);
        assert!(config.output.color);
    }

    #[test]
    fn test_deserialize_full_toml() {
        let toml_str = r#"
[model]
name = "gemini-2.0-flash"
api_key_env = "GEMINI_API_KEY"
base_url = "http://localhost:8080"
timeout_seconds = 10

[capabilities]
latency_ms = 200
validate_arguments = false

[output]
color = false

[repl]
show_progress = false
history_file = "~/.hospital_history"

[logging]
conversation_log = "/tmp/conv.jsonl"
file = "/tmp/ops.log"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.model.base_url, "http://localhost:8080");
        assert!(!config.capabilities.validate_arguments);
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(config.history_file_path(), Some("~/.hospital_history"));
        assert_eq!(config.conversation_log_path(), Some("/tmp/conv.jsonl"));
        assert_eq!(config.log_file_path(), Some("/tmp/ops.log"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_paths_are_ignored() {
        let mut config = FileConfig::default();
        config.logging.conversation_log = Some("  ".to_string());

        assert!(config.conversation_log_path().is_none());
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.contains("logging.conversation_log"));
    }
}

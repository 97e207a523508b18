//! Model configuration from TOML (`[model]` section)

use super::issue::{ConfigIssue, ConfigIssueCode};
use hospital_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Model provider configuration
///
/// # Example
///
/// ```toml
/// [model]
/// name = "gemini-2.5-flash"
/// api_key_env = "API_KEY"      # variable holding the key
/// # api_key = "..."            # or the key itself
/// base_url = "https://generativelanguage.googleapis.com"
/// timeout_seconds = 60
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    pub name: String,
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: Model::default().to_string(),
            api_key_env: "API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_seconds: 60,
        }
    }
}

impl FileModelConfig {
    /// Parse the model name, falling back to the default model when empty.
    pub fn parse_model(&self) -> (Model, Vec<ConfigIssue>) {
        if self.name.trim().is_empty() {
            let fallback = Model::default();
            let issue = ConfigIssue::error(
                ConfigIssueCode::EmptyModelName,
                format!("model.name: cannot be empty, using {}", fallback),
            );
            return (fallback, vec![issue]);
        }
        let Ok(model) = self.name.trim().parse::<Model>();
        (model, Vec::new())
    }

    /// Request timeout; zero is replaced by the default.
    pub fn timeout(&self) -> Duration {
        match self.timeout_seconds {
            0 => Duration::from_secs(Self::default().timeout_seconds),
            secs => Duration::from_secs(secs),
        }
    }

    /// API key from the config, or else from the configured environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|var| std::env::var(var).ok())
    }

    pub fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| lookup(&self.api_key_env))
            .filter(|key| !key.trim().is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_model().1;
        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroTimeout,
                format!(
                    "model.timeout_seconds: 0 is not allowed, using {}",
                    Self::default().timeout_seconds
                ),
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidBaseUrl {
                    value: self.base_url.clone(),
                },
                format!("model.base_url: '{}' is not an http(s) URL", self.base_url),
            ));
        }
        issues
    }
}

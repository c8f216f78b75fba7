//! Gemini connection configuration from TOML (`[gemini]` section)

use crate::gemini::{DEFAULT_BASE_URL, DEFAULT_CANDIDATES, GeminiSettings};
use magi_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variables checked for the API key, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Gemini connection configuration from TOML
///
/// # Example
///
/// ```toml
/// [gemini]
/// model = "gemini-2.5-flash"      # skip discovery
/// candidates = ["gemini-2.5-flash", "gemini-pro"]
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// API key; `GEMINI_API_KEY` and `GOOGLE_API_KEY` take precedence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Fixed model id
    pub model: Option<String>,
    /// Discovery preference list, best first
    pub candidates: Vec<String>,
    pub base_url: String,
    /// HTTP timeout per request
    pub timeout_secs: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: None,
            candidates: DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl FileGeminiConfig {
    /// Resolve the API key from the process environment, then this config
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .chain(self.api_key.clone())
            .find(|key| !key.trim().is_empty())
    }

    /// Parse the fixed model, collecting issues for empty names.
    pub fn parse_model(&self) -> (Option<String>, Vec<ConfigIssue>) {
        match &self.model {
            None => (None, vec![]),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: "gemini.model".to_string(),
                    },
                    "gemini.model: model name cannot be empty",
                )],
            ),
            Some(s) => (Some(s.trim().to_string()), vec![]),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_model().1;

        if self.candidates.iter().any(|c| c.trim().is_empty()) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyModelName {
                    field: "gemini.candidates".to_string(),
                },
                "gemini.candidates: blank entries are ignored",
            ));
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "gemini.timeout_secs".to_string(),
                },
                "gemini.timeout_secs: must be at least 1",
            ));
        }

        issues
    }

    /// Convert to adapter settings, resolving the API key
    pub fn to_settings(&self) -> GeminiSettings {
        GeminiSettings {
            api_key: self.resolve_api_key(),
            model: self.parse_model().0,
            candidates: self
                .candidates
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default() {
        let config = FileGeminiConfig::default();
        assert!(config.model.is_none());
        assert_eq!(config.candidates.len(), 5);
        assert_eq!(config.candidates[0], "gemini-2.0-flash-exp");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize() {
        let toml_str = r#"
[gemini]
model = "gemini-2.5-flash"
timeout_secs = 10
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.model.as_deref(), Some("gemini-2.5-flash"));
        assert_eq!(config.gemini.timeout_secs, 10);
        assert_eq!(config.gemini.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_api_key_precedence() {
        let config = FileGeminiConfig {
            api_key: Some("from-file".to_string()),
            ..Default::default()
        };

        let env: HashMap<&str, &str> =
            HashMap::from([("GEMINI_API_KEY", "gemini"), ("GOOGLE_API_KEY", "google")]);
        let lookup = |name: &str| env.get(name).map(|v| v.to_string());
        assert_eq!(config.resolve_api_key_with(lookup).as_deref(), Some("gemini"));

        let env: HashMap<&str, &str> = HashMap::from([("GOOGLE_API_KEY", "google")]);
        let lookup = |name: &str| env.get(name).map(|v| v.to_string());
        assert_eq!(config.resolve_api_key_with(lookup).as_deref(), Some("google"));

        assert_eq!(
            config.resolve_api_key_with(|_| None).as_deref(),
            Some("from-file")
        );
    }

    #[test]
    fn test_blank_env_key_is_skipped() {
        let config = FileGeminiConfig::default();
        let lookup = |name: &str| (name == "GEMINI_API_KEY").then(|| "  ".to_string());
        assert!(config.resolve_api_key_with(lookup).is_none());
    }

    #[test]
    fn test_empty_model_is_error() {
        let config = FileGeminiConfig {
            model: Some("  ".to_string()),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::EmptyModelName { field } if field == "gemini.model"
        ));
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let config = FileGeminiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().iter().any(|i| i.is_error()));
    }
}

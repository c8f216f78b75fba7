//! Evaluation configuration from TOML (`[evaluation]` section)

use magi_application::EvaluationParams;
use magi_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Evaluation configuration from TOML.
///
/// # Example
///
/// ```toml
/// [evaluation]
/// cache_ttl_secs = 300
/// jitter_min_ms = 500
/// jitter_max_ms = 1500
/// inter_agent_pause_ms = 500
/// max_output_tokens = 150
/// temperature = 0.7
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEvaluationConfig {
    /// How long a successful verdict is reused (0 disables reuse).
    pub cache_ttl_secs: u64,
    pub jitter_min_ms: u64,
    pub jitter_max_ms: u64,
    /// Pause after each persona.
    pub inter_agent_pause_ms: u64,
    pub max_output_tokens: u32,
    pub temperature: f32,
    /// Characters of a failure message kept in the error verdict.
    pub error_reason_chars: usize,
}

impl Default for FileEvaluationConfig {
    fn default() -> Self {
        let params = EvaluationParams::default();
        Self {
            cache_ttl_secs: params.cache_ttl.as_secs(),
            jitter_min_ms: params.jitter_min.as_millis() as u64,
            jitter_max_ms: params.jitter_max.as_millis() as u64,
            inter_agent_pause_ms: params.inter_agent_pause.as_millis() as u64,
            max_output_tokens: params.max_output_tokens,
            temperature: params.temperature,
            error_reason_chars: params.error_reason_chars,
        }
    }
}

impl FileEvaluationConfig {
    /// Convert to [`EvaluationParams`], returning validation issues.
    ///
    /// Fields that fail validation keep their default value.
    pub fn to_params(&self) -> (EvaluationParams, Vec<ConfigIssue>) {
        let defaults = EvaluationParams::default();
        let mut issues = Vec::new();

        let (jitter_min, jitter_max) = if self.jitter_min_ms > self.jitter_max_ms {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvertedRange {
                    min_field: "evaluation.jitter_min_ms".to_string(),
                    max_field: "evaluation.jitter_max_ms".to_string(),
                },
                format!(
                    "evaluation.jitter_min_ms ({}) is greater than jitter_max_ms ({})",
                    self.jitter_min_ms, self.jitter_max_ms
                ),
            ));
            (defaults.jitter_min, defaults.jitter_max)
        } else {
            (
                Duration::from_millis(self.jitter_min_ms),
                Duration::from_millis(self.jitter_max_ms),
            )
        };

        let temperature = if (0.0..=2.0).contains(&self.temperature) {
            self.temperature
        } else {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "evaluation.temperature".to_string(),
                },
                format!(
                    "evaluation.temperature: {} is outside 0.0..=2.0",
                    self.temperature
                ),
            ));
            defaults.temperature
        };

        let max_output_tokens = if self.max_output_tokens == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "evaluation.max_output_tokens".to_string(),
                },
                "evaluation.max_output_tokens: must be at least 1",
            ));
            defaults.max_output_tokens
        } else {
            self.max_output_tokens
        };

        if self.cache_ttl_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "evaluation.cache_ttl_secs".to_string(),
                },
                "evaluation.cache_ttl_secs is 0; verdicts will never be reused",
            ));
        }

        let params = EvaluationParams {
            cache_ttl: Duration::from_secs(self.cache_ttl_secs),
            jitter_min,
            jitter_max,
            inter_agent_pause: Duration::from_millis(self.inter_agent_pause_ms),
            max_output_tokens,
            temperature,
            error_reason_chars: self.error_reason_chars,
            ..defaults
        };

        (params, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_params() {
        let (params, issues) = FileEvaluationConfig::default().to_params();
        assert!(issues.is_empty());
        assert_eq!(params, EvaluationParams::default());
    }

    #[test]
    fn test_deserialize() {
        let toml_str = r#"
[evaluation]
cache_ttl_secs = 60
jitter_min_ms = 0
jitter_max_ms = 0
temperature = 0.2
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let (params, issues) = config.evaluation.to_params();
        assert!(issues.is_empty());
        assert_eq!(params.cache_ttl, Duration::from_secs(60));
        assert_eq!(params.jitter_max, Duration::ZERO);
        assert_eq!(params.temperature, 0.2);
        // untouched fields keep defaults
        assert_eq!(params.max_output_tokens, 150);
        assert_eq!(params.inter_agent_pause, Duration::from_millis(500));
    }

    #[test]
    fn test_inverted_jitter_falls_back() {
        let config = FileEvaluationConfig {
            jitter_min_ms: 2000,
            jitter_max_ms: 100,
            ..Default::default()
        };
        let (params, issues) = config.to_params();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(issues[0].code, ConfigIssueCode::InvertedRange { .. }));
        assert_eq!(params.jitter_min, Duration::from_millis(500));
    }

    #[test]
    fn test_temperature_out_of_range() {
        let config = FileEvaluationConfig {
            temperature: 3.5,
            ..Default::default()
        };
        let (params, issues) = config.to_params();
        assert_eq!(issues.len(), 1);
        assert_eq!(params.temperature, 0.7);
    }

    #[test]
    fn test_zero_ttl_is_warning() {
        let config = FileEvaluationConfig {
            cache_ttl_secs: 0,
            ..Default::default()
        };
        let (params, issues) = config.to_params();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert_eq!(params.cache_ttl, Duration::ZERO);
    }
}

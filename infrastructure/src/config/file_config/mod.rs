//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod evaluation;
mod gemini;
mod output;
mod repl;

pub use evaluation::FileEvaluationConfig;
pub use gemini::{API_KEY_ENV_VARS, FileGeminiConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;

use magi_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini connection settings
    pub gemini: FileGeminiConfig,
    /// Caching, throttling and generation settings
    pub evaluation: FileEvaluationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.gemini.validate();
        issues.extend(self.evaluation.to_params().1);
        issues
    }
}

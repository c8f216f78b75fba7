//! Configuration file loading for magi-council
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MAGI_` environment variables (`MAGI_GEMINI__MODEL=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./magi.toml` or `./.magi.toml`
//! 4. Global: `$XDG_CONFIG_HOME/magi-council/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    API_KEY_ENV_VARS, FileConfig, FileEvaluationConfig, FileGeminiConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};

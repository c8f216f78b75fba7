//! Infrastructure layer for magi-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileEvaluationConfig, FileGeminiConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig,
};
pub use gemini::{GeminiClient, GeminiError, GeminiSettings};

//! Presentation layer for magi-council
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::{
    ConsoleFormatter, HtmlFormatter, JsonFormatter, OutputFormatter, ReportContext, formatter_for,
};
pub use progress::reporter::{ProgressReporter, SimpleProgress, progress_for_stderr};

//! CLI command definitions

use clap::{Parser, ValueEnum};
use magi_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for council results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Decision banner followed by one card per persona
    Full,
    /// JSON output
    Json,
    /// Standalone HTML report
    Html,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Json => DomainOutputFormat::Json,
            OutputFormat::Html => DomainOutputFormat::Html,
        }
    }
}

/// CLI arguments for magi
#[derive(Parser, Debug)]
#[command(name = "magi")]
#[command(author, version, about = "MAGI council - three personas vote on a proposal")]
#[command(long_about = r#"
MAGI puts a proposal before three fixed personas and decides by majority.

  CASPER-1     science: logic, efficiency, technical soundness
  BALTHASAR-2  ethics: people, safety, fairness
  MELCHIOR-3   practicality: cost, feasibility, real-world use

Each persona approves or rejects with a reason and a 1-10 score.
Two approvals carry the proposal.

The Gemini API key is read from GEMINI_API_KEY, then GOOGLE_API_KEY,
then the [gemini] section of the configuration.

Configuration files are loaded from (in priority order):
1. MAGI_* environment variables (MAGI_GEMINI__MODEL=...)
2. --config <path>     Explicit config file
3. ./magi.toml         Project-level config
4. ~/.config/magi-council/config.toml   Global config

Example:
  magi "Adopt AI tooling across the whole company"
  magi --output html --html-out report.html "Switch to a four-day week"
  magi --chat
"#)]
pub struct Cli {
    /// The proposal to put before the council (not required in chat mode)
    pub proposal: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Gemini model to use (skips model discovery)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format [default: full, or [output] format from config]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write the HTML report to this file
    #[arg(long, value_name = "PATH")]
    pub html_out: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for council results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal report with decision banner and verdict cards (default)
    #[default]
    Full,
    /// JSON output
    Json,
    /// Standalone HTML report
    Html,
}

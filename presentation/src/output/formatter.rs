//! Output formatter trait

use super::{ConsoleFormatter, HtmlFormatter, JsonFormatter};
use magi_domain::{AggregateResult, OutputFormat};

/// Session details shown in the report footer
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportContext<'a> {
    /// Selected model, `None` when the client is not configured
    pub model: Option<&'a str>,
    /// Live cache entries after the evaluation
    pub cache_entries: usize,
}

impl ReportContext<'_> {
    pub fn model_label(&self) -> &str {
        self.model.unwrap_or("NOT_CONFIGURED")
    }
}

/// Trait for formatting council results
pub trait OutputFormatter {
    /// Format the complete result
    fn format(&self, result: &AggregateResult, context: &ReportContext<'_>) -> String;

    /// Format an error raised before the council convened
    fn format_error(&self, message: &str) -> String;
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Full => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Html => Box::new(HtmlFormatter::new()),
    }
}

/// Fixed-width bar for a 0-10 score; out-of-range scores are clamped
pub(crate) fn score_cells(score: i64) -> usize {
    score.clamp(0, 10) as usize
}

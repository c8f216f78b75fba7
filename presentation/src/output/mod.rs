//! Report formatters for council results

pub mod console;
pub mod formatter;
pub mod html;
pub mod json;

pub use console::ConsoleFormatter;
pub use formatter::{OutputFormatter, ReportContext, formatter_for};
pub use html::HtmlFormatter;
pub use json::JsonFormatter;

//! Progress reporting for council evaluation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use magi_application::{ProgressNotifier, VerdictSource};
use magi_domain::{AggregateResult, PersonaId, Verdict};
use std::io::{IsTerminal, Write};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with an indicatif bar over the three personas
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.yellow} {prefix:.bold.yellow} [{bar:30.yellow/white}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(bar) = guard.as_ref()
        {
            f(bar);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Short status line for a finished persona
fn status_line(verdict: &Verdict, source: VerdictSource) -> String {
    let mark = if verdict.is_error() {
        "x".red()
    } else if verdict.decision {
        "v".green()
    } else {
        "-".red()
    };
    let suffix = match source {
        VerdictSource::Cache => " (cached)",
        VerdictSource::Model => "",
        VerdictSource::Fallback => " (error)",
    };
    format!("{} {}{}", mark, verdict.agent_name, suffix)
}

impl ProgressNotifier for ProgressReporter {
    fn on_council_start(&self, total_agents: usize) {
        let bar = ProgressBar::new(total_agents as u64);
        bar.set_style(Self::style());
        bar.set_prefix("MAGI");
        bar.set_message("Convening...");
        bar.enable_steady_tick(Duration::from_millis(120));

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(bar);
        }
    }

    fn on_agent_start(&self, persona: PersonaId) {
        self.with_bar(|bar| {
            bar.set_message(format!("{} deliberating...", persona.persona().name));
        });
    }

    fn on_agent_complete(&self, verdict: &Verdict, source: VerdictSource) {
        self.with_bar(|bar| {
            bar.set_message(status_line(verdict, source));
            bar.inc(1);
        });
    }

    fn on_council_complete(&self, result: &AggregateResult) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(bar) = guard.take()
        {
            bar.finish_and_clear();
            tracing::debug!("Progress finished: {}", result.vote_summary());
        }
    }
}

/// Plain line-per-event progress for non-interactive stderr
pub struct SimpleProgress {
    out: Mutex<Box<dyn Write + Send>>,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self::with_writer(std::io::stderr())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", text);
        }
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_council_start(&self, total_agents: usize) {
        self.line(format!("{} {} ({} personas)", "->".yellow(), "MAGI".bold(), total_agents));
    }

    fn on_agent_complete(&self, verdict: &Verdict, source: VerdictSource) {
        self.line(format!("  {}", status_line(verdict, source)));
    }

    fn on_council_complete(&self, result: &AggregateResult) {
        self.line(format!("  {} {}", result.vote_summary(), result.final_decision));
    }
}

/// Progress bar on an interactive stderr, plain lines otherwise
pub fn progress_for_stderr() -> Box<dyn ProgressNotifier> {
    if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress::new())
    }
}

//! Console output formatter for council results

use super::formatter::{OutputFormatter, ReportContext, score_cells};
use colored::Colorize;
use magi_domain::{AggregateResult, FinalDecision, Verdict};

const WIDTH: usize = 60;

/// Formats council results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete council result
    pub fn format(result: &AggregateResult, context: &ReportContext<'_>) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("MAGI SYSTEM"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "PROPOSAL:".yellow().bold(),
            result.proposal
        ));

        output.push_str(&Self::decision_block(result));

        for verdict in &result.verdicts {
            output.push_str(&Self::card(verdict));
        }

        output.push_str(&Self::footer(context));
        output
    }

    /// Final decision banner plus the vote count
    pub fn decision_block(result: &AggregateResult) -> String {
        let banner = match result.final_decision {
            FinalDecision::Approved => " > 承認 - APPROVED ".black().on_green().bold(),
            FinalDecision::Rejected => " ! 否決 - REJECTED ".black().on_red().bold(),
        };

        format!(
            "{}\n{}\n{} {}\n",
            "[ FINAL DECISION ]".yellow(),
            banner,
            format!("APPROVE_COUNT: {}/{} SYSTEMS", result.approvals, result.total()).yellow(),
            result.vote_summary()
        )
    }

    fn card(verdict: &Verdict) -> String {
        let badge = if verdict.decision {
            " 承認 (AGREE) ".black().on_green().bold()
        } else {
            " 否決 (DISAGREE) ".black().on_red().bold()
        };

        let cells = score_cells(verdict.score);
        let bar = format!("{}{}", "█".repeat(cells), "░".repeat(10 - cells));
        let reason = if verdict.is_error() {
            verdict.reason.red().to_string()
        } else {
            verdict.reason.clone()
        };

        format!(
            "\n{}\n{}\n{}\n  {}\n{} {} {}/10\n",
            format!("── {} {} ──", verdict.icon, verdict.agent_name)
                .yellow()
                .bold(),
            badge,
            format!(">> ROLE: {}", verdict.role).yellow(),
            reason,
            "SCORE:".yellow(),
            bar.yellow(),
            verdict.score
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!(
            "{}\n{:^width$}\n{}",
            line.yellow(),
            title.bold(),
            line.yellow(),
            width = WIDTH
        )
    }

    fn footer(context: &ReportContext<'_>) -> String {
        format!(
            "\n{}\n{}\n{}\n{}\n",
            "-".repeat(WIDTH).yellow(),
            "LOG: MAGI_SYSTEM_EXECUTION_COMPLETE".dimmed(),
            "LOG: DECISION CRITERIA: MAJORITY RULE (>=2 APPROVALS)".dimmed(),
            format!(
                "> SYSTEM_MODEL: {} | CACHE: {} LIVE ENTRIES",
                context.model_label(),
                context.cache_entries
            )
            .dimmed()
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &AggregateResult, context: &ReportContext<'_>) -> String {
        Self::format(result, context)
    }

    fn format_error(&self, message: &str) -> String {
        message.red().bold().to_string()
    }
}

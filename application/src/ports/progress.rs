//! Progress notification port
//!
//! Defines the interface for reporting progress during a council evaluation.

use magi_domain::{AggregateResult, PersonaId, Verdict};

/// Where a verdict came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictSource {
    /// Served from the response cache
    Cache,
    /// Parsed from a live model call
    Model,
    /// Synthesized locally after a failure
    Fallback,
}

/// Callback for progress updates during a council evaluation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain text, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the first persona is evaluated
    fn on_council_start(&self, total_agents: usize);

    /// Called when a persona starts evaluating
    fn on_agent_start(&self, _persona: PersonaId) {}

    /// Called when a persona has produced its verdict
    fn on_agent_complete(&self, verdict: &Verdict, source: VerdictSource);

    /// Called after the majority decision is computed
    fn on_council_complete(&self, result: &AggregateResult);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_council_start(&self, _total_agents: usize) {}
    fn on_agent_complete(&self, _verdict: &Verdict, _source: VerdictSource) {}
    fn on_council_complete(&self, _result: &AggregateResult) {}
}

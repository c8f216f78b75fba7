//! Aggregate result of a council evaluation

use super::decision::FinalDecision;
use crate::persona::PersonaId;
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// The combined three-verdict outcome plus the majority decision
///
/// Verdicts are kept in evaluation order (casper, balthasar, melchior).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// The proposal as submitted
    pub proposal: String,
    /// One verdict per persona
    pub verdicts: Vec<Verdict>,
    /// Number of approving verdicts
    pub approvals: usize,
    /// Majority decision
    pub final_decision: FinalDecision,
}

impl AggregateResult {
    /// Tally verdicts and apply the majority rule
    pub fn from_verdicts(proposal: impl Into<String>, verdicts: Vec<Verdict>) -> Self {
        let approvals = verdicts.iter().filter(|v| v.decision).count();
        let final_decision = FinalDecision::by_majority(approvals, verdicts.len());

        Self {
            proposal: proposal.into(),
            verdicts,
            approvals,
            final_decision,
        }
    }

    /// Total number of verdicts
    pub fn total(&self) -> usize {
        self.verdicts.len()
    }

    /// Get the verdict of a specific persona
    pub fn verdict(&self, persona: PersonaId) -> Option<&Verdict> {
        self.verdicts.iter().find(|v| v.identity == persona)
    }

    /// Verdicts synthesized from failed evaluations
    pub fn errors(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| v.is_error())
    }

    /// Generate a visual vote summary (e.g., "[●●○]")
    pub fn vote_summary(&self) -> String {
        let mut summary = String::from("[");
        for verdict in &self.verdicts {
            summary.push(if verdict.decision { '●' } else { '○' });
        }
        summary.push(']');
        summary
    }
}

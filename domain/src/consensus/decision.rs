//! Final decision and the majority rule

use serde::{Deserialize, Serialize};

/// Outcome of the council vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinalDecision {
    Approved,
    Rejected,
}

impl FinalDecision {
    /// Apply the majority rule: more than half must approve.
    ///
    /// With three personas this means two or more approvals.
    ///
    /// ```
    /// use magi_domain::consensus::FinalDecision;
    ///
    /// assert_eq!(FinalDecision::by_majority(2, 3), FinalDecision::Approved);
    /// assert_eq!(FinalDecision::by_majority(1, 3), FinalDecision::Rejected);
    /// ```
    pub fn by_majority(approvals: usize, total: usize) -> Self {
        if total > 0 && approvals > total / 2 {
            FinalDecision::Approved
        } else {
            FinalDecision::Rejected
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, FinalDecision::Approved)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FinalDecision::Approved => "approved",
            FinalDecision::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for FinalDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

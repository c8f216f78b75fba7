//! Proposal value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A proposal submitted to the MAGI council (Value Object)
///
/// The content is kept verbatim. Whitespace and case are significant,
/// so two proposals that differ only in spacing are distinct cache keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Proposal {
    content: String,
}

impl Proposal {
    /// Create a new proposal, rejecting empty or whitespace-only input
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::InvalidInput);
        }
        Ok(Self { content })
    }

    /// Get the proposal content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Proposal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Proposal {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Proposal::new(s)
    }
}

impl TryFrom<&str> for Proposal {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Proposal::new(s)
    }
}

impl From<Proposal> for String {
    fn from(p: Proposal) -> Self {
        p.content
    }
}

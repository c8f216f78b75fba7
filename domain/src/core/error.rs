//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The proposal was empty or whitespace-only
    #[error("Invalid input: proposal cannot be empty")]
    InvalidInput,

    /// An identity string that does not name one of the three personas
    #[error("Invalid agent type: {0}")]
    UnknownPersona(String),
}

impl DomainError {
    /// Check if this error should be shown to the user as an input problem
    pub fn is_input_error(&self) -> bool {
        matches!(self, DomainError::InvalidInput)
    }
}

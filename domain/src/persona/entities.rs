//! Persona identity and definition

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identity of one of the three MAGI personas (Value Object)
///
/// The declaration order is the evaluation order used by the council.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaId {
    Casper,
    Balthasar,
    Melchior,
}

impl PersonaId {
    /// All personas in evaluation order
    pub const ALL: [PersonaId; 3] = [PersonaId::Casper, PersonaId::Balthasar, PersonaId::Melchior];

    /// Get the string identifier for this persona
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaId::Casper => "casper",
            PersonaId::Balthasar => "balthasar",
            PersonaId::Melchior => "melchior",
        }
    }

    /// Look up the static persona definition for this identity
    pub fn persona(&self) -> &'static Persona {
        super::registry::persona_for(*self)
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PersonaId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "casper" => Ok(PersonaId::Casper),
            "balthasar" => Ok(PersonaId::Balthasar),
            "melchior" => Ok(PersonaId::Melchior),
            other => Err(DomainError::UnknownPersona(other.to_string())),
        }
    }
}

/// A fixed evaluation profile applied by the council
///
/// Personas are defined once at compile time and never mutated.
#[derive(Debug, PartialEq, Eq)]
pub struct Persona {
    /// Persona identity
    pub id: PersonaId,
    /// Display name (e.g., "CASPER-1")
    pub name: &'static str,
    /// Role label shown on the verdict card
    pub role: &'static str,
    /// Short display icon (e.g., "[S]")
    pub icon: &'static str,
    /// Evaluation criteria sent ahead of the proposal
    pub prompt: &'static str,
}

impl Persona {
    /// Compose the full instruction sent to the model for a proposal.
    ///
    /// The proposal text is appended verbatim.
    pub fn compose_instruction(&self, proposal: &str) -> String {
        format!("{}\n\n提案内容: {}", self.prompt, proposal)
    }
}

//! Verdict value objects

use crate::core::string::truncate_chars;
use crate::persona::{Persona, PersonaId};
use serde::{Deserialize, Serialize};

/// Reason shown when no credential or model is configured
pub const API_KEY_NOT_SET_REASON: &str = "ERROR: API KEY NOT SET.";

/// Reason shown when the model endpoint reports exhausted quota
pub const QUOTA_EXCEEDED_REASON: &str =
    "ERROR: 429 QUOTA EXCEEDED. VISIT: https://aistudio.google.com/apikey FOR NEW KEY";

/// Default number of characters of a failure message kept for display
pub const DEFAULT_ERROR_REASON_CHARS: usize = 50;

/// Why a persona could not produce a real verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictError {
    /// No credential or model configured
    MissingCredential,
    /// Upstream quota exhausted
    RateLimited,
    /// Any other failure of the model call
    ModelCallFailure,
    /// The response could not be read as a verdict
    ParseFailure,
}

/// The structured part of a model response: what the persona decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub decision: bool,
    pub reason: String,
    #[serde(deserialize_with = "deserialize_score")]
    pub score: i64,
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.round() as i64)
}

/// Outcome of evaluating one proposal with one persona
///
/// Carries the persona display metadata so the presentation layer can
/// render a card without consulting the registry. A verdict with
/// `error` set was synthesized locally and always has `decision == false`
/// and `score == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Persona identity
    pub identity: PersonaId,
    /// Display name (e.g., "CASPER-1")
    pub agent_name: String,
    /// Role label
    pub role: String,
    /// Display icon
    pub icon: String,
    /// Whether the persona approved
    pub decision: bool,
    /// Short explanation from the persona (or the error description)
    pub reason: String,
    /// Score, 1-10 for real verdicts, 0 for errors
    pub score: i64,
    /// Set when this verdict stands in for a failed evaluation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<VerdictError>,
}

impl Verdict {
    /// Build a success verdict from a parsed assessment
    pub fn from_assessment(persona: &Persona, assessment: Assessment) -> Self {
        Self {
            identity: persona.id,
            agent_name: persona.name.to_string(),
            role: persona.role.to_string(),
            icon: persona.icon.to_string(),
            decision: assessment.decision,
            reason: assessment.reason,
            score: assessment.score,
            error: None,
        }
    }

    /// Build an error verdict: rejected, score 0, with a readable reason
    pub fn error(persona: &Persona, kind: VerdictError, reason: impl Into<String>) -> Self {
        Self {
            identity: persona.id,
            agent_name: persona.name.to_string(),
            role: persona.role.to_string(),
            icon: persona.icon.to_string(),
            decision: false,
            reason: reason.into(),
            score: 0,
            error: Some(kind),
        }
    }

    /// Error verdict for a missing credential or model
    pub fn missing_credential(persona: &Persona) -> Self {
        Self::error(persona, VerdictError::MissingCredential, API_KEY_NOT_SET_REASON)
    }

    /// Error verdict for exhausted upstream quota
    pub fn rate_limited(persona: &Persona) -> Self {
        Self::error(persona, VerdictError::RateLimited, QUOTA_EXCEEDED_REASON)
    }

    /// Error verdict for a failed call or unreadable response.
    ///
    /// Only the first `max_chars` characters of `message` are kept.
    pub fn failure(persona: &Persona, kind: VerdictError, message: &str, max_chars: usize) -> Self {
        Self::error(
            persona,
            kind,
            format!("ERROR: {}", truncate_chars(message, max_chars)),
        )
    }

    /// Whether this verdict stands in for a failed evaluation
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

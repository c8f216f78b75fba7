//! Verdict response parsing.
//!
//! Extracts a structured [`Assessment`] from a free-form model response.
//! Pure domain logic: no I/O, just locating the JSON object and
//! deserializing it.
//!
//! # Extraction order
//!
//! | Step | Condition | Extracted text |
//! |------|-----------|----------------|
//! | 1 | contains ```` ```json ```` | between that marker and the next fence |
//! | 2 | contains ```` ``` ```` | between the first fence and the next one |
//! | 3 | `{` with a later `}` | first `{` through last `}` |
//! | 4 | otherwise | the whole response |

use super::entities::{Assessment, Verdict};
use crate::persona::Persona;
use thiserror::Error;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// The model answered, but not with a readable verdict
#[derive(Error, Debug)]
pub enum VerdictParseError {
    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Locate the JSON candidate inside a raw model response.
///
/// Never fails; when nothing looks like JSON the trimmed response is
/// returned as-is and the JSON parser reports the problem.
pub fn extract_json_block(response: &str) -> &str {
    let text = response.trim();

    if let Some(start) = text.find(JSON_FENCE) {
        return until_fence(&text[start + JSON_FENCE.len()..]);
    }

    if let Some(start) = text.find(FENCE) {
        return until_fence(&text[start + FENCE.len()..]);
    }

    if let Some(start) = text.find('{')
        && let Some(end) = text.rfind('}')
        && end > start
    {
        return &text[start..=end];
    }

    text
}

fn until_fence(rest: &str) -> &str {
    match rest.find(FENCE) {
        Some(end) => rest[..end].trim(),
        None => rest.trim(),
    }
}

/// Parse the `{decision, reason, score}` object out of a model response.
///
/// # Examples
///
/// ```
/// use magi_domain::verdict::parse_assessment;
///
/// let a = parse_assessment(r#"Sure. {"decision": false, "reason": "no", "score": 2} Bye."#).unwrap();
/// assert!(!a.decision);
/// assert_eq!(a.score, 2);
/// ```
pub fn parse_assessment(response: &str) -> Result<Assessment, VerdictParseError> {
    let json = extract_json_block(response);
    Ok(serde_json::from_str(json)?)
}

/// Parse a model response and decorate it with the persona's metadata
pub fn parse_verdict(response: &str, persona: &Persona) -> Result<Verdict, VerdictParseError> {
    let assessment = parse_assessment(response)?;
    Ok(Verdict::from_assessment(persona, assessment))
}

//! Verdicts and verdict parsing
//!
//! A [`Verdict`] is the outcome of evaluating one proposal with one
//! persona. It is either parsed from a model response or synthesized
//! locally as an error stand-in; both render the same way.

pub mod entities;
pub mod parsing;

pub use entities::{
    API_KEY_NOT_SET_REASON, Assessment, DEFAULT_ERROR_REASON_CHARS, QUOTA_EXCEEDED_REASON,
    Verdict, VerdictError,
};
pub use parsing::{VerdictParseError, extract_json_block, parse_assessment, parse_verdict};

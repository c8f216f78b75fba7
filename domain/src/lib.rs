//! Domain layer for magi-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Personas
//!
//! Three fixed evaluators (CASPER-1, BALTHASAR-2, MELCHIOR-3), each judging
//! a proposal from a different angle: science, ethics, practicality.
//!
//! ## Verdicts
//!
//! Each persona answers with `{decision, reason, score}`. Failures are
//! turned into error verdicts locally so a council result is always
//! complete.
//!
//! ## Consensus
//!
//! Majority rule over the three verdicts: two approvals carry the proposal.

pub mod cache;
pub mod config;
pub mod consensus;
pub mod core;
pub mod persona;
pub mod verdict;

// Re-export commonly used types
pub use cache::{CacheKey, DEFAULT_CACHE_TTL, ResponseCache, make_key};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use consensus::{AggregateResult, FinalDecision};
pub use core::{error::DomainError, proposal::Proposal};
pub use persona::{Persona, PersonaId, all_personas, get_persona};
pub use verdict::{
    API_KEY_NOT_SET_REASON, Assessment, QUOTA_EXCEEDED_REASON, Verdict, VerdictError,
    VerdictParseError, parse_assessment, parse_verdict,
};

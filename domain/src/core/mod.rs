//! Core domain concepts shared across all subdomains.
//!
//! - [`proposal::Proposal`] — a validated proposal to put before the council
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod proposal;
pub mod string;

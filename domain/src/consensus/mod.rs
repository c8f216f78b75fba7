//! Council consensus
//!
//! Each persona casts one verdict; the proposal is approved when a strict
//! majority approves. Error verdicts vote to reject.

pub mod decision;
pub mod result;

pub use decision::FinalDecision;
pub use result::AggregateResult;

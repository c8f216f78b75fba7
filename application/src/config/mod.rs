//! Application-level configuration.
//!
//! - [`EvaluationParams`] — throttling, cache TTL and generation settings

pub mod evaluation_params;

pub use evaluation_params::EvaluationParams;

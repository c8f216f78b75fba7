//! Application layer for magi-council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::EvaluationParams;
pub use ports::{
    clock::{Clock, SystemClock, Throttle, TokioThrottle},
    model_client::{GenerationRequest, HarmCategory, ModelClient, ModelClientError},
    progress::{NoProgress, ProgressNotifier, VerdictSource},
};
pub use use_cases::evaluate_agent::{AgentOutcome, EvaluateAgentUseCase};
pub use use_cases::run_consensus::{RunConsensusError, RunConsensusUseCase};

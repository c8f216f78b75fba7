//! Run Consensus use case
//!
//! Puts a proposal before all three personas, one after another, and
//! applies the majority rule.

use crate::config::EvaluationParams;
use crate::ports::clock::{Clock, Throttle};
use crate::ports::model_client::ModelClient;
use crate::ports::progress::{NoProgress, ProgressNotifier, VerdictSource};
use crate::use_cases::evaluate_agent::EvaluateAgentUseCase;
use magi_domain::{AggregateResult, DomainError, PersonaId, Proposal, ResponseCache};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur before the council convenes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunConsensusError {
    #[error("ERROR: PROPOSAL INPUT REQUIRED.")]
    InvalidInput,
}

impl From<DomainError> for RunConsensusError {
    fn from(_: DomainError) -> Self {
        RunConsensusError::InvalidInput
    }
}

/// Use case for running a council evaluation
///
/// Owns the response cache. Evaluation takes `&mut self`, so a single
/// council can only run one proposal at a time.
pub struct RunConsensusUseCase<C: ModelClient + 'static> {
    evaluator: EvaluateAgentUseCase<C>,
    cache: ResponseCache,
}

impl<C: ModelClient + 'static> RunConsensusUseCase<C> {
    pub fn new(client: Arc<C>) -> Self {
        let evaluator = EvaluateAgentUseCase::new(client);
        let cache = ResponseCache::new(evaluator.params().cache_ttl);
        Self { evaluator, cache }
    }

    /// Replace the evaluation parameters. Resets the cache to the new TTL.
    pub fn with_params(mut self, params: EvaluationParams) -> Self {
        self.cache = ResponseCache::new(params.cache_ttl);
        self.evaluator = self.evaluator.with_params(params);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.evaluator = self.evaluator.with_clock(clock);
        self
    }

    pub fn with_throttle(mut self, throttle: Arc<dyn Throttle>) -> Self {
        self.evaluator = self.evaluator.with_throttle(throttle);
        self
    }

    /// Name of the model the client selected, if any
    pub fn model_name(&self) -> Option<&str> {
        self.evaluator.client().model_name()
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Number of cache entries still valid right now
    pub fn live_cache_entries(&self) -> usize {
        self.cache.live_entries(self.evaluator.clock().now())
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&mut self, proposal: &str) -> Result<AggregateResult, RunConsensusError> {
        self.execute_with_progress(proposal, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &mut self,
        proposal: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<AggregateResult, RunConsensusError> {
        let proposal = Proposal::new(proposal)?;

        info!("Convening council with {} personas", PersonaId::ALL.len());
        progress.on_council_start(PersonaId::ALL.len());

        let pause = self.evaluator.params().inter_agent_pause;
        let mut verdicts = Vec::with_capacity(PersonaId::ALL.len());

        for persona in PersonaId::ALL {
            progress.on_agent_start(persona);

            let outcome = self
                .evaluator
                .execute(&mut self.cache, persona, &proposal)
                .await;

            if outcome.source == VerdictSource::Fallback {
                debug!(persona = %persona, reason = %outcome.verdict.reason, "Using error verdict");
            }
            progress.on_agent_complete(&outcome.verdict, outcome.source);
            verdicts.push(outcome.verdict);

            self.evaluator.throttle().sleep(pause).await;
        }

        let result = AggregateResult::from_verdicts(proposal.into_content(), verdicts);
        info!(
            approvals = result.approvals,
            decision = %result.final_decision,
            "Council decided {}",
            result.vote_summary()
        );
        progress.on_council_complete(&result);

        Ok(result)
    }
}

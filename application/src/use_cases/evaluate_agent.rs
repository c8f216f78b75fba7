//! Evaluate Agent use case
//!
//! Runs one persona against one proposal:
//!
//! ```text
//! CACHE_CHECK ──hit──────────────────────────────────────────▶ DONE
//!      │ miss
//!      ▼
//! preconditions ──no credential──────────────────────────────▶ ERROR_DONE
//!      │
//!      ▼
//!    DELAY ──▶ CALL ──failure──────────────────────────────────▶ ERROR_DONE
//!                │
//!                ▼
//!              PARSE ──failure─────────────────────────────────▶ ERROR_DONE
//!                │
//!                ▼
//!           CACHE_WRITE ──────────────────────────────────────▶ DONE
//! ```
//!
//! Error verdicts are never written to the cache.

use crate::config::EvaluationParams;
use crate::ports::clock::{Clock, SystemClock, Throttle, TokioThrottle};
use crate::ports::model_client::{GenerationRequest, ModelClient, ModelClientError};
use crate::ports::progress::VerdictSource;
use magi_domain::{
    PersonaId, Proposal, ResponseCache, Verdict, VerdictError, make_key, parse_verdict,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Verdict plus where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentOutcome {
    pub verdict: Verdict,
    pub source: VerdictSource,
}

impl AgentOutcome {
    fn new(verdict: Verdict, source: VerdictSource) -> Self {
        Self { verdict, source }
    }
}

/// Use case for evaluating a proposal with a single persona
pub struct EvaluateAgentUseCase<C: ModelClient + 'static> {
    client: Arc<C>,
    clock: Arc<dyn Clock>,
    throttle: Arc<dyn Throttle>,
    params: EvaluationParams,
}

impl<C: ModelClient + 'static> EvaluateAgentUseCase<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            clock: Arc::new(SystemClock),
            throttle: Arc::new(TokioThrottle),
            params: EvaluationParams::default(),
        }
    }

    pub fn with_params(mut self, params: EvaluationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_throttle(mut self, throttle: Arc<dyn Throttle>) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn params(&self) -> &EvaluationParams {
        &self.params
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub(crate) fn throttle(&self) -> &dyn Throttle {
        self.throttle.as_ref()
    }

    /// Evaluate `proposal` with `persona`, consulting and updating `cache`.
    ///
    /// Never fails: every problem is turned into an error verdict.
    pub async fn execute(
        &self,
        cache: &mut ResponseCache,
        persona: PersonaId,
        proposal: &Proposal,
    ) -> AgentOutcome {
        let definition = persona.persona();
        let key = make_key(proposal.content(), persona);
        let now = self.clock.now();

        if let Some(cached) = cache.get(&key, now) {
            debug!(persona = %persona, key = %key, "Cache hit");
            return AgentOutcome::new(cached.clone(), VerdictSource::Cache);
        }
        debug!(persona = %persona, key = %key, "Cache miss");

        if !self.client.is_configured() {
            warn!(persona = %persona, "No API key or model configured");
            return AgentOutcome::new(
                Verdict::missing_credential(definition),
                VerdictSource::Fallback,
            );
        }

        let delay = self.params.sample_jitter();
        debug!(persona = %persona, delay_ms = delay.as_millis() as u64, "Throttling before call");
        self.throttle.sleep(delay).await;

        let mut request = GenerationRequest::new(
            definition.compose_instruction(proposal.content()),
            self.params.max_output_tokens,
            self.params.temperature,
        );
        if self.params.relaxed_safety {
            request = request.with_relaxed_safety();
        }

        let text = match self.client.generate(&request).await {
            Ok(text) => text,
            Err(e) => {
                warn!(persona = %persona, "Model call failed: {}", e);
                return AgentOutcome::new(self.call_failure(persona, &e), VerdictSource::Fallback);
            }
        };

        match parse_verdict(&text, definition) {
            Ok(verdict) => {
                info!(
                    persona = %persona,
                    decision = verdict.decision,
                    score = verdict.score,
                    "Verdict received"
                );
                cache.put(key, verdict.clone(), now);
                AgentOutcome::new(verdict, VerdictSource::Model)
            }
            Err(e) => {
                warn!(persona = %persona, "Unreadable verdict: {}", e);
                debug!(persona = %persona, response = %text, "Raw response");
                AgentOutcome::new(
                    Verdict::failure(
                        definition,
                        VerdictError::ParseFailure,
                        &e.to_string(),
                        self.params.error_reason_chars,
                    ),
                    VerdictSource::Fallback,
                )
            }
        }
    }

    fn call_failure(&self, persona: PersonaId, error: &ModelClientError) -> Verdict {
        let definition = persona.persona();
        match error {
            ModelClientError::RateLimited(_) => Verdict::rate_limited(definition),
            ModelClientError::Unauthenticated => Verdict::missing_credential(definition),
            ModelClientError::Failure(message) => Verdict::failure(
                definition,
                VerdictError::ModelCallFailure,
                message,
                self.params.error_reason_chars,
            ),
        }
    }
}

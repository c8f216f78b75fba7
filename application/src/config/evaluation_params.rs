//! Evaluation parameters: throttling, caching and generation settings.
//!
//! [`EvaluationParams`] groups the static parameters that control
//! [`EvaluateAgentUseCase`](crate::use_cases::evaluate_agent::EvaluateAgentUseCase)
//! and [`RunConsensusUseCase`](crate::use_cases::run_consensus::RunConsensusUseCase).
//! These are application-layer concerns, not domain policy.

use magi_domain::{DEFAULT_CACHE_TTL, verdict::DEFAULT_ERROR_REASON_CHARS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Evaluation control parameters.
///
/// | Parameter | Default |
/// |-----------|---------|
/// | `cache_ttl` | 300 s |
/// | `jitter_min` .. `jitter_max` | 0.5 s .. 1.5 s before each live call |
/// | `inter_agent_pause` | 0.5 s after each persona |
/// | `max_output_tokens` | 150 |
/// | `temperature` | 0.7 |
/// | `error_reason_chars` | 50 |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationParams {
    /// How long a successful verdict is reused.
    pub cache_ttl: Duration,
    /// Lower bound of the random delay before a live call.
    pub jitter_min: Duration,
    /// Upper bound of the random delay before a live call.
    pub jitter_max: Duration,
    /// Fixed pause after each persona, cache hits included.
    pub inter_agent_pause: Duration,
    pub max_output_tokens: u32,
    pub temperature: f32,
    /// Characters of a failure message kept in the error verdict.
    pub error_reason_chars: usize,
    /// Disable content blocking so adversarial proposals still get a verdict.
    pub relaxed_safety: bool,
}

impl Default for EvaluationParams {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            jitter_min: Duration::from_millis(500),
            jitter_max: Duration::from_millis(1500),
            inter_agent_pause: Duration::from_millis(500),
            max_output_tokens: 150,
            temperature: 0.7,
            error_reason_chars: DEFAULT_ERROR_REASON_CHARS,
            relaxed_safety: true,
        }
    }
}

impl EvaluationParams {
    // ==================== Builder Methods ====================

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_jitter(mut self, min: Duration, max: Duration) -> Self {
        self.jitter_min = min;
        self.jitter_max = max;
        self
    }

    pub fn with_inter_agent_pause(mut self, pause: Duration) -> Self {
        self.inter_agent_pause = pause;
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_error_reason_chars(mut self, chars: usize) -> Self {
        self.error_reason_chars = chars;
        self
    }

    /// Pick a delay uniformly from `[jitter_min, jitter_max]`.
    ///
    /// An inverted or empty range collapses to `jitter_min`.
    pub fn sample_jitter(&self) -> Duration {
        use rand::Rng;

        if self.jitter_max <= self.jitter_min {
            return self.jitter_min;
        }
        rand::thread_rng().gen_range(self.jitter_min..=self.jitter_max)
    }
}

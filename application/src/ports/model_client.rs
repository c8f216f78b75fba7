//! Model client port
//!
//! Defines the interface for one call to a hosted generative-language model.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a model call
///
/// Adapters classify their transport errors into these variants; the
/// use cases never inspect message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelClientError {
    /// No credential configured
    #[error("API key not configured")]
    Unauthenticated,

    /// Upstream quota exhausted (HTTP 429, RESOURCE_EXHAUSTED)
    #[error("Quota exceeded: {0}")]
    RateLimited(String),

    /// Any other failure
    #[error("{0}")]
    Failure(String),
}

impl ModelClientError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ModelClientError::RateLimited(_))
    }
}

/// Content categories whose filtering can be relaxed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmCategory {
    Harassment,
    HateSpeech,
    SexuallyExplicit,
    DangerousContent,
}

impl HarmCategory {
    pub const ALL: [HarmCategory; 4] = [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ];
}

/// A fully composed generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Persona instruction followed by the proposal
    pub instruction: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
    /// Categories for which content blocking is disabled.
    ///
    /// Adversarial proposals must still be evaluated rather than refused.
    pub relaxed_categories: Vec<HarmCategory>,
}

impl GenerationRequest {
    pub fn new(instruction: impl Into<String>, max_output_tokens: u32, temperature: f32) -> Self {
        Self {
            instruction: instruction.into(),
            max_output_tokens,
            temperature,
            relaxed_categories: Vec::new(),
        }
    }

    /// Disable content blocking for every [`HarmCategory`]
    pub fn with_relaxed_safety(mut self) -> Self {
        self.relaxed_categories = HarmCategory::ALL.to_vec();
        self
    }
}

/// Client for a hosted generative-language model
///
/// This port defines how the application layer talks to the model.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Name of the selected model, if one could be determined
    fn model_name(&self) -> Option<&str>;

    /// Whether a credential and a model are both available
    fn is_configured(&self) -> bool;

    /// Generate text for a request
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ModelClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relaxed_safety_covers_all_categories() {
        let request = GenerationRequest::new("x", 150, 0.7).with_relaxed_safety();
        assert_eq!(request.relaxed_categories.len(), 4);
        assert!(
            request
                .relaxed_categories
                .contains(&HarmCategory::DangerousContent)
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ModelClientError::Failure("connection reset".to_string()).to_string(),
            "connection reset"
        );
        assert!(ModelClientError::RateLimited("429".to_string()).is_rate_limited());
        assert!(!ModelClientError::Unauthenticated.is_rate_limited());
    }
}

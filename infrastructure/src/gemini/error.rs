//! Gemini adapter errors and their mapping onto the model client port

use super::types::ErrorEnvelope;
use magi_application::ModelClientError;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the Gemini REST API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("No model selected")]
    NoModel,

    #[error("HTTP client error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Gemini API returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Empty response: {0}")]
    EmptyResponse(String),
}

impl GeminiError {
    /// Build an [`GeminiError::Api`] from a non-2xx response body
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) if envelope.error.status.is_empty() => envelope.error.message,
            Ok(envelope) => format!("{} ({})", envelope.error.message, envelope.error.status),
            Err(_) => body.trim().to_string(),
        };
        GeminiError::Api { status, message }
    }

    /// Whether the upstream quota is exhausted
    ///
    /// HTTP 429, a `RESOURCE_EXHAUSTED` status, or a message mentioning
    /// the quota all count.
    pub fn is_quota_exhausted(&self) -> bool {
        match self {
            GeminiError::Api { status, message } => {
                *status == StatusCode::TOO_MANY_REQUESTS
                    || message.contains("RESOURCE_EXHAUSTED")
                    || message.to_lowercase().contains("quota")
            }
            _ => false,
        }
    }
}

// Request URLs are stripped so a transport failure never echoes query data
impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        GeminiError::Http(err.without_url())
    }
}

impl From<GeminiError> for ModelClientError {
    fn from(err: GeminiError) -> Self {
        if err.is_quota_exhausted() {
            return ModelClientError::RateLimited(err.to_string());
        }
        match err {
            GeminiError::MissingApiKey | GeminiError::NoModel => ModelClientError::Unauthenticated,
            GeminiError::Api { status, .. }
                if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN =>
            {
                ModelClientError::Unauthenticated
            }
            other => ModelClientError::Failure(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_429_is_rate_limited() {
        let err = GeminiError::from_response(StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert!(matches!(
            ModelClientError::from(err),
            ModelClientError::RateLimited(_)
        ));
    }

    #[test]
    fn test_resource_exhausted_status_is_rate_limited() {
        let body = r#"{"error": {"code": 400, "message": "limit hit", "status": "RESOURCE_EXHAUSTED"}}"#;
        let err = GeminiError::from_response(StatusCode::BAD_REQUEST, body);
        assert!(err.is_quota_exhausted());
    }

    #[test]
    fn test_quota_message_is_rate_limited() {
        let err = GeminiError::from_response(StatusCode::BAD_REQUEST, "Quota exceeded for metric");
        assert!(err.is_quota_exhausted());
    }

    #[test]
    fn test_other_api_error_is_failure() {
        let body = r#"{"error": {"code": 500, "message": "internal", "status": "INTERNAL"}}"#;
        let err = GeminiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, body);
        match ModelClientError::from(err) {
            ModelClientError::Failure(msg) => assert!(msg.contains("internal (INTERNAL)")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_forbidden_is_unauthenticated() {
        let err = GeminiError::from_response(StatusCode::FORBIDDEN, "API key not valid");
        assert_eq!(
            ModelClientError::from(err),
            ModelClientError::Unauthenticated
        );
    }
}

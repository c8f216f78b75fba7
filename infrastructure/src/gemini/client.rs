//! Gemini REST client implementing [`ModelClient`]

use super::error::GeminiError;
use super::model_selection::{DEFAULT_CANDIDATES, select_model};
use super::types::{GenerateContentRequest, GenerateContentResponse, ListModelsResponse};
use async_trait::async_trait;
use magi_application::{GenerationRequest, ModelClient, ModelClientError};
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for [`GeminiClient`]
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    /// Explicit model id; skips discovery when set
    pub model: Option<String>,
    /// Discovery preference list, best first
    pub candidates: Vec<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: None,
            candidates: DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for the Gemini `generateContent` endpoint
///
/// The client is usable only when both an API key and a model are known.
/// Otherwise every call fails with [`ModelClientError::Unauthenticated`].
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: Option<String>,
}

impl GeminiClient {
    /// Build a client without model discovery
    pub fn new(settings: &GeminiSettings) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: non_blank(settings.api_key.as_deref()),
            model: non_blank(settings.model.as_deref()),
        })
    }

    /// Build a client and pick a model if none was configured
    ///
    /// A failed model listing leaves the client unconfigured rather than
    /// failing the whole startup.
    pub async fn connect(settings: &GeminiSettings) -> Result<Self, GeminiError> {
        let mut client = Self::new(settings)?;

        if client.api_key.is_none() {
            warn!("No Gemini API key found; all personas will report a missing key");
            return Ok(client);
        }

        if let Some(model) = &client.model {
            info!("Using configured model: {}", model);
            return Ok(client);
        }

        match client.list_models().await {
            Ok(available) => {
                let model = select_model(&available, &settings.candidates);
                info!("Selected model: {}", model);
                client.model = Some(model);
            }
            Err(e) => {
                warn!("Model discovery failed: {}", e);
                client.api_key = None;
            }
        }

        Ok(client)
    }

    /// List models that support `generateContent`, as `models/...` names
    pub async fn list_models(&self) -> Result<Vec<String>, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;
        let url = format!("{}/v1beta/models", self.base_url);

        let mut names = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![("pageSize", "1000".to_string())];
            if let Some(token) = page_token.take() {
                query.push(("pageToken", token));
            }

            let response = self
                .http
                .get(&url)
                .header(API_KEY_HEADER, api_key)
                .query(&query)
                .send()
                .await?;
            let status = response.status();
            let body = response.text().await?;
            if !status.is_success() {
                return Err(GeminiError::from_response(status, &body));
            }

            let page: ListModelsResponse = serde_json::from_str(&body)
                .map_err(|e| GeminiError::EmptyResponse(format!("bad model list: {}", e)))?;
            names.extend(
                page.models
                    .into_iter()
                    .filter(|m| m.supports_generate_content())
                    .map(|m| m.name),
            );

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!("Discovered {} generateContent models", names.len());
        Ok(names)
    }

    async fn generate_content(&self, request: &GenerationRequest) -> Result<String, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;
        let model = self.model.as_deref().ok_or(GeminiError::NoModel)?;
        let model = model.strip_prefix("models/").unwrap_or(model);

        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        let body = GenerateContentRequest::from(request);

        debug!("POST {} ({} chars)", url, request.instruction.chars().count());
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(GeminiError::from_response(status, &text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GeminiError::EmptyResponse(format!("malformed body: {}", e)))?;
        parsed
            .text()
            .ok_or_else(|| GeminiError::EmptyResponse(parsed.missing_text_reason()))
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn model_name(&self) -> Option<&str> {
        self.api_key.as_ref().and(self.model.as_deref())
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.model.is_some()
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ModelClientError> {
        self.generate_content(request).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(server: &MockServer) -> GeminiSettings {
        GeminiSettings {
            api_key: Some("test-key".to_string()),
            base_url: server.uri(),
            ..Default::default()
        }
    }

    fn text_response(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        })
    }

    #[tokio::test]
    async fn test_connect_selects_preferred_model() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .and(header(API_KEY_HEADER, "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [
                    {"name": "models/embedding-001", "supportedGenerationMethods": ["embedContent"]},
                    {"name": "models/gemini-pro", "supportedGenerationMethods": ["generateContent"]},
                    {"name": "models/gemini-2.5-flash", "supportedGenerationMethods": ["generateContent", "countTokens"]}
                ]
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::connect(&settings(&server)).await.unwrap();
        assert!(client.is_configured());
        assert_eq!(client.model_name(), Some("gemini-2.5-flash"));
    }

    #[tokio::test]
    async fn test_connect_follows_pagination() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .and(query_param("pageToken", "next"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [{"name": "models/gemini-pro", "supportedGenerationMethods": ["generateContent"]}]
            })))
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [{"name": "models/gemma-3", "supportedGenerationMethods": ["generateContent"]}],
                "nextPageToken": "next"
            })))
            .with_priority(2)
            .mount(&server)
            .await;

        let client = GeminiClient::connect(&settings(&server)).await.unwrap();
        assert_eq!(client.model_name(), Some("gemini-pro"));
    }

    #[tokio::test]
    async fn test_failed_discovery_leaves_client_unconfigured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = GeminiClient::connect(&settings(&server)).await.unwrap();
        assert!(!client.is_configured());
        assert_eq!(client.model_name(), None);

        let err = client
            .generate(&GenerationRequest::new("x", 10, 0.5))
            .await
            .unwrap_err();
        assert_eq!(err, ModelClientError::Unauthenticated);
    }

    #[tokio::test]
    async fn test_explicit_model_skips_discovery() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let settings = GeminiSettings {
            model: Some("gemini-pro".to_string()),
            ..settings(&server)
        };
        let client = GeminiClient::connect(&settings).await.unwrap();
        assert_eq!(client.model_name(), Some("gemini-pro"));
    }

    #[tokio::test]
    async fn test_generate_sends_request_and_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .and(header(API_KEY_HEADER, "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": {"maxOutputTokens": 150}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(text_response(r#"{"decision": true, "reason": "ok", "score": 8}"#)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let settings = GeminiSettings {
            model: Some("gemini-pro".to_string()),
            ..settings(&server)
        };
        let client = GeminiClient::new(&settings).unwrap();
        let text = client
            .generate(&GenerationRequest::new("judge", 150, 0.7).with_relaxed_safety())
            .await
            .unwrap();

        assert!(text.contains("\"decision\": true"));
    }

    #[tokio::test]
    async fn test_generate_maps_429_to_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}
            })))
            .mount(&server)
            .await;

        let settings = GeminiSettings {
            model: Some("gemini-pro".to_string()),
            ..settings(&server)
        };
        let client = GeminiClient::new(&settings).unwrap();
        let err = client
            .generate(&GenerationRequest::new("judge", 150, 0.7))
            .await
            .unwrap_err();

        assert!(err.is_rate_limited());
    }

    #[tokio::test]
    async fn test_generate_blocked_prompt_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": {"blockReason": "SAFETY"}
            })))
            .mount(&server)
            .await;

        let settings = GeminiSettings {
            model: Some("gemini-pro".to_string()),
            ..settings(&server)
        };
        let client = GeminiClient::new(&settings).unwrap();
        let err = client
            .generate(&GenerationRequest::new("judge", 150, 0.7))
            .await
            .unwrap_err();

        match err {
            ModelClientError::Failure(msg) => assert!(msg.contains("prompt blocked: SAFETY")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_key_is_not_configured() {
        let client = GeminiClient::new(&GeminiSettings {
            api_key: Some("   ".to_string()),
            model: Some("gemini-pro".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert!(!client.is_configured());
        let err = client
            .generate(&GenerationRequest::new("x", 10, 0.5))
            .await
            .unwrap_err();
        assert_eq!(err, ModelClientError::Unauthenticated);
    }

    #[tokio::test]
    async fn test_transport_error_does_not_expose_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(text_response("late"))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let settings = GeminiSettings {
            api_key: Some("SECRET-KEY-123".to_string()),
            model: Some("gemini-pro".to_string()),
            timeout: Duration::from_millis(200),
            ..settings(&server)
        };
        let client = GeminiClient::new(&settings).unwrap();

        let err = client
            .generate_content(&GenerationRequest::new("judge", 150, 0.7))
            .await
            .unwrap_err();
        assert!(matches!(err, GeminiError::Http(_)));
        assert!(!err.to_string().contains("SECRET-KEY-123"));
        assert!(!format!("{:?}", err).contains("SECRET-KEY-123"));

        match ModelClientError::from(err) {
            ModelClientError::Failure(msg) => assert!(!msg.contains("SECRET-KEY-123")),
            other => panic!("unexpected: {:?}", other),
        }
    }
}

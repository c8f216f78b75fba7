//! Test doubles shared by the use case tests

use crate::ports::clock::{Clock, Throttle};
use crate::ports::model_client::{GenerationRequest, ModelClient, ModelClientError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Render a verdict object the way a well-behaved model would
pub(crate) fn verdict_json(decision: bool, reason: &str, score: i64) -> String {
    format!(
        r#"{{"decision": {}, "reason": "{}", "score": {}}}"#,
        decision, reason, score
    )
}

/// Model client that replays a fixed script of responses
pub(crate) struct ScriptedClient {
    configured: bool,
    responses: Mutex<VecDeque<Result<String, ModelClientError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedClient {
    pub(crate) fn new(responses: Vec<Result<String, ModelClientError>>) -> Self {
        Self {
            configured: true,
            responses: Mutex::new(VecDeque::from(responses)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new(vec![])
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    fn model_name(&self) -> Option<&str> {
        self.configured.then_some("scripted-model")
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ModelClientError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ModelClientError::Failure("No more responses".to_string())))
    }
}

/// Clock that only moves when told to
pub(crate) struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub(crate) fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub(crate) fn advance(&self, by: Duration) {
        *self.offset.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock().unwrap()
    }
}

/// Throttle that records requested sleeps instead of sleeping
#[derive(Default)]
pub(crate) struct RecordingThrottle {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingThrottle {
    pub(crate) fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Throttle for RecordingThrottle {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::domain::intake::{FetchRequest, Question, QuestionPayload};
use crate::ports::{GatewayError, QuestionSource};

use super::lock;

/// Mock question source.
///
/// With nothing queued, a fetch fails with a network error.
#[derive(Debug, Clone, Default)]
pub struct MockQuestionSource {
    responses: Arc<Mutex<VecDeque<Result<QuestionPayload, GatewayError>>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<FetchRequest>>>,
}

impl MockQuestionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a payload listing `questions`.
    pub fn with_questions(self, questions: Vec<Question>) -> Self {
        self.with_payload(QuestionPayload::from_questions(&questions))
    }

    /// Queues an arbitrary payload.
    pub fn with_payload(self, payload: QuestionPayload) -> Self {
        lock(&self.responses).push_back(Ok(payload));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: GatewayError) -> Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn calls(&self) -> Vec<FetchRequest> {
        lock(&self.calls).clone()
    }

    fn next_response(&self) -> Result<QuestionPayload, GatewayError> {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::network("No mock question response queued")))
    }
}

#[async_trait]
impl QuestionSource for MockQuestionSource {
    async fn fetch_questions(&self, request: &FetchRequest) -> Result<QuestionPayload, GatewayError> {
        lock(&self.calls).push(request.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_response()
    }
}

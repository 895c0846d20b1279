use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::domain::intake::{SubmissionReceipt, SubmitRequest};
use crate::ports::{AnswerSink, GatewayError};

use super::lock;

/// Mock answer sink.
///
/// With nothing queued, a submission succeeds with an empty receipt.
#[derive(Debug, Clone, Default)]
pub struct MockAnswerSink {
    responses: Arc<Mutex<VecDeque<Result<SubmissionReceipt, GatewayError>>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<SubmitRequest>>>,
}

impl MockAnswerSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_receipt(self, receipt: SubmissionReceipt) -> Self {
        lock(&self.responses).push_back(Ok(receipt));
        self
    }

    pub fn with_error(self, error: GatewayError) -> Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Every submission received, in order.
    pub fn submissions(&self) -> Vec<SubmitRequest> {
        lock(&self.calls).clone()
    }

    fn next_response(&self) -> Result<SubmissionReceipt, GatewayError> {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(SubmissionReceipt::default()))
    }
}

#[async_trait]
impl AnswerSink for MockAnswerSink {
    async fn submit_answers(&self, request: &SubmitRequest) -> Result<SubmissionReceipt, GatewayError> {
        lock(&self.calls).push(request.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_response()
    }
}

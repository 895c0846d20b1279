//! SubmitAnswersHandler - Delivers the complete answer set to the sink.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::domain::intake::{SubmissionReceipt, SubmitRequest};
use crate::ports::{AnswerSink, GatewayError};

/// Handler for the one all-or-nothing submission.
///
/// Failures are returned as-is; retrying is left to the user.
pub struct SubmitAnswersHandler {
    sink: Arc<dyn AnswerSink>,
}

impl SubmitAnswersHandler {
    pub fn new(sink: Arc<dyn AnswerSink>) -> Self {
        Self { sink }
    }

    pub async fn handle(&self, request: &SubmitRequest) -> Result<SubmissionReceipt, GatewayError> {
        let started = Instant::now();
        let result = self.sink.submit_answers(request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => info!(
                document_id = %request.document_id,
                answers = request.answers.len(),
                elapsed_ms,
                "Answers delivered"
            ),
            Err(err) => warn!(
                document_id = %request.document_id,
                elapsed_ms,
                error = %err,
                retryable = err.is_retryable(),
                "Answer submission failed"
            ),
        }
        result
    }
}

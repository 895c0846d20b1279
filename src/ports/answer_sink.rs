//! Answer Sink Port - Where the finished answer set is delivered.

use async_trait::async_trait;

use crate::domain::intake::{SubmissionReceipt, SubmitRequest};

use super::GatewayError;

/// Port for submitting a document's complete answer set.
///
/// All-or-nothing: there is no partial or incremental submission. A call is
/// never retried by the implementation; retries are the user's decision.
#[async_trait]
pub trait AnswerSink: Send + Sync {
    async fn submit_answers(&self, request: &SubmitRequest) -> Result<SubmissionReceipt, GatewayError>;
}

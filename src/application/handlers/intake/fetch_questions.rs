//! FetchQuestionsHandler - Loads a document's questions from the source.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::domain::intake::{FetchRequest, QuestionPayload};
use crate::ports::{GatewayError, QuestionSource};

/// Handler for the question fetch a session starts with.
pub struct FetchQuestionsHandler {
    source: Arc<dyn QuestionSource>,
}

impl FetchQuestionsHandler {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, request: &FetchRequest) -> Result<QuestionPayload, GatewayError> {
        let started = Instant::now();
        let result = self.source.fetch_questions(request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(payload) => info!(
                document_id = %request.document_id,
                elapsed_ms,
                processed = payload.is_processed(),
                "Question fetch completed"
            ),
            Err(err) => warn!(
                document_id = %request.document_id,
                elapsed_ms,
                error = %err,
                retryable = err.is_retryable(),
                "Question fetch failed"
            ),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockQuestionSource;
    use crate::domain::foundation::DocumentId;
    use crate::domain::intake::Question;

    fn request() -> FetchRequest {
        FetchRequest {
            document_id: DocumentId::new("doc-7").unwrap(),
        }
    }

    #[tokio::test]
    async fn passes_the_request_through() {
        let source = MockQuestionSource::new().with_questions(vec![Question::new("[x]", "X?")]);
        let handler = FetchQuestionsHandler::new(Arc::new(source.clone()));

        let payload = handler.handle(&request()).await.unwrap();

        assert!(!payload.is_processed());
        assert_eq!(source.calls(), vec![request()]);
    }

    #[tokio::test]
    async fn surfaces_source_errors_unchanged() {
        let source = MockQuestionSource::new().with_error(GatewayError::status(404, "unknown document"));
        let handler = FetchQuestionsHandler::new(Arc::new(source));

        let result = handler.handle(&request()).await;

        assert_eq!(result, Err(GatewayError::status(404, "unknown document")));
    }
}

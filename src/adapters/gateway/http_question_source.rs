//! Question source backed by an HTTP endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use tracing::debug;

use crate::domain::intake::{FetchRequest, QuestionPayload};
use crate::ports::{GatewayError, QuestionSource};

use super::{build_client, ensure_success, map_transport_error, HttpGatewayConfig};

/// Fetches a document's questions with `POST {"documentId": ...}`.
pub struct HttpQuestionSource {
    url: Secret<String>,
    timeout: Duration,
    client: Client,
}

impl HttpQuestionSource {
    pub fn new(config: &HttpGatewayConfig) -> Result<Self, GatewayError> {
        Ok(Self {
            url: config.questions_url().clone(),
            timeout: config.timeout,
            client: build_client(config.timeout)?,
        })
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch_questions(&self, request: &FetchRequest) -> Result<QuestionPayload, GatewayError> {
        debug!(document_id = %request.document_id, "POST question source");

        let response = self
            .client
            .post(self.url.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| map_transport_error(e, self.timeout))?;
        let response = ensure_success(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| map_transport_error(e, self.timeout))?;
        serde_json::from_str(&body)
            .map_err(|e| GatewayError::parse(format!("Invalid question payload: {}", e)))
    }
}

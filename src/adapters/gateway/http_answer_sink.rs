//! Answer sink backed by an HTTP endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use tracing::debug;

use crate::domain::intake::{SubmissionReceipt, SubmitRequest};
use crate::ports::{AnswerSink, GatewayError};

use super::{build_client, ensure_success, map_transport_error, HttpGatewayConfig};

/// Submits the full answer set with `POST {"documentId", "answers"}`.
///
/// Any 2xx response is success. A JSON body is kept as the receipt; an
/// empty body gives an empty receipt and any other text is kept verbatim.
pub struct HttpAnswerSink {
    url: Secret<String>,
    timeout: Duration,
    client: Client,
}

impl HttpAnswerSink {
    pub fn new(config: &HttpGatewayConfig) -> Result<Self, GatewayError> {
        Ok(Self {
            url: config.submit_url().clone(),
            timeout: config.timeout,
            client: build_client(config.timeout)?,
        })
    }
}

#[async_trait]
impl AnswerSink for HttpAnswerSink {
    async fn submit_answers(&self, request: &SubmitRequest) -> Result<SubmissionReceipt, GatewayError> {
        debug!(
            document_id = %request.document_id,
            answers = request.answers.len(),
            "POST answer sink"
        );

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
        Ok(SubmissionReceipt {
            body: receipt_body(&body),
        })
    }
}

fn receipt_body(raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Some(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
}

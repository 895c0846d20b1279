//! HTTP gateway adapters for the question source and answer sink.
//!
//! Both endpoints are plain JSON-over-POST. Their URLs carry signed access
//! tokens, so they are held as [`Secret`]s and never logged.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpGatewayConfig::new(questions_url, submit_url)
//!     .with_timeout(Duration::from_secs(30));
//!
//! let source = HttpQuestionSource::new(&config)?;
//! let sink = HttpAnswerSink::new(&config)?;
//! ```

mod http_answer_sink;
mod http_question_source;

pub use http_answer_sink::HttpAnswerSink;
pub use http_question_source::HttpQuestionSource;

use std::time::Duration;

use reqwest::{Client, Response};
use secrecy::Secret;

use crate::ports::GatewayError;

/// Endpoints and transport settings shared by both HTTP adapters.
#[derive(Debug, Clone)]
pub struct HttpGatewayConfig {
    questions_url: Secret<String>,
    submit_url: Secret<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HttpGatewayConfig {
    pub fn new(questions_url: Secret<String>, submit_url: Secret<String>) -> Self {
        Self {
            questions_url,
            submit_url,
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn questions_url(&self) -> &Secret<String> {
        &self.questions_url
    }

    pub(crate) fn submit_url(&self) -> &Secret<String> {
        &self.submit_url
    }
}

/// Builds a client with the configured timeout.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, GatewayError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GatewayError::network(format!("Failed to create HTTP client: {}", e)))
}

/// Maps a transport-level failure.
pub(crate) fn map_transport_error(err: reqwest::Error, timeout: Duration) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout {
            timeout_secs: timeout.as_secs(),
        }
    } else if err.is_connect() {
        GatewayError::network(format!("Connection failed: {}", err.without_url()))
    } else {
        GatewayError::network(err.without_url().to_string())
    }
}

/// Passes 2xx responses through and turns anything else into a status
/// error carrying the response body.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::status(status.as_u16(), body))
}

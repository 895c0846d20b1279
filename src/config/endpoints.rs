//! Boundary endpoint configuration

use std::time::Duration;

use reqwest::Url;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::adapters::HttpGatewayConfig;

use super::error::ValidationError;

/// Question source and answer sink endpoints.
///
/// Both URLs carry signed access tokens and stay wrapped in [`Secret`].
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointsConfig {
    /// Where questions are fetched from
    pub questions_url: Option<Secret<String>>,

    /// Where the answer set is submitted
    pub submit_url: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl EndpointsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate endpoint configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_url(&self.questions_url, "QA_INTAKE__ENDPOINTS__QUESTIONS_URL", "questions_url")?;
        check_url(&self.submit_url, "QA_INTAKE__ENDPOINTS__SUBMIT_URL", "submit_url")?;
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }

    /// Settings for the HTTP adapters.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequired` when either URL is absent.
    pub fn gateway_config(&self) -> Result<HttpGatewayConfig, ValidationError> {
        let questions_url = self
            .questions_url
            .clone()
            .ok_or(ValidationError::MissingRequired("QA_INTAKE__ENDPOINTS__QUESTIONS_URL"))?;
        let submit_url = self
            .submit_url
            .clone()
            .ok_or(ValidationError::MissingRequired("QA_INTAKE__ENDPOINTS__SUBMIT_URL"))?;
        Ok(HttpGatewayConfig::new(questions_url, submit_url).with_timeout(self.timeout()))
    }
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            questions_url: None,
            submit_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn check_url(
    url: &Option<Secret<String>>,
    env_name: &'static str,
    field: &'static str,
) -> Result<(), ValidationError> {
    let url = url
        .as_ref()
        .map(|u| u.expose_secret().trim())
        .filter(|u| !u.is_empty())
        .ok_or(ValidationError::MissingRequired(env_name))?;

    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(ValidationError::InvalidEndpointUrl(field)),
    }
}

fn default_timeout() -> u64 {
    60
}

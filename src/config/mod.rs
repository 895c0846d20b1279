//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `QA_INTAKE` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use qa_intake::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let settings = config.flow.to_settings();
//! ```

mod endpoints;
mod error;
mod flow;
mod logging;
mod session;

pub use endpoints::EndpointsConfig;
pub use error::{ConfigError, ValidationError};
pub use flow::{FlowConfig, INTRO_STEP};
pub use logging::LoggingConfig;
pub use session::SessionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Question source and answer sink endpoints
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    /// Document being collected for
    #[serde(default)]
    pub session: SessionConfig,

    /// Pacing and flow behavior
    #[serde(default)]
    pub flow: FlowConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `QA_INTAKE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `QA_INTAKE__ENDPOINTS__QUESTIONS_URL=...` -> `endpoints.questions_url`
    /// - `QA_INTAKE__SESSION__DOCUMENT_ID=doc-1` -> `session.document_id`
    /// - `QA_INTAKE__FLOW__REVIEW_DELAY_MS=0` -> `flow.review_delay_ms`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("QA_INTAKE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// A missing document id is not a configuration error; the session
    /// reports it to the user when it starts.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.endpoints.validate()?;
        self.flow.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

//! Flow pacing and behavior configuration

use std::time::Duration;

use serde::Deserialize;

use crate::domain::intake::{FlowMessages, FlowSettings, GateStep};

use super::error::ValidationError;

/// Longest pause any pacing delay may be set to.
const MAX_DELAY_MS: u64 = 60_000;

/// Step id of the configured intro acknowledgement.
pub const INTRO_STEP: &str = "intro";

/// Flow configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FlowConfig {
    /// Pause after the last answer before review begins
    #[serde(default = "default_review_delay")]
    pub review_delay_ms: u64,

    /// Pause after an answer before the next question
    #[serde(default = "default_answer_delay")]
    pub answer_delay_ms: u64,

    /// Pause after an edit before the review list returns
    #[serde(default = "default_edit_return_delay")]
    pub edit_return_delay_ms: u64,

    /// Whether edits come back on right after a failed submission
    #[serde(default = "default_true")]
    pub reenable_edits_on_failure: bool,

    /// Whether the question-count briefing is shown
    #[serde(default = "default_true")]
    pub briefing: bool,

    /// Whether review waits for a "check my answers" confirmation
    #[serde(default = "default_true")]
    pub review_prompt: bool,

    /// Optional acknowledgement shown before the questions are fetched
    pub intro_message: Option<String>,

    /// Button label for the intro acknowledgement
    #[serde(default = "default_intro_button")]
    pub intro_button: String,

    /// Leave the intro button on screen, disabled, once confirmed
    #[serde(default)]
    pub intro_keep_button: bool,
}

impl FlowConfig {
    /// Validate flow configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("review_delay_ms", self.review_delay_ms),
            ("answer_delay_ms", self.answer_delay_ms),
            ("edit_return_delay_ms", self.edit_return_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(ValidationError::DelayTooLong(name));
            }
        }
        Ok(())
    }

    /// Controller settings with default message texts.
    pub fn to_settings(&self) -> FlowSettings {
        let intro_steps = self
            .intro_message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(|message| {
                let step = GateStep::new(INTRO_STEP, message, self.intro_button.clone());
                if self.intro_keep_button {
                    vec![step.keep_after_confirm()]
                } else {
                    vec![step]
                }
            })
            .unwrap_or_default();

        FlowSettings {
            answer_delay: Duration::from_millis(self.answer_delay_ms),
            review_delay: Duration::from_millis(self.review_delay_ms),
            edit_return_delay: Duration::from_millis(self.edit_return_delay_ms),
            reenable_edits_on_failure: self.reenable_edits_on_failure,
            briefing: self.briefing,
            review_prompt: self.review_prompt,
            intro_steps,
            messages: FlowMessages::default(),
        }
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            review_delay_ms: default_review_delay(),
            answer_delay_ms: default_answer_delay(),
            edit_return_delay_ms: default_edit_return_delay(),
            reenable_edits_on_failure: true,
            briefing: true,
            review_prompt: true,
            intro_message: None,
            intro_button: default_intro_button(),
            intro_keep_button: false,
        }
    }
}

fn default_review_delay() -> u64 {
    2000
}

fn default_answer_delay() -> u64 {
    500
}

fn default_edit_return_delay() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

fn default_intro_button() -> String {
    "Continue".to_string()
}

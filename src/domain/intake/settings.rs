//! Tunables for a session: pacing delays, policies, and the bot's texts.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::GateStep;

/// Placeholder in [`FlowMessages::briefing`] replaced with the question count.
pub const COUNT_TOKEN: &str = "{count}";

/// Behavioural settings for one [`FlowController`](super::FlowController).
///
/// Delays are pacing only; zero is always valid and makes the flow step
/// straight through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSettings {
    /// Pause between an accepted answer and the next question.
    pub answer_delay: Duration,
    /// Pause between the last answer and the review phase.
    pub review_delay: Duration,
    /// Pause between a committed edit and the review list reappearing.
    pub edit_return_delay: Duration,
    /// Re-enable edit controls as soon as a submission fails. When false
    /// they stay disabled until [`FlowController::reenable_edits`].
    ///
    /// [`FlowController::reenable_edits`]: super::FlowController::reenable_edits
    pub reenable_edits_on_failure: bool,
    /// After a successful fetch, show the question count and wait for a
    /// "start" confirmation.
    pub briefing: bool,
    /// Before the review list, show a "check my answers" confirmation.
    pub review_prompt: bool,
    /// Steps acknowledged before the questions are fetched.
    pub intro_steps: Vec<GateStep>,
    pub messages: FlowMessages,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            answer_delay: Duration::from_millis(500),
            review_delay: Duration::from_millis(2000),
            edit_return_delay: Duration::from_millis(500),
            reenable_edits_on_failure: true,
            briefing: true,
            review_prompt: true,
            intro_steps: Vec::new(),
            messages: FlowMessages::default(),
        }
    }
}

impl FlowSettings {
    /// Settings with every delay at zero, everything else default.
    pub fn immediate() -> Self {
        Self {
            answer_delay: Duration::ZERO,
            review_delay: Duration::ZERO,
            edit_return_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_intro_step(mut self, step: GateStep) -> Self {
        self.intro_steps.push(step);
        self
    }

    pub fn without_briefing(mut self) -> Self {
        self.briefing = false;
        self
    }

    pub fn without_review_prompt(mut self) -> Self {
        self.review_prompt = false;
        self
    }

    pub fn with_edits_locked_after_failure(mut self) -> Self {
        self.reenable_edits_on_failure = false;
        self
    }
}

/// Every text the bot says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowMessages {
    /// Shown after the fetch; `{count}` is replaced by the number of questions.
    pub briefing: String,
    pub briefing_button: String,
    pub completion: String,
    pub review_prompt: String,
    pub review_prompt_button: String,
    pub review_heading: String,
    pub submit_success: String,
    pub submit_failure: String,
    pub fetch_failure: String,
    pub parse_failure: String,
    pub empty_question_set: String,
    pub missing_document: String,
    pub already_processed: String,
}

impl Default for FlowMessages {
    fn default() -> Self {
        Self {
            briefing: "Welcome! I'll help collect the information needed for your document.\n\n\
                 - Please complete all questions in one session.\n\
                 - Your best guess is fine if you're unsure about an answer.\n\
                 - There are {count} items that need your attention.\n\n\
                 Ready to get started?"
                .to_string(),
            briefing_button: "Start answering".to_string(),
            completion: "Complete. Please wait for confirmation...".to_string(),
            review_prompt: "Great work! You've completed all the questions. Now let's make sure \
                 everything is accurate before we submit."
                .to_string(),
            review_prompt_button: "Check my answers".to_string(),
            review_heading: "Almost done! Please review your answers. You can edit any response; \
                 when you're satisfied, submit all answers."
                .to_string(),
            submit_success: "Success! You may close this window.".to_string(),
            submit_failure: "Error submitting answers. Please try again.".to_string(),
            fetch_failure: "Error fetching questions. Please reload or contact support.".to_string(),
            parse_failure: "Error: Could not parse questions data. Please contact support.".to_string(),
            empty_question_set: "There are no questions to answer for this document.".to_string(),
            missing_document: "Error: Document ID not provided.".to_string(),
            already_processed: "Thanks for submitting your answers! If you have any questions or \
                 need help, feel free to reach out."
                .to_string(),
        }
    }
}

impl FlowMessages {
    /// The briefing text with the question count filled in.
    pub fn briefing_for(&self, count: usize) -> String {
        self.briefing.replace(COUNT_TOKEN, &count.to_string())
    }
}

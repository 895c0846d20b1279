//! IntakeSession - Runs a `FlowController` against real boundaries.
//!
//! The controller decides, the session acts: every directive it returns is
//! carried out here (fetch, pacing sleep, submit) and the completion is fed
//! back until the controller has nothing more to do.
//!
//! Pacing delays are awaited inline, so a session handles one user action
//! at a time.

use std::sync::Arc;

use tokio::time::sleep;
use tracing::{debug, info};

use crate::domain::foundation::{StateMachine, Timestamp};
use crate::domain::intake::{FlowController, FlowDirective, FlowError, FlowPhase, ViewPosition};
use crate::ports::{AnswerSink, QuestionSource};

use super::handlers::{FetchQuestionsHandler, SubmitAnswersHandler};

/// One interactive intake session.
pub struct IntakeSession {
    controller: FlowController,
    fetch: FetchQuestionsHandler,
    submit: SubmitAnswersHandler,
    started_at: Timestamp,
}

impl IntakeSession {
    pub fn new(
        controller: FlowController,
        source: Arc<dyn QuestionSource>,
        sink: Arc<dyn AnswerSink>,
    ) -> Self {
        Self {
            controller,
            fetch: FetchQuestionsHandler::new(source),
            submit: SubmitAnswersHandler::new(sink),
            started_at: Timestamp::now(),
        }
    }

    pub fn controller(&self) -> &FlowController {
        &self.controller
    }

    pub fn phase(&self) -> FlowPhase {
        self.controller.phase()
    }

    /// True once the session reached `Done` or `Failed`.
    pub fn is_finished(&self) -> bool {
        self.controller.phase().is_terminal()
    }

    pub async fn start(&mut self) -> Result<(), FlowError> {
        let directive = self.controller.start()?;
        self.run(directive).await
    }

    pub async fn acknowledge(&mut self, step_id: &str) -> Result<(), FlowError> {
        let directive = self.controller.acknowledge(step_id)?;
        self.run(directive).await
    }

    /// Confirms whichever acknowledgement step is showing. Does nothing
    /// when none is.
    pub async fn acknowledge_pending(&mut self) -> Result<(), FlowError> {
        let Some(step_id) = self.controller.pending_acknowledgement().map(|s| s.id.clone()) else {
            return Ok(());
        };
        self.acknowledge(&step_id).await
    }

    pub async fn submit_text(&mut self, text: &str) -> Result<(), FlowError> {
        let directive = self.controller.submit_text(text)?;
        self.run(directive).await
    }

    pub async fn go_back(&mut self) -> Result<(), FlowError> {
        let directive = self.controller.go_back()?;
        self.run(directive).await
    }

    pub async fn request_edit(&mut self, index: usize, view: ViewPosition) -> Result<(), FlowError> {
        let directive = self.controller.request_edit(index, view)?;
        self.run(directive).await
    }

    pub async fn confirm_edit(&mut self, text: &str) -> Result<(), FlowError> {
        let directive = self.controller.confirm_edit(text)?;
        self.run(directive).await
    }

    pub async fn reenable_edits(&mut self) -> Result<(), FlowError> {
        let directive = self.controller.reenable_edits()?;
        self.run(directive).await
    }

    pub async fn submit_all(&mut self) -> Result<(), FlowError> {
        let directive = self.controller.submit_all()?;
        self.run(directive).await
    }

    async fn run(&mut self, mut directive: FlowDirective) -> Result<(), FlowError> {
        loop {
            directive = match directive {
                FlowDirective::Idle => break,
                FlowDirective::FetchQuestions(request) => {
                    let result = self.fetch.handle(&request).await;
                    self.controller.on_questions_fetched(result)?
                }
                FlowDirective::Schedule { timer, delay } => {
                    debug!(?timer, delay_ms = delay.as_millis() as u64, "Waiting");
                    if !delay.is_zero() {
                        sleep(delay).await;
                    }
                    self.controller.on_timer(timer)?
                }
                FlowDirective::SubmitAnswers(request) => {
                    let result = self.submit.handle(&request).await;
                    self.controller.on_submit_result(result)?
                }
            };
        }

        if self.is_finished() {
            let elapsed = Timestamp::now().duration_since(&self.started_at);
            info!(
                session_id = %self.controller.session_id(),
                phase = ?self.controller.phase(),
                elapsed_secs = elapsed.num_seconds(),
                "Intake session finished"
            );
        }
        Ok(())
    }
}

impl std::fmt::Debug for IntakeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntakeSession")
            .field("controller", &self.controller)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

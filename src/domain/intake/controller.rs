//! FlowController - the intake state machine.
//!
//! Owns the conversation store and the current [`FlowPhase`], accepts user
//! actions and boundary completions, emits [`PresentationEvent`]s, and tells
//! its driver what to do next via [`FlowDirective`].
//!
//! # Run to completion
//!
//! Every operation runs synchronously and leaves the controller consistent
//! before returning. Network calls and pacing delays are never performed
//! here; they come back in through `on_questions_fetched`,
//! `on_submit_result` and `on_timer`.
//!
//! # Rejections
//!
//! Ordinary UI noise is ignored and returns [`FlowDirective::Idle`]: blank
//! text, back at the first question, a repeated acknowledgement, input
//! while a pacing timer is armed. Actions the UI should have made
//! impossible (editing while submitting, a second submit, text outside a
//! question) return an error and change nothing.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::foundation::{DocumentId, SessionId, StateMachine};
use crate::ports::{GatewayError, Presenter};

use super::{
    AckOutcome, AcknowledgementGate, ConversationState, ConversationStore, FetchRequest,
    FlowDirective, FlowError, FlowPhase, FlowSettings, FlowTimer, GateStep, PresentationEvent,
    QuestionPayload, ReviewItem, SubmissionReceipt, SubmitRequest, SubmitState, ViewPosition,
};

/// Step id of the question-count briefing shown after the fetch.
pub const BRIEFING_STEP: &str = "briefing";

/// Step id of the "check my answers" confirmation shown before review.
pub const REVIEW_PROMPT_STEP: &str = "review_prompt";

/// Where the Gating phase currently is.
#[derive(Debug, Clone)]
enum GatingStage {
    NotStarted,
    Intro(AcknowledgementGate),
    Fetching,
    Briefing(AcknowledgementGate),
    Closed,
}

/// Drives one intake session from acknowledgement to submission.
pub struct FlowController {
    session_id: SessionId,
    document_id: Option<DocumentId>,
    store: ConversationStore,
    phase: FlowPhase,
    gating: GatingStage,
    review_gate: Option<AcknowledgementGate>,
    review_visible: bool,
    edits_enabled: bool,
    edit_view: Option<ViewPosition>,
    pending_timer: Option<FlowTimer>,
    failure: Option<FlowError>,
    last_submit_error: Option<FlowError>,
    receipt: Option<SubmissionReceipt>,
    settings: FlowSettings,
    presenter: Arc<dyn Presenter>,
}

impl FlowController {
    /// Creates a controller in `Gating`. Nothing is shown until [`start`].
    ///
    /// A missing `document_id` is not an error here; `start` reports it to
    /// the user.
    ///
    /// [`start`]: FlowController::start
    pub fn new(
        document_id: Option<DocumentId>,
        settings: FlowSettings,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self {
            session_id: SessionId::new(),
            document_id,
            store: ConversationStore::new(),
            phase: FlowPhase::Gating,
            gating: GatingStage::NotStarted,
            review_gate: None,
            review_visible: false,
            edits_enabled: true,
            edit_view: None,
            pending_timer: None,
            failure: None,
            last_submit_error: None,
            receipt: None,
            settings,
            presenter,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn document_id(&self) -> Option<&DocumentId> {
        self.document_id.as_ref()
    }

    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    pub fn state(&self) -> &ConversationState {
        self.store.state()
    }

    pub fn settings(&self) -> &FlowSettings {
        &self.settings
    }

    /// Why the session ended in `Failed`.
    pub fn failure(&self) -> Option<&FlowError> {
        self.failure.as_ref()
    }

    /// Error of the most recent failed submission, cleared on success.
    pub fn last_submit_error(&self) -> Option<&FlowError> {
        self.last_submit_error.as_ref()
    }

    /// What the sink returned, once `Done` after a submission.
    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    pub fn pending_timer(&self) -> Option<FlowTimer> {
        self.pending_timer
    }

    pub fn edits_enabled(&self) -> bool {
        self.edits_enabled
    }

    /// True while the review list is on screen and actionable.
    pub fn is_review_visible(&self) -> bool {
        self.review_visible
    }

    /// The acknowledgement step currently awaiting confirmation, if any.
    pub fn pending_acknowledgement(&self) -> Option<&GateStep> {
        match (&self.gating, &self.review_gate) {
            (GatingStage::Intro(gate) | GatingStage::Briefing(gate), _) => gate.current(),
            (_, Some(gate)) => gate.current(),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Gating
    // ─────────────────────────────────────────────────────────────────────────

    /// Begins the session: shows the first intro step, or asks for the
    /// questions straight away when there is none.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if already started
    pub fn start(&mut self) -> Result<FlowDirective, FlowError> {
        if !matches!(self.gating, GatingStage::NotStarted) || self.phase != FlowPhase::Gating {
            return Err(FlowError::InvalidTransition {
                from: self.phase,
                to: FlowPhase::Gating,
            });
        }
        info!(session_id = %self.session_id, "Starting intake session");
        self.emit(PresentationEvent::DisableInput);
        self.emit(PresentationEvent::SetBackEnabled { enabled: false });

        if self.document_id.is_none() {
            self.gating = GatingStage::Closed;
            let message = self.settings.messages.missing_document.clone();
            return self.fail(FlowError::MissingDocumentId, message);
        }

        let gate = AcknowledgementGate::new(self.settings.intro_steps.clone());
        match gate.current().cloned() {
            Some(step) => {
                self.emit(PresentationEvent::ShowAcknowledgement { step });
                self.gating = GatingStage::Intro(gate);
                Ok(FlowDirective::Idle)
            }
            None => self.begin_fetch(),
        }
    }

    /// Confirms an acknowledgement step. Repeated or stale confirmations
    /// are ignored.
    pub fn acknowledge(&mut self, step_id: &str) -> Result<FlowDirective, FlowError> {
        match self.phase {
            FlowPhase::Gating => self.acknowledge_gating(step_id),
            FlowPhase::Reviewing => Ok(self.acknowledge_review_prompt(step_id)),
            phase => {
                debug!(session_id = %self.session_id, ?phase, step_id, "Ignoring stale acknowledgement");
                Ok(FlowDirective::Idle)
            }
        }
    }

    /// Completion of the question fetch.
    ///
    /// Transport failures, undecodable payloads and empty lists end the
    /// session in `Failed`; a document flagged as processed ends it in
    /// `Done`.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if no fetch was requested
    pub fn on_questions_fetched(
        &mut self,
        result: Result<QuestionPayload, GatewayError>,
    ) -> Result<FlowDirective, FlowError> {
        if self.phase != FlowPhase::Gating || !matches!(self.gating, GatingStage::Fetching) {
            error!(session_id = %self.session_id, phase = ?self.phase, "Question fetch completed without a request");
            return Err(FlowError::InvalidTransition {
                from: self.phase,
                to: FlowPhase::Asking,
            });
        }
        self.gating = GatingStage::Closed;

        let payload = match result {
            Ok(payload) => payload,
            Err(err) => {
                let message = self.settings.messages.fetch_failure.clone();
                return self.fail(FlowError::NetworkFailure(err), message);
            }
        };

        if payload.is_processed() {
            info!(session_id = %self.session_id, "Document already processed");
            self.transition(FlowPhase::Done)?;
            let message = self.settings.messages.already_processed.clone();
            self.emit(PresentationEvent::bot(message));
            self.emit(PresentationEvent::DisableInput);
            return Ok(FlowDirective::Idle);
        }

        let count = match self.store.load_questions(&payload.questions) {
            Ok(count) => count,
            Err(err) => {
                let message = self.settings.messages.parse_failure.clone();
                return self.fail(err, message);
            }
        };
        if count == 0 {
            let message = self.settings.messages.empty_question_set.clone();
            return self.fail(FlowError::EmptyQuestionSet, message);
        }
        info!(session_id = %self.session_id, count, "Questions loaded");

        if self.settings.briefing {
            let messages = &self.settings.messages;
            let step = GateStep::new(
                BRIEFING_STEP,
                messages.briefing_for(count),
                messages.briefing_button.clone(),
            );
            self.emit(PresentationEvent::ShowAcknowledgement { step: step.clone() });
            self.gating = GatingStage::Briefing(AcknowledgementGate::single(step));
            Ok(FlowDirective::Idle)
        } else {
            self.enter_asking()
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Asking
    // ─────────────────────────────────────────────────────────────────────────

    /// Free-text input: an answer while asking, the revised text while
    /// editing. Blank input is ignored.
    ///
    /// # Errors
    ///
    /// - `NoActiveQuestion` outside `Asking` and `Editing`
    pub fn submit_text(&mut self, text: &str) -> Result<FlowDirective, FlowError> {
        if !self.phase.accepts_text() {
            warn!(session_id = %self.session_id, phase = ?self.phase, "Text submitted with no question showing");
            return Err(FlowError::NoActiveQuestion);
        }
        if self.phase == FlowPhase::Editing {
            self.confirm_edit(text)
        } else {
            self.answer(text)
        }
    }

    /// Steps back one question, discarding its answer.
    ///
    /// Ignored at the first question and outside `Asking`. Going back
    /// while the next question or the review is still pending cancels it;
    /// either way the reopened question's prompt stays on screen.
    pub fn go_back(&mut self) -> Result<FlowDirective, FlowError> {
        if !self.phase.allows_back() {
            debug!(session_id = %self.session_id, phase = ?self.phase, "Back is not available");
            return Ok(FlowDirective::Idle);
        }
        if self.store.state().position() == 0 {
            return Ok(FlowDirective::Idle);
        }

        let discarded = self.store.retreat()?;
        if let Some(timer) = self.pending_timer.take() {
            debug!(session_id = %self.session_id, ?timer, "Cancelled pending timer");
        }
        let state = self.store.state();
        let (index, total) = (state.position(), state.question_count());
        debug!(
            session_id = %self.session_id,
            position = index,
            discarded = discarded.is_some(),
            "Stepped back"
        );
        self.emit(PresentationEvent::RetractLastExchange { index, total });
        self.emit(PresentationEvent::EnableInput);
        Ok(FlowDirective::Idle)
    }

    /// A pacing timer elapsed. Timers that were cancelled or superseded are
    /// ignored.
    pub fn on_timer(&mut self, timer: FlowTimer) -> Result<FlowDirective, FlowError> {
        if self.pending_timer != Some(timer) {
            debug!(session_id = %self.session_id, ?timer, "Ignoring stale timer");
            return Ok(FlowDirective::Idle);
        }
        self.pending_timer = None;

        match timer {
            FlowTimer::NextQuestion => {
                self.emit(PresentationEvent::EnableInput);
                self.show_current_question();
            }
            FlowTimer::Review => self.enter_review()?,
            FlowTimer::ReturnToReview => {
                let view = self.edit_view.take().unwrap_or_default();
                self.show_review_list(view);
            }
        }
        Ok(FlowDirective::Idle)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Review and edit
    // ─────────────────────────────────────────────────────────────────────────

    /// Opens answer `index` for editing, remembering `view` so the review
    /// list can be restored where the user left it.
    ///
    /// # Errors
    ///
    /// - `SubmissionInFlight` while submitting
    /// - `InvalidTransition` outside `Reviewing`
    /// - `InvalidEditIndex` if no such answer exists
    pub fn request_edit(
        &mut self,
        index: usize,
        view: ViewPosition,
    ) -> Result<FlowDirective, FlowError> {
        self.ensure_reviewing(FlowPhase::Editing)?;
        if !self.review_visible || self.pending_timer.is_some() {
            return Ok(FlowDirective::Idle);
        }
        if !self.edits_enabled {
            debug!(session_id = %self.session_id, index, "Edits are disabled");
            return Ok(FlowDirective::Idle);
        }

        let prefill = self.store.begin_edit(index)?.to_string();
        self.transition(FlowPhase::Editing)?;
        self.review_visible = false;
        self.edit_view = Some(view);
        debug!(session_id = %self.session_id, index, "Editing answer");

        let state = self.store.state();
        let question = state
            .questions()
            .get(index)
            .map(|q| q.question.clone())
            .unwrap_or_default();
        let total = state.question_count();
        self.emit(PresentationEvent::ShowEditor {
            index,
            total,
            question,
            prefill,
        });
        self.emit(PresentationEvent::SetBackEnabled { enabled: false });
        self.emit(PresentationEvent::EnableInput);
        Ok(FlowDirective::Idle)
    }

    /// Commits the revised text of the answer being edited. Blank input is
    /// ignored and the edit stays open.
    ///
    /// # Errors
    ///
    /// - `NoActiveEdit` outside `Editing`
    pub fn confirm_edit(&mut self, text: &str) -> Result<FlowDirective, FlowError> {
        if self.phase != FlowPhase::Editing {
            return Err(FlowError::NoActiveEdit);
        }
        let text = text.trim();
        if text.is_empty() {
            return Ok(FlowDirective::Idle);
        }

        let index = self.store.commit_edit(text)?;
        self.transition(FlowPhase::Reviewing)?;
        debug!(session_id = %self.session_id, index, "Answer revised");
        self.emit(PresentationEvent::user(text));
        self.emit(PresentationEvent::DisableInput);
        Ok(self.schedule(FlowTimer::ReturnToReview, self.settings.edit_return_delay))
    }

    /// Re-enables edit controls after a failed submission, for sessions
    /// configured to keep them locked.
    ///
    /// # Errors
    ///
    /// - `SubmissionInFlight` while submitting
    pub fn reenable_edits(&mut self) -> Result<FlowDirective, FlowError> {
        match self.phase {
            FlowPhase::Reviewing => {}
            FlowPhase::Submitting => return Err(FlowError::SubmissionInFlight),
            _ => return Ok(FlowDirective::Idle),
        }
        if !self.edits_enabled {
            self.edits_enabled = true;
            self.emit(PresentationEvent::SetEditsEnabled { enabled: true });
        }
        Ok(FlowDirective::Idle)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────────────────────

    /// Sends the full answer set. Edit and submit controls are disabled
    /// until the sink responds.
    ///
    /// # Errors
    ///
    /// - `SubmissionInFlight` if a submission is already in flight
    /// - `InvalidTransition` outside `Reviewing`
    pub fn submit_all(&mut self) -> Result<FlowDirective, FlowError> {
        self.ensure_reviewing(FlowPhase::Submitting)?;
        if !self.review_visible || self.pending_timer.is_some() {
            return Ok(FlowDirective::Idle);
        }

        let state = self.store.state();
        if !self.store.is_complete() || !state.is_in_lockstep() {
            error!(
                session_id = %self.session_id,
                answers = state.answers().len(),
                questions = state.question_count(),
                "Answers out of step with questions"
            );
            return Err(FlowError::InvalidTransition {
                from: self.phase,
                to: FlowPhase::Submitting,
            });
        }
        let document_id = self.document_id.clone().ok_or(FlowError::MissingDocumentId)?;
        let answers = state.answers().to_vec();

        self.transition(FlowPhase::Submitting)?;
        info!(session_id = %self.session_id, count = answers.len(), "Submitting answers");
        self.emit(PresentationEvent::SetSubmitState {
            state: SubmitState::Pending,
        });
        self.emit(PresentationEvent::SetEditsEnabled { enabled: false });
        Ok(FlowDirective::SubmitAnswers(SubmitRequest {
            document_id,
            answers,
        }))
    }

    /// Completion of the submission.
    ///
    /// On failure the answers are kept, the flow returns to `Reviewing`
    /// and submit is offered again.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if nothing was being submitted
    pub fn on_submit_result(
        &mut self,
        result: Result<SubmissionReceipt, GatewayError>,
    ) -> Result<FlowDirective, FlowError> {
        if self.phase != FlowPhase::Submitting {
            error!(session_id = %self.session_id, phase = ?self.phase, "Submission completed without a request");
            return Err(FlowError::InvalidTransition {
                from: self.phase,
                to: FlowPhase::Done,
            });
        }

        match result {
            Ok(receipt) => {
                self.transition(FlowPhase::Done)?;
                info!(session_id = %self.session_id, "Answers submitted");
                self.receipt = Some(receipt);
                self.last_submit_error = None;
                self.emit(PresentationEvent::SetSubmitState {
                    state: SubmitState::Success,
                });
                let message = self.settings.messages.submit_success.clone();
                self.emit(PresentationEvent::bot(message));
                self.emit(PresentationEvent::DisableInput);
            }
            Err(err) => {
                warn!(session_id = %self.session_id, error = %err, "Submission failed");
                self.transition(FlowPhase::Reviewing)?;
                self.last_submit_error = Some(FlowError::NetworkFailure(err));
                let message = self.settings.messages.submit_failure.clone();
                self.emit(PresentationEvent::bot(message));
                self.emit(PresentationEvent::SetSubmitState {
                    state: SubmitState::Error,
                });
                self.edits_enabled = self.settings.reenable_edits_on_failure;
                self.emit(PresentationEvent::SetEditsEnabled {
                    enabled: self.edits_enabled,
                });
            }
        }
        Ok(FlowDirective::Idle)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn acknowledge_gating(&mut self, step_id: &str) -> Result<FlowDirective, FlowError> {
        let outcome = match &mut self.gating {
            GatingStage::Intro(gate) | GatingStage::Briefing(gate) => gate.acknowledge(step_id),
            _ => AckOutcome::Ignored,
        };
        let AckOutcome::Advanced { confirmed, next } = outcome else {
            debug!(session_id = %self.session_id, step_id, "Ignoring acknowledgement");
            return Ok(FlowDirective::Idle);
        };

        self.retire(&confirmed);
        if let Some(step) = next {
            self.emit(PresentationEvent::ShowAcknowledgement { step });
            return Ok(FlowDirective::Idle);
        }

        if matches!(self.gating, GatingStage::Intro(_)) {
            self.begin_fetch()
        } else {
            self.enter_asking()
        }
    }

    fn acknowledge_review_prompt(&mut self, step_id: &str) -> FlowDirective {
        let Some(gate) = self.review_gate.as_mut() else {
            return FlowDirective::Idle;
        };
        let AckOutcome::Advanced { confirmed, next } = gate.acknowledge(step_id) else {
            return FlowDirective::Idle;
        };

        self.retire(&confirmed);
        match next {
            Some(step) => self.emit(PresentationEvent::ShowAcknowledgement { step }),
            None => {
                self.review_gate = None;
                self.show_review_list(ViewPosition::default());
            }
        }
        FlowDirective::Idle
    }

    fn begin_fetch(&mut self) -> Result<FlowDirective, FlowError> {
        let document_id = self.document_id.clone().ok_or(FlowError::MissingDocumentId)?;
        self.gating = GatingStage::Fetching;
        info!(session_id = %self.session_id, %document_id, "Fetching questions");
        Ok(FlowDirective::FetchQuestions(FetchRequest { document_id }))
    }

    fn enter_asking(&mut self) -> Result<FlowDirective, FlowError> {
        self.transition(FlowPhase::Asking)?;
        self.gating = GatingStage::Closed;
        self.emit(PresentationEvent::EnableInput);
        self.emit(PresentationEvent::SetBackEnabled { enabled: true });
        self.show_current_question();
        Ok(FlowDirective::Idle)
    }

    fn answer(&mut self, text: &str) -> Result<FlowDirective, FlowError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(FlowDirective::Idle);
        }
        if self.pending_timer.is_some() {
            debug!(session_id = %self.session_id, "Ignoring input while a timer is pending");
            return Ok(FlowDirective::Idle);
        }

        let index = self.store.state().position();
        self.store.record_answer(text)?;
        debug!(session_id = %self.session_id, index, "Answer recorded");
        self.emit(PresentationEvent::user(text));
        self.emit(PresentationEvent::DisableInput);

        if self.store.is_complete() {
            let message = self.settings.messages.completion.clone();
            self.emit(PresentationEvent::bot(message));
            Ok(self.schedule(FlowTimer::Review, self.settings.review_delay))
        } else {
            Ok(self.schedule(FlowTimer::NextQuestion, self.settings.answer_delay))
        }
    }

    fn enter_review(&mut self) -> Result<(), FlowError> {
        self.transition(FlowPhase::Reviewing)?;
        self.review_visible = false;
        self.emit(PresentationEvent::SetBackEnabled { enabled: false });

        if self.settings.review_prompt {
            let messages = &self.settings.messages;
            let step = GateStep::new(
                REVIEW_PROMPT_STEP,
                messages.review_prompt.clone(),
                messages.review_prompt_button.clone(),
            );
            self.emit(PresentationEvent::ShowAcknowledgement { step: step.clone() });
            self.review_gate = Some(AcknowledgementGate::single(step));
        } else {
            self.show_review_list(ViewPosition::default());
        }
        Ok(())
    }

    fn show_current_question(&self) {
        let state = self.store.state();
        if let Some(question) = state.current_question() {
            self.emit(PresentationEvent::ShowQuestion {
                index: state.position(),
                total: state.question_count(),
                text: question.question.clone(),
            });
        }
    }

    fn show_review_list(&mut self, view: ViewPosition) {
        let state = self.store.state();
        let total = state.question_count();
        let items = state
            .answers()
            .iter()
            .enumerate()
            .map(|(index, answer)| ReviewItem {
                index,
                total,
                question: answer.question.clone(),
                answer: answer.answer.clone(),
            })
            .collect();

        self.emit(PresentationEvent::ShowReviewList {
            heading: self.settings.messages.review_heading.clone(),
            items,
            view,
        });
        self.emit(PresentationEvent::DisableInput);
        self.emit(PresentationEvent::SetBackEnabled { enabled: false });
        self.emit(PresentationEvent::SetEditsEnabled {
            enabled: self.edits_enabled,
        });
        self.emit(PresentationEvent::SetSubmitState {
            state: SubmitState::Ready,
        });
        self.review_visible = true;
    }

    fn ensure_reviewing(&self, target: FlowPhase) -> Result<(), FlowError> {
        match self.phase {
            FlowPhase::Reviewing => Ok(()),
            FlowPhase::Submitting => {
                warn!(session_id = %self.session_id, ?target, "Rejected while submitting");
                Err(FlowError::SubmissionInFlight)
            }
            from => Err(FlowError::InvalidTransition { from, to: target }),
        }
    }

    fn fail(&mut self, err: FlowError, message: String) -> Result<FlowDirective, FlowError> {
        warn!(session_id = %self.session_id, code = %err.code(), error = %err, "Session failed");
        self.transition(FlowPhase::Failed)?;
        self.emit(PresentationEvent::bot(message));
        self.emit(PresentationEvent::DisableInput);
        self.failure = Some(err);
        Ok(FlowDirective::Idle)
    }

    fn schedule(&mut self, timer: FlowTimer, delay: std::time::Duration) -> FlowDirective {
        self.pending_timer = Some(timer);
        FlowDirective::Schedule { timer, delay }
    }

    fn retire(&self, step: &GateStep) {
        self.emit(PresentationEvent::RetireAcknowledgement {
            step_id: step.id.clone(),
            removed: step.remove_on_confirm,
        });
    }

    fn transition(&mut self, target: FlowPhase) -> Result<(), FlowError> {
        let from = self.phase;
        self.phase = from
            .transition_to(target)
            .map_err(|_| FlowError::InvalidTransition { from, to: target })?;
        debug!(session_id = %self.session_id, ?from, to = ?target, "Phase transition");
        Ok(())
    }

    fn emit(&self, event: PresentationEvent) {
        self.presenter.present(event);
    }
}

impl std::fmt::Debug for FlowController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowController")
            .field("session_id", &self.session_id)
            .field("document_id", &self.document_id)
            .field("phase", &self.phase)
            .field("gating", &self.gating)
            .field("state", self.store.state())
            .field("pending_timer", &self.pending_timer)
            .finish_non_exhaustive()
    }
}

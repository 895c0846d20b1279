//! In-memory conversation state and its mutation primitives.
//!
//! The store does no I/O and makes no sequencing decisions; the controller
//! composes these primitives. Every primitive checks its precondition and
//! returns an error before touching state, so a rejected call leaves the
//! store exactly as it was.

use serde::Serialize;
use serde_json::Value;

use super::question::decode_questions;
use super::{Answer, FlowError, Question};

/// Snapshot of a session's data.
///
/// # Invariants
///
/// - `position <= questions.len()`
/// - outside edit mode, `answers.len() == position`
/// - `edit_target`, when set, indexes into `answers`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversationState {
    questions: Vec<Question>,
    answers: Vec<Answer>,
    position: usize,
    edit_target: Option<usize>,
}

impl ConversationState {
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn edit_target(&self) -> Option<usize> {
        self.edit_target
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    /// True when answers track questions index for index with no gaps.
    pub fn is_in_lockstep(&self) -> bool {
        self.position <= self.questions.len()
            && self.answers.len() == self.position
            && self
                .answers
                .iter()
                .zip(&self.questions)
                .all(|(a, q)| a.placeholder == q.placeholder && a.question == q.question)
            && self.edit_target.map_or(true, |i| i < self.answers.len())
    }
}

/// Owner of [`ConversationState`]; only the controller holds one.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    state: ConversationState,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Replaces the question list from a raw source payload and resets
    /// progress.
    ///
    /// # Errors
    ///
    /// - `InvalidQuestionData` if `raw` is not a sequence of
    ///   `{placeholder, question}` records (typed or as JSON text);
    ///   the store is left unchanged
    pub fn load_questions(&mut self, raw: &Value) -> Result<usize, FlowError> {
        let questions = decode_questions(raw)?;
        self.state = ConversationState {
            questions,
            ..ConversationState::default()
        };
        Ok(self.state.questions.len())
    }

    /// Records `text` as the answer to the current question and advances.
    ///
    /// # Errors
    ///
    /// - `NoActiveQuestion` if every question is answered or an edit is open
    pub fn record_answer(&mut self, text: impl Into<String>) -> Result<&Answer, FlowError> {
        if self.state.edit_target.is_some() {
            return Err(FlowError::NoActiveQuestion);
        }
        let question = self
            .state
            .questions
            .get(self.state.position)
            .ok_or(FlowError::NoActiveQuestion)?;

        let answer = Answer::for_question(question, text);
        self.state.answers.truncate(self.state.position);
        self.state.answers.push(answer);
        self.state.position += 1;
        Ok(&self.state.answers[self.state.position - 1])
    }

    /// Steps back one question, discarding the answer given to it.
    ///
    /// Returns the discarded answer.
    ///
    /// # Errors
    ///
    /// - `AtStart` if at the first question or an edit is open
    pub fn retreat(&mut self) -> Result<Option<Answer>, FlowError> {
        if self.state.position == 0 || self.state.edit_target.is_some() {
            return Err(FlowError::AtStart);
        }
        self.state.position -= 1;
        let removed = if self.state.answers.len() > self.state.position {
            self.state.answers.pop()
        } else {
            None
        };
        Ok(removed)
    }

    /// Opens answer `index` for editing and returns its current text.
    ///
    /// # Errors
    ///
    /// - `InvalidEditIndex` if no answer exists at `index`
    pub fn begin_edit(&mut self, index: usize) -> Result<&str, FlowError> {
        let count = self.state.answers.len();
        if index >= count {
            return Err(FlowError::InvalidEditIndex { index, count });
        }
        self.state.edit_target = Some(index);
        Ok(&self.state.answers[index].answer)
    }

    /// Overwrites the answer being edited and closes the edit.
    ///
    /// Returns the index that was edited.
    ///
    /// # Errors
    ///
    /// - `NoActiveEdit` if no edit is open
    pub fn commit_edit(&mut self, text: impl Into<String>) -> Result<usize, FlowError> {
        let index = self.state.edit_target.ok_or(FlowError::NoActiveEdit)?;
        let slot = self
            .state
            .answers
            .get_mut(index)
            .ok_or(FlowError::NoActiveEdit)?;
        slot.answer = text.into();
        self.state.edit_target = None;
        Ok(index)
    }

    /// True once every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.state.position == self.state.questions.len()
    }
}

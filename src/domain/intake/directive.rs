//! What the controller asks its driver to do next.
//!
//! The controller itself never waits and never touches the network. Each
//! operation returns a [`FlowDirective`]; the driver carries it out and
//! feeds the completion back through the matching `on_*` operation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DocumentId;

use super::Answer;

/// Request to the question source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    pub document_id: DocumentId,
}

/// Request to the answer sink: the complete, ordered answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub document_id: DocumentId,
    pub answers: Vec<Answer>,
}

/// Whatever the sink sent back on success. Kept, never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub body: Option<serde_json::Value>,
}

/// Pacing timers the controller can arm. At most one is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowTimer {
    /// Show the next question.
    NextQuestion,
    /// Enter the review phase.
    Review,
    /// Show the review list again after an edit.
    ReturnToReview,
}

/// Follow-up work for the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowDirective {
    /// Nothing to do until the next user action.
    Idle,
    /// Call the question source, then `on_questions_fetched`.
    FetchQuestions(FetchRequest),
    /// Wait `delay`, then `on_timer(timer)`.
    Schedule { timer: FlowTimer, delay: Duration },
    /// Call the answer sink, then `on_submit_result`.
    SubmitAnswers(SubmitRequest),
}

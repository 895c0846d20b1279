//! Error types for the intake flow.

use crate::domain::foundation::ErrorCode;
use crate::ports::GatewayError;

use super::FlowPhase;

/// Everything that can go wrong while driving a session.
///
/// Boundary problems (`EmptyQuestionSet`, `InvalidQuestionData`,
/// `MissingDocumentId`, `NetworkFailure`) are shown to the user. The rest
/// mean a caller drove the controller in a way the UI should have
/// prevented; they are rejected before any state changes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlowError {
    #[error("the question source returned no questions")]
    EmptyQuestionSet,

    #[error("invalid question data: {0}")]
    InvalidQuestionData(String),

    #[error("no document id was provided")]
    MissingDocumentId,

    #[error("no question is awaiting an answer")]
    NoActiveQuestion,

    #[error("already at the first question")]
    AtStart,

    #[error("no answer is being edited")]
    NoActiveEdit,

    #[error("answer {index} does not exist ({count} recorded)")]
    InvalidEditIndex { index: usize, count: usize },

    #[error("invalid transition from {from:?} to {to:?}")]
    InvalidTransition { from: FlowPhase, to: FlowPhase },

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("network failure: {0}")]
    NetworkFailure(#[from] GatewayError),
}

impl FlowError {
    pub fn invalid_question_data(reason: impl Into<String>) -> Self {
        FlowError::InvalidQuestionData(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            FlowError::EmptyQuestionSet => ErrorCode::EmptyQuestionSet,
            FlowError::InvalidQuestionData(_) => ErrorCode::InvalidQuestionData,
            FlowError::MissingDocumentId => ErrorCode::MissingDocumentId,
            FlowError::NoActiveQuestion => ErrorCode::NoActiveQuestion,
            FlowError::AtStart => ErrorCode::AtStart,
            FlowError::NoActiveEdit => ErrorCode::NoActiveEdit,
            FlowError::InvalidEditIndex { .. } => ErrorCode::InvalidEditIndex,
            FlowError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            FlowError::SubmissionInFlight => ErrorCode::SubmissionInFlight,
            FlowError::NetworkFailure(_) => ErrorCode::NetworkFailure,
        }
    }

    /// True for failures the user is told about; false for invariant
    /// violations that only ever reach logs.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            FlowError::EmptyQuestionSet
                | FlowError::InvalidQuestionData(_)
                | FlowError::MissingDocumentId
                | FlowError::NetworkFailure(_)
        )
    }
}

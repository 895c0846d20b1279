//! Error vocabulary shared by the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Stable error codes, used in logs and by presentation layers that want to
/// branch on the failure kind without matching on error enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Session errors
    MissingDocumentId,

    // Question data errors
    EmptyQuestionSet,
    InvalidQuestionData,

    // Flow invariant errors
    NoActiveQuestion,
    AtStart,
    NoActiveEdit,
    InvalidEditIndex,
    InvalidStateTransition,
    SubmissionInFlight,

    // Boundary errors
    NetworkFailure,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MissingDocumentId => "MISSING_DOCUMENT_ID",
            ErrorCode::EmptyQuestionSet => "EMPTY_QUESTION_SET",
            ErrorCode::InvalidQuestionData => "INVALID_QUESTION_DATA",
            ErrorCode::NoActiveQuestion => "NO_ACTIVE_QUESTION",
            ErrorCode::AtStart => "AT_START",
            ErrorCode::NoActiveEdit => "NO_ACTIVE_EDIT",
            ErrorCode::InvalidEditIndex => "INVALID_EDIT_INDEX",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::SubmissionInFlight => "SUBMISSION_IN_FLIGHT",
            ErrorCode::NetworkFailure => "NETWORK_FAILURE",
        };
        write!(f, "{}", s)
    }
}

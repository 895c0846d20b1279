//! Presentation events emitted by the flow controller.
//!
//! The controller never knows how anything is drawn. It describes what the
//! user should now see; a presenter turns that into bubbles, buttons or
//! terminal lines.

use serde::{Deserialize, Serialize};

use super::GateStep;

/// Who a chat message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Bot,
    User,
}

/// Visual state of the "submit all" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitState {
    /// Enabled, nothing sent yet.
    Ready,
    /// Disabled while the submission is in flight.
    Pending,
    Success,
    /// Last attempt failed; enabled again for a retry.
    Error,
}

/// Opaque scroll/view position captured by the UI before an edit.
///
/// Handed back unmodified when the review list is shown again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewPosition(pub i64);

/// One row of the review list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub index: usize,
    pub total: usize,
    pub question: String,
    pub answer: String,
}

/// Something the presentation layer should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PresentationEvent {
    ShowMessage {
        text: String,
        role: Role,
    },
    /// A gate step: its message plus a one-shot confirmation control.
    ShowAcknowledgement {
        step: GateStep,
    },
    /// The confirmation control of `step_id` was used; remove it or leave
    /// it disabled.
    RetireAcknowledgement {
        step_id: String,
        removed: bool,
    },
    /// Question `index` (zero-based) of `total`.
    ShowQuestion {
        index: usize,
        total: usize,
        text: String,
    },
    /// The edit screen for answer `index`, input pre-filled with `prefill`.
    ShowEditor {
        index: usize,
        total: usize,
        question: String,
        prefill: String,
    },
    /// Replace the screen with the review list, scrolled to `view`.
    ShowReviewList {
        heading: String,
        items: Vec<ReviewItem>,
        view: ViewPosition,
    },
    /// Question `index` is open again: remove its answer and everything
    /// shown after it, keeping its prompt in view.
    ///
    /// Covers both a following question that was already shown and a
    /// pacing pause that had not finished yet.
    RetractLastExchange {
        index: usize,
        total: usize,
    },
    EnableInput,
    DisableInput,
    SetBackEnabled {
        enabled: bool,
    },
    SetEditsEnabled {
        enabled: bool,
    },
    SetSubmitState {
        state: SubmitState,
    },
}

impl PresentationEvent {
    pub fn bot(text: impl Into<String>) -> Self {
        Self::ShowMessage {
            text: text.into(),
            role: Role::Bot,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::ShowMessage {
            text: text.into(),
            role: Role::User,
        }
    }
}

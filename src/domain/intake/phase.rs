//! Flow phase state machine.
//!
//! Defines the phases a session moves through and the legal edges between
//! them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The phase an intake session is in.
///
/// - `Gating`: acknowledgement steps and the question fetch
/// - `Asking`: a question is presented, awaiting input
/// - `Reviewing`: all answers listed, awaiting an edit or submit
/// - `Editing`: one answer being revised
/// - `Submitting`: submission in flight
/// - `Done`: answers accepted (or the document was already processed)
/// - `Failed`: the session could not start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlowPhase {
    #[default]
    Gating,
    Asking,
    Reviewing,
    Editing,
    Submitting,
    Done,
    Failed,
}

impl FlowPhase {
    /// Returns true if free-text input is meaningful in this phase.
    pub fn accepts_text(&self) -> bool {
        matches!(self, Self::Asking | Self::Editing)
    }

    /// Returns true if the back action may be offered.
    pub fn allows_back(&self) -> bool {
        matches!(self, Self::Asking)
    }
}

impl StateMachine for FlowPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use FlowPhase::*;
        matches!(
            (self, target),
            // Gate cleared and questions loaded
            (Gating, Asking) |
            // Fetch failed, payload unusable, or nothing to ask
            (Gating, Failed) |
            // Document already processed upstream
            (Gating, Done) |
            (Asking, Reviewing) |
            (Reviewing, Editing) |
            (Editing, Reviewing) |
            (Reviewing, Submitting) |
            (Submitting, Done) |
            // Sink failure, retry is user-driven
            (Submitting, Reviewing)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use FlowPhase::*;
        match self {
            Gating => vec![Asking, Failed, Done],
            Asking => vec![Reviewing],
            Reviewing => vec![Editing, Submitting],
            Editing => vec![Reviewing],
            Submitting => vec![Done, Reviewing],
            Done => vec![],
            Failed => vec![],
        }
    }
}

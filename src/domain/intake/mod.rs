//! Intake domain module.
//!
//! A linear question-and-answer collection flow: acknowledge, answer each
//! question in order (with back navigation), review and edit, then submit
//! the whole set at once.
//!
//! # Components
//!
//! - `ConversationStore` - questions, answers, position, edit cursor
//! - `FlowPhase` - the phase state machine
//! - `AcknowledgementGate` - confirm-to-continue steps
//! - `FlowController` - drives transitions and emits presentation events

mod controller;
mod directive;
mod errors;
mod events;
mod gate;
mod phase;
mod question;
mod settings;
mod store;


pub use controller::{FlowController, BRIEFING_STEP, REVIEW_PROMPT_STEP};
pub use directive::{FetchRequest, FlowDirective, FlowTimer, SubmissionReceipt, SubmitRequest};
pub use errors::FlowError;
pub use events::{PresentationEvent, ReviewItem, Role, SubmitState, ViewPosition};
pub use gate::{AckOutcome, AcknowledgementGate, GateStep};
pub use phase::FlowPhase;
pub use question::{decode_questions, Answer, Question, QuestionPayload};
pub use settings::{FlowMessages, FlowSettings, COUNT_TOKEN};
pub use store::{ConversationState, ConversationStore};

//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, the state machine trait and the error codes
//! every other domain module speaks in.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{DocumentId, SessionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;

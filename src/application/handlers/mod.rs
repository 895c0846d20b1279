//! Application handlers.
//!
//! Each handler wraps one port call with logging.

pub mod intake;

pub use intake::{FetchQuestionsHandler, SubmitAnswersHandler};

//! Application layer - Handlers and the session driver.
//!
//! Coordinates the intake controller with its ports. The controller stays
//! synchronous; everything that waits lives here.

pub mod handlers;
mod intake_session;

pub use handlers::{FetchQuestionsHandler, SubmitAnswersHandler};
pub use intake_session::IntakeSession;

//! Intake boundary handlers.

mod fetch_questions;
mod submit_answers;

pub use fetch_questions::FetchQuestionsHandler;
pub use submit_answers::SubmitAnswersHandler;

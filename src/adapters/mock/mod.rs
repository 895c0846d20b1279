//! In-memory question source and answer sink for tests and offline runs.
//!
//! Responses are queued and consumed in order; each call is recorded so a
//! test can check exactly what the flow sent.
//!
//! # Example
//!
//! ```ignore
//! let source = MockQuestionSource::new().with_questions(questions);
//! let sink = MockAnswerSink::new()
//!     .with_error(GatewayError::status(503, "busy"))
//!     .with_delay(Duration::from_millis(50));
//! ```

mod answer_sink;
mod question_source;

pub use answer_sink::MockAnswerSink;
pub use question_source::MockQuestionSource;

use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

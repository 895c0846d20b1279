//! Ports - Interfaces between the intake flow and the outside world.
//!
//! - `Presenter` - renders presentation events (synchronous)
//! - `QuestionSource` - fetches a document's questions
//! - `AnswerSink` - receives the complete answer set

mod answer_sink;
mod gateway_error;
mod presenter;
mod question_source;

pub use answer_sink::AnswerSink;
pub use gateway_error::GatewayError;
pub use presenter::Presenter;
pub use question_source::QuestionSource;

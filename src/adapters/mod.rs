//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the intake flow to the outside world:
//! - `gateway` - HTTP question source and answer sink
//! - `mock` - in-memory source and sink for tests and offline runs
//! - `presentation` - console and recording presenters

pub mod gateway;
pub mod mock;
pub mod presentation;

pub use gateway::{HttpAnswerSink, HttpGatewayConfig, HttpQuestionSource};
pub use mock::{MockAnswerSink, MockQuestionSource};
pub use presentation::{ConsoleCommand, ConsolePresenter, RecordingPresenter};

//! Presenter implementations.
//!
//! - `ConsolePresenter` - plain-text terminal rendering
//! - `RecordingPresenter` - keeps events for inspection

mod console;
mod recording;

pub use console::{ConsoleCommand, ConsolePresenter};
pub use recording::RecordingPresenter;

//! QA Intake - a linear question-and-answer collection flow.
//!
//! A session fetches a document's questions, asks them one at a time with
//! back navigation, lets the user review and edit every answer, and then
//! submits the whole set at once.
//!
//! # Architecture
//!
//! - `domain` - the conversation store and flow state machine
//! - `ports` - presenter, question source and answer sink traits
//! - `adapters` - HTTP, mock, console and recording implementations
//! - `application` - the async session driver and boundary handlers
//! - `config` - environment-based configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

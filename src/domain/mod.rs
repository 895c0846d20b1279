//! Domain layer containing the intake flow and its primitives.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine trait)
//! - `intake` - Conversation store, acknowledgement gate and flow controller

pub mod foundation;
pub mod intake;

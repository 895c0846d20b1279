//! Question Source Port - Where a document's questions come from.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedSource(Vec<Question>);
//!
//! #[async_trait]
//! impl QuestionSource for FixedSource {
//!     async fn fetch_questions(&self, _request: &FetchRequest) -> Result<QuestionPayload, GatewayError> {
//!         Ok(QuestionPayload::from_questions(&self.0))
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::intake::{FetchRequest, QuestionPayload};

use super::GatewayError;

/// Port for fetching the ordered question list of a document.
///
/// Returns the payload undecoded; the store decides whether it is usable.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_questions(&self, request: &FetchRequest) -> Result<QuestionPayload, GatewayError>;
}

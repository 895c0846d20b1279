//! Session configuration

use serde::Deserialize;

use crate::domain::foundation::DocumentId;

/// Which document this run collects answers for.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Document identifier; absent or blank is reported to the user at start
    pub document_id: Option<String>,
}

impl SessionConfig {
    /// The document id, if one was given and is not blank.
    pub fn document_id(&self) -> Option<DocumentId> {
        self.document_id
            .as_deref()
            .and_then(|raw| DocumentId::new(raw).ok())
    }
}

//! Error types for the contact book
//!
//! Covers:
//! - Storage failures (load or save)
//! - Id lookups that find nothing, or more than one contact
//! - Malformed ids typed by the user

use contactbook_model::{ContactId, IdError};
use contactbook_store::StorageError;

/// Main contact book error type
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    /// Storage gateway failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// No contact has this id
    #[error("contact not found: {id}")]
    NotFound { id: ContactId },

    /// Several contacts share this id, so none can be picked
    #[error("id {id} matches {count} contacts")]
    Ambiguous { id: ContactId, count: usize },

    /// User-supplied id is malformed
    #[error("invalid id: {0}")]
    InvalidId(#[from] IdError),
}

impl BookError {
    /// True when a lookup did not resolve to exactly one contact
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Ambiguous { .. })
    }
}

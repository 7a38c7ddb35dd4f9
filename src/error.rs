//! Error types for posting operations

use crate::posting::PostingId;
use thiserror::Error;

/// Errors that can occur outside the dispatch path
///
/// Dispatch itself is fire-and-forget and never surfaces errors; the
/// fallible operations are payload serialization and the admin-side
/// duplicate action.
#[derive(Error, Debug)]
pub enum PostingError {
    /// The referenced posting does not exist in the content repository
    #[error("Posting not found: {0}")]
    ItemNotFound(PostingId),

    /// Payload serialization failed
    #[error("Payload error: {0}")]
    PayloadError(String),
}

impl From<serde_json::Error> for PostingError {
    fn from(err: serde_json::Error) -> Self {
        PostingError::PayloadError(err.to_string())
    }
}

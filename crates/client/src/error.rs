//! Error types for the clipboard service.

use thiserror::Error;

use crate::models::EntryId;

/// Result type alias for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors that can occur during clipboard service operations.
///
/// None of these are fatal to the caller: the UI reports them as
/// transient messages and leaves its local state unchanged.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The system clipboard could not be read or written.
    #[error("clipboard access failed: {0}")]
    Clipboard(String),

    /// The requested history entry does not exist (already removed,
    /// or the list was cleared underneath the caller).
    #[error("history entry not found: {0}")]
    EntryNotFound(EntryId),
}

//! Data models for clipboard history.
//!
//! Responsibilities:
//! - Define the history entry shape shared between the service and
//!   the UI, and the notification events the service emits.
//!
//! Invariants:
//! - `EntryId`s are unique and stable for an entry's lifetime.
//! - Entries are immutable once created.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, stable identifier for one history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Mint a fresh identifier.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Broad classification of an entry's payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// UTF-8 text (the only type the watcher produces).
    Text,
    /// Anything else, carrying its reported type name.
    Other(String),
}

/// One clipboard history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: EntryId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub content_type: ContentType,
}

impl HistoryEntry {
    /// Build a new text entry stamped with the current time.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            content: content.into(),
            timestamp: Utc::now(),
            content_type: ContentType::Text,
        }
    }
}

/// Asynchronous notifications emitted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceEvent {
    /// The history list changed; consumers should re-fetch it.
    HistoryUpdated,
    /// The configuration file changed on disk.
    ConfigReloaded,
}

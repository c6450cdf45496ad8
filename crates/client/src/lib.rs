//! Claw clipboard service.
//!
//! This crate owns everything on the service side of the UI boundary:
//! the history entry model, the bounded in-memory history store, the
//! system clipboard seam, the async service facade with its
//! notification channel, and the clipboard poll watcher.
//!
//! The UI never trusts the result of a mutating call; it waits for
//! the `HistoryUpdated` notification and re-fetches the list, so the
//! service is the single source of truth for history contents.

pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod system;
pub mod watcher;

pub use error::{Result, ServiceError};
pub use models::{ContentType, EntryId, HistoryEntry, ServiceEvent};
pub use service::ClipboardService;
pub use store::HistoryStore;
pub use system::{ArboardClipboard, MemoryClipboard, SystemClipboard};
pub use watcher::spawn_clipboard_watcher;

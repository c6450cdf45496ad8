//! Action protocol for async TUI event handling.
//!
//! Actions represent both resolved user intents and async operation
//! results flowing back from the service.
//!
//! Does NOT handle:
//! - Action handling logic (see `App::update`).
//! - Async task execution (see `runtime::side_effects`).

use claw_client::{EntryId, HistoryEntry};
use claw_config::KeybindSet;

/// The unified action protocol.
#[derive(Debug, Clone)]
pub enum Action {
    /// Exit the application.
    Quit,
    /// Move the selection up one entry (clamped at the top).
    MoveUp,
    /// Move the selection down one entry (clamped at the bottom).
    MoveDown,
    /// Copy the given entry back to the system clipboard.
    ActivateEntry(EntryId),
    /// Delete the given entry from history.
    RemoveEntry(EntryId),
    /// Delete every history entry.
    ClearHistory,
    /// Fetch a fresh history snapshot from the service.
    LoadHistory,
    /// Re-read the config file and rebuild the keybind set.
    ReloadConfig,
    /// A history snapshot arrived. Snapshots carry a monotonically
    /// increasing version so a slow fetch can never overwrite a
    /// fresher one.
    HistoryLoaded {
        version: u64,
        entries: Vec<HistoryEntry>,
    },
    /// A rebuilt keybind set to swap in atomically.
    KeybindsReloaded(KeybindSet),
    /// A service call failed; shown to the user as a transient toast.
    ServiceFailed(String),
}

impl Action {
    /// Whether this action must be dispatched to the async side-effect
    /// layer rather than applied to app state directly.
    pub fn requires_service(&self) -> bool {
        matches!(
            self,
            Self::ActivateEntry(_)
                | Self::RemoveEntry(_)
                | Self::ClearHistory
                | Self::LoadHistory
                | Self::ReloadConfig
        )
    }
}

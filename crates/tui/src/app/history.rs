//! History list cursor state.
//!
//! Responsibilities:
//! - Hold the current history snapshot and the selection cursor.
//! - Preserve the selection across snapshot replacement.
//!
//! Does NOT handle:
//! - Fetching snapshots (see `runtime::side_effects`).
//! - Rendering (see `ui`).
//!
//! Invariants:
//! - `selected` is `None` exactly when `entries` is empty.
//! - When `selected` is `Some(i)`, `i < entries.len()`.

use claw_client::{EntryId, HistoryEntry};

/// The history snapshot plus selection cursor.
#[derive(Debug, Default)]
pub struct HistoryView {
    entries: Vec<HistoryEntry>,
    selected: Option<usize>,
}

impl HistoryView {
    /// Replace the snapshot, preserving the selection where possible.
    ///
    /// The previously selected entry is re-resolved by id in the new
    /// snapshot. If it is gone (deleted, or evicted past the history
    /// cap), the cursor stays at the same position clamped to the new
    /// length, so a delete lands on the neighbor rather than jumping
    /// to the top. An empty list clears the cursor; the first snapshot
    /// after an empty list selects the newest entry.
    pub fn replace(&mut self, entries: Vec<HistoryEntry>) {
        let previous_id = self.selected_entry().map(|e| e.id);
        let previous_index = self.selected;
        self.entries = entries;

        self.selected = if self.entries.is_empty() {
            None
        } else if let Some(j) = previous_id.and_then(|id| self.index_of(id)) {
            Some(j)
        } else {
            match previous_index {
                Some(i) => Some(i.min(self.entries.len() - 1)),
                None => Some(0),
            }
        };
    }

    /// Move the cursor one entry toward the top, clamping at index 0.
    pub fn move_up(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
    }

    /// Move the cursor one entry toward the bottom, clamping at the
    /// last entry.
    pub fn move_down(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1).min(self.entries.len() - 1));
        }
    }

    /// The currently selected entry, if any.
    pub fn selected_entry(&self) -> Option<&HistoryEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    /// The cursor position, for list-state sync during rendering.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn index_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }
}

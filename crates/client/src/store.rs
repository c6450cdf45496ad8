//! Bounded, deduplicating history storage.
//!
//! Responsibilities:
//! - Keep an ordered (most-recent-first) list of history entries.
//! - Skip consecutive duplicates and evict the oldest entries past
//!   the configured limit.
//!
//! Does NOT handle:
//! - Concurrency (the service wraps the store in a lock).
//! - System clipboard access or notifications.

use std::collections::VecDeque;

use crate::models::{EntryId, HistoryEntry};

/// In-memory clipboard history.
#[derive(Debug)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl HistoryStore {
    /// Create an empty store capped at `max_entries`.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    /// Push a new text entry to the front.
    ///
    /// Returns `false` without inserting when the content equals the
    /// current front entry (re-copies of the same text do not churn
    /// the list). Evicts from the back past the cap.
    pub fn push_text(&mut self, content: &str) -> bool {
        if let Some(front) = self.entries.front()
            && front.content == content
        {
            return false;
        }

        self.entries.push_front(HistoryEntry::text(content));
        while self.entries.len() > self.max_entries {
            self.entries.pop_back();
        }
        true
    }

    /// Remove the entry with the given id. Returns whether it existed.
    pub fn remove(&mut self, id: &EntryId) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| &e.id == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Look up an entry by id.
    pub fn find(&self, id: &EntryId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// A snapshot of the entries, newest first, optionally truncated.
    pub fn entries(&self, limit: Option<usize>) -> Vec<HistoryEntry> {
        match limit {
            Some(n) => self.entries.iter().take(n).cloned().collect(),
            None => self.entries.iter().cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

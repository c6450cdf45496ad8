//! The clipboard service facade.
//!
//! Responsibilities:
//! - Expose the history/clipboard operations consumed by the UI.
//! - Own the history store and the system clipboard handle.
//! - Emit `ServiceEvent`s on a broadcast channel after every change;
//!   consumers re-fetch the list instead of trusting call results.
//!
//! Does NOT handle:
//! - Clipboard polling cadence (see `watcher`).
//! - Selection state or rendering (TUI crate).
//!
//! Invariants:
//! - State mutations happen under the store lock and are followed by
//!   a `HistoryUpdated` emit; there is no partially-updated view.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};

use crate::error::{Result, ServiceError};
use crate::models::{EntryId, HistoryEntry, ServiceEvent};
use crate::store::HistoryStore;
use crate::system::SystemClipboard;

/// Capacity of the notification channel. Consumers that fall this far
/// behind will observe a lagged receiver and should re-subscribe.
const EVENT_CHANNEL_CAPACITY: usize = 32;

struct Shared {
    store: RwLock<HistoryStore>,
    clipboard: Arc<dyn SystemClipboard>,
    events: broadcast::Sender<ServiceEvent>,
}

/// Cloneable handle to the in-process clipboard service.
#[derive(Clone)]
pub struct ClipboardService {
    shared: Arc<Shared>,
}

impl ClipboardService {
    pub fn new(clipboard: Arc<dyn SystemClipboard>, history_limit: usize) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            shared: Arc::new(Shared {
                store: RwLock::new(HistoryStore::new(history_limit)),
                clipboard,
                events,
            }),
        }
    }

    /// Subscribe to service notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<ServiceEvent> {
        self.shared.events.subscribe()
    }

    /// Read the system clipboard, recording non-blank text in history.
    pub async fn get_clipboard(&self) -> Result<String> {
        let text = self.shared.clipboard.get_text()?;
        if !text.trim().is_empty() {
            let inserted = self.shared.store.write().await.push_text(&text);
            if inserted {
                self.emit(ServiceEvent::HistoryUpdated);
            }
        }
        Ok(text)
    }

    /// Write text to the system clipboard and record it in history.
    pub async fn set_clipboard(&self, text: &str) -> Result<()> {
        self.shared.clipboard.set_text(text)?;
        self.shared.store.write().await.push_text(text);
        self.emit(ServiceEvent::HistoryUpdated);
        Ok(())
    }

    /// Current history snapshot, newest first.
    pub async fn list_history(&self, limit: Option<usize>) -> Result<Vec<HistoryEntry>> {
        Ok(self.shared.store.read().await.entries(limit))
    }

    /// Remove one entry. Returns whether it existed.
    pub async fn remove_entry(&self, id: &EntryId) -> Result<bool> {
        let removed = self.shared.store.write().await.remove(id);
        self.emit(ServiceEvent::HistoryUpdated);
        Ok(removed)
    }

    /// Remove every entry.
    pub async fn clear_history(&self) -> Result<()> {
        self.shared.store.write().await.clear();
        self.emit(ServiceEvent::HistoryUpdated);
        Ok(())
    }

    /// Copy a history entry back to the system clipboard.
    ///
    /// The activated entry is re-inserted at the front of the history,
    /// matching what a fresh copy of the same text would do.
    pub async fn set_from_history(&self, id: &EntryId) -> Result<()> {
        let mut store = self.shared.store.write().await;
        let entry = store
            .find(id)
            .cloned()
            .ok_or_else(|| ServiceError::EntryNotFound(id.clone()))?;
        self.shared.clipboard.set_text(&entry.content)?;
        store.push_text(&entry.content);
        drop(store);
        self.emit(ServiceEvent::HistoryUpdated);
        Ok(())
    }

    /// Raw payload bytes of one entry (fetched on demand so large
    /// payloads never ride along with list snapshots).
    pub async fn get_entry_content(&self, id: &EntryId) -> Result<Vec<u8>> {
        let store = self.shared.store.read().await;
        store
            .find(id)
            .map(|e| e.content.clone().into_bytes())
            .ok_or_else(|| ServiceError::EntryNotFound(id.clone()))
    }

    /// Announce that the configuration file changed on disk.
    pub fn notify_config_reloaded(&self) {
        self.emit(ServiceEvent::ConfigReloaded);
    }

    /// One watcher poll: ingest new clipboard text into history.
    ///
    /// `last_hash` is the caller-held hash of the previously observed
    /// text; unchanged content is skipped without touching the store.
    /// Returns whether an entry was added.
    pub(crate) async fn poll_system_clipboard(&self, last_hash: &mut Option<u64>) -> Result<bool> {
        let text = self.shared.clipboard.get_text()?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut hasher = DefaultHasher::new();
        trimmed.hash(&mut hasher);
        let hash = hasher.finish();
        if *last_hash == Some(hash) {
            return Ok(false);
        }
        *last_hash = Some(hash);

        let inserted = self.shared.store.write().await.push_text(trimmed);
        if inserted {
            tracing::debug!(len = trimmed.len(), "captured new clipboard text");
            self.emit(ServiceEvent::HistoryUpdated);
        }
        Ok(inserted)
    }

    fn emit(&self, event: ServiceEvent) {
        // send only fails when nobody is subscribed, which is fine.
        let _ = self.shared.events.send(event);
    }
}

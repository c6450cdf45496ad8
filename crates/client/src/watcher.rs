//! Clipboard poll watcher.
//!
//! Responsibilities:
//! - Periodically read the system clipboard and feed new text into
//!   the history via the service.
//!
//! Does NOT handle:
//! - Dedup policy (service/store) or notification fan-out (service).
//!
//! Invariants:
//! - Read failures slow the poll down instead of killing the task;
//!   the next successful read resumes the configured cadence.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::service::ClipboardService;

/// Poll interval used while the clipboard keeps failing to read.
const BACKOFF_INTERVAL: Duration = Duration::from_secs(1);

/// Spawn the background clipboard poll loop.
pub fn spawn_clipboard_watcher(
    service: ClipboardService,
    poll_interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut last_hash: Option<u64> = None;
        let mut interval = poll_interval;

        loop {
            tokio::time::sleep(interval).await;

            match service.poll_system_clipboard(&mut last_hash).await {
                Ok(_) => {
                    interval = poll_interval;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "clipboard poll failed, backing off");
                    interval = BACKOFF_INTERVAL.max(poll_interval);
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::{MemoryClipboard, SystemClipboard};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn watcher_picks_up_new_clipboard_text() {
        let clipboard = Arc::new(MemoryClipboard::new());
        let service = ClipboardService::new(clipboard.clone(), 10);

        clipboard.set_text("from the system").unwrap();
        let handle = spawn_clipboard_watcher(service.clone(), Duration::from_millis(250));

        // Paused time: advance past one poll tick.
        tokio::time::sleep(Duration::from_millis(300)).await;

        let entries = service.list_history(None).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, "from the system");

        handle.abort();
    }
}

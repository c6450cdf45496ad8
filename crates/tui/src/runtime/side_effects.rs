//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Handle async service calls triggered by user actions.
//! - Spawn background tasks so service calls never block the UI loop.
//! - Send results back via the action channel for state updates.
//! - Bridge service notifications into the action channel.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//!
//! Invariants / Assumptions:
//! - All service calls are spawned as separate tokio tasks.
//! - Results are always sent back via the action channel.
//! - Each history fetch is stamped with a version drawn before the
//!   call, so `App::update` can drop out-of-order responses.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

use claw_client::{ClipboardService, ServiceEvent};

use crate::action::Action;
use crate::runtime::config::load_keybinds;

/// Monotonic version source for history fetches.
#[derive(Clone, Default)]
pub struct RefreshVersion(Arc<AtomicU64>);

impl RefreshVersion {
    /// Draw the next version. Never returns the same value twice.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Handle side effects (async service calls) for actions.
///
/// Mutations follow a notify-then-refetch pattern: the service emits
/// `HistoryUpdated`, the event bridge turns that into `LoadHistory`,
/// and the fresh snapshot arrives as `HistoryLoaded`. Mutation tasks
/// therefore only report failures.
pub async fn handle_side_effects(
    action: Action,
    service: ClipboardService,
    tx: Sender<Action>,
    versions: RefreshVersion,
    config_path: Option<PathBuf>,
) {
    match action {
        Action::LoadHistory => {
            let version = versions.next();
            tokio::spawn(async move {
                match service.list_history(None).await {
                    Ok(entries) => {
                        let _ = tx.send(Action::HistoryLoaded { version, entries }).await;
                    }
                    Err(e) => {
                        let _ = tx.send(Action::ServiceFailed(e.to_string())).await;
                    }
                }
            });
        }
        Action::ActivateEntry(id) => {
            tokio::spawn(async move {
                if let Err(e) = service.set_from_history(&id).await {
                    let _ = tx.send(Action::ServiceFailed(e.to_string())).await;
                }
            });
        }
        Action::RemoveEntry(id) => {
            tokio::spawn(async move {
                match service.remove_entry(&id).await {
                    // A missing entry just means a refresh already
                    // removed it from under us.
                    Ok(_) => {}
                    Err(e) => {
                        let _ = tx.send(Action::ServiceFailed(e.to_string())).await;
                    }
                }
            });
        }
        Action::ClearHistory => {
            tokio::spawn(async move {
                if let Err(e) = service.clear_history().await {
                    let _ = tx.send(Action::ServiceFailed(e.to_string())).await;
                }
            });
        }
        Action::ReloadConfig => {
            // Config parsing is file IO; keep it off the UI loop.
            tokio::spawn(async move {
                let result = tokio::task::spawn_blocking(move || {
                    load_keybinds(config_path.as_deref())
                })
                .await;
                match result {
                    Ok(Ok(binds)) => {
                        let _ = tx.send(Action::KeybindsReloaded(binds)).await;
                    }
                    Ok(Err(e)) => {
                        let _ = tx.send(Action::ServiceFailed(e.to_string())).await;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "config reload task panicked");
                    }
                }
            });
        }
        other => {
            tracing::warn!(action = ?other, "non-service action reached side effects");
        }
    }
}

/// Bridge service notifications into the action channel.
///
/// Runs until the service drops its event sender or the action channel
/// closes.
pub fn spawn_event_bridge(service: &ClipboardService, tx: Sender<Action>) -> JoinHandle<()> {
    let mut events = service.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(ServiceEvent::HistoryUpdated) => {
                    if tx.send(Action::LoadHistory).await.is_err() {
                        break;
                    }
                }
                Ok(ServiceEvent::ConfigReloaded) => {
                    if tx.send(Action::ReloadConfig).await.is_err() {
                        break;
                    }
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(missed)) => {
                    // Missed notifications collapse into one refresh.
                    tracing::warn!(missed, "event bridge lagged, forcing refresh");
                    if tx.send(Action::LoadHistory).await.is_err() {
                        break;
                    }
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}

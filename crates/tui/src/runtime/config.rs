//! Configuration loading and hot reload for the TUI.
//!
//! Responsibilities:
//! - Load the config file at startup (CLI override or default path).
//! - Watch the config file and signal reloads through the service
//!   event channel.
//! - Rebuild the keybind set from disk on reload.
//!
//! Does NOT handle:
//! - Parsing key strings (see `claw_config`).
//! - Swapping the keybind set into app state (see `App::update`).
//!
//! Invariants:
//! - The watcher watches the config file's parent directory, so
//!   atomic-rename saves (the common editor pattern) are still seen.
//! - A failed reload leaves the previous keybind set in place.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use claw_client::ClipboardService;
use claw_config::{ClawConfig, KeybindSet};

use crate::cli::Cli;

/// Load the effective config plus the path to watch for reloads.
///
/// A CLI-provided path must exist; the default path is optional and
/// falls back to built-in defaults when absent.
pub fn load_settings(cli: &Cli) -> Result<(ClawConfig, Option<PathBuf>)> {
    let (config, path) = claw_config::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;
    Ok((config, path))
}

/// Re-read the config file and rebuild the keybind set.
pub fn load_keybinds(path: Option<&Path>) -> Result<KeybindSet> {
    let (config, _) =
        claw_config::load_or_default(path).context("failed to reload configuration")?;
    Ok(KeybindSet::from_config(&config.keybinds))
}

/// Watch the config file for changes.
///
/// Change notifications go through the service event channel as
/// `ConfigReloaded`, the same path a programmatic reload would take.
/// The returned watcher must be kept alive for the duration of the
/// session.
pub fn spawn_config_watcher(
    config_path: PathBuf,
    service: ClipboardService,
) -> Result<RecommendedWatcher> {
    let watch_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .context("config path has no parent directory")?;

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "config watcher error");
                return;
            }
        };
        if !matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        ) {
            return;
        }
        if event.paths.iter().any(|p| p == &config_path) {
            tracing::info!(path = %config_path.display(), "config file changed");
            service.notify_config_reloaded();
        }
    })
    .context("failed to create config watcher")?;

    watcher
        .watch(&watch_dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", watch_dir.display()))?;
    Ok(watcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claw_client::{MemoryClipboard, ServiceEvent};
    use std::io::Write;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn reload_rebuilds_keybinds_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("claw.yaml");
        std::fs::write(&path, "keybinds:\n  up: k\n  down: j\n").unwrap();

        let binds = load_keybinds(Some(&path)).unwrap();
        assert_eq!(
            binds.spec(claw_config::KeybindAction::MoveUp).to_string(),
            "k"
        );
    }

    #[test]
    fn reload_fails_on_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("claw.yaml");
        std::fs::write(&path, "keybinds: [not, a, map").unwrap();

        assert!(load_keybinds(Some(&path)).is_err());
    }

    #[tokio::test]
    async fn file_change_emits_config_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("claw.yaml");
        std::fs::write(&path, "keybinds: {}\n").unwrap();

        let service = ClipboardService::new(Arc::new(MemoryClipboard::default()), 10);
        let mut events = service.subscribe();
        let _watcher = spawn_config_watcher(path.clone(), service).unwrap();

        let mut file = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "history_limit: 25").unwrap();
        drop(file);

        let event = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                if let Ok(ServiceEvent::ConfigReloaded) = events.recv().await {
                    break ServiceEvent::ConfigReloaded;
                }
            }
        })
        .await
        .unwrap();
        assert_eq!(event, ServiceEvent::ConfigReloaded);
    }
}

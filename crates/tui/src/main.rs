//! Claw - clipboard history in the terminal.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - History storage or clipboard access (see `crates/client`).
//! - Configuration parsing (see `crates/config`).
//! - Async service calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup; the
//!   `TerminalGuard` restores both on any exit path.
//! - The action channel is the only way state changes reach `App`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event as CrosstermEvent, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use claw_client::{ArboardClipboard, ClipboardService, spawn_clipboard_watcher};
use claw_config::KeybindSet;
use claw_tui::action::Action;
use claw_tui::app::App;
use claw_tui::cli::Cli;
use claw_tui::runtime::{
    config::{load_settings, spawn_config_watcher},
    side_effects::{RefreshVersion, handle_side_effects, spawn_event_bridge},
    terminal::TerminalGuard,
};

const ACTION_CHANNEL_CAPACITY: usize = 64;
const UI_TICK_MS: u64 = 250;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("failed to create log directory {}", cli.log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "claw.log");
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let (config, config_path) = load_settings(&cli)?;
    tracing::info!(
        history_limit = config.history_limit,
        poll_interval_ms = config.poll_interval_ms,
        "starting claw"
    );

    let clipboard = ArboardClipboard::new().context("failed to open system clipboard")?;
    let service = ClipboardService::new(Arc::new(clipboard), config.history_limit);

    let (tx, mut rx) = channel::<Action>(ACTION_CHANNEL_CAPACITY);
    let versions = RefreshVersion::default();

    let _bridge = spawn_event_bridge(&service, tx.clone());
    let _clipboard_watcher = if cli.no_watch {
        None
    } else {
        Some(spawn_clipboard_watcher(
            service.clone(),
            Duration::from_millis(config.poll_interval_ms),
        ))
    };
    // Kept alive for the whole session; dropping it stops the reloads.
    let _config_watcher = match config_path.clone() {
        Some(path) => match spawn_config_watcher(path, service.clone()) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                tracing::warn!(error = %e, "config hot reload unavailable");
                None
            }
        },
        None => None,
    };

    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(KeybindSet::from_config(&config.keybinds));

    // Initial snapshot; later refreshes come through the event bridge.
    tx.send(Action::LoadHistory).await?;

    let mut events = EventStream::new();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(UI_TICK_MS));

    loop {
        terminal.draw(|f| claw_tui::ui::render(f, &mut app))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                if action.requires_service() {
                    handle_side_effects(
                        action,
                        service.clone(),
                        tx.clone(),
                        versions.clone(),
                        config_path.clone(),
                    )
                    .await;
                } else {
                    app.update(action);
                }
            }
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let Some(action) = app.handle_input(key) {
                            tx.send(action).await?;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event stream error");
                        break;
                    }
                    None => break,
                }
            }
            _ = tick_interval.tick() => {
                app.prune_toasts();
            }
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

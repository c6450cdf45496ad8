//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Configuration loading and hot reload
//! - Async side effect handlers for service calls
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `claw_tui::app` and `claw_tui::ui`).
//! - History storage or clipboard access (see `claw_client`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.
//! - Side effects run in separate tokio tasks to avoid blocking the UI.

pub mod config;
pub mod side_effects;
pub mod terminal;

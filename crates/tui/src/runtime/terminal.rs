//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Ensure terminal state is restored on application exit, even during panics.
//! - Manage raw mode and alternate screen cleanup via Drop trait.
//!
//! Does NOT handle:
//! - Initial terminal setup (done in `main.rs`).
//!
//! Invariants / Assumptions:
//! - Must be created after terminal setup is complete.
//! - Must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use crossterm::{
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Guard that ensures terminal state is restored on drop.
///
/// The explicit cleanup in `main()` runs first on normal exit; this is
/// a safety net for panics and signals.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Ignore errors since we're in drop and must not panic.
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

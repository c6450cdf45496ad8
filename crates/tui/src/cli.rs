//! Command-line argument parsing for claw.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for claw.
#[derive(Debug, Parser)]
#[command(
    name = "claw",
    about = "Clipboard history in the terminal",
    version,
    after_help = "Examples:\n  claw\n  claw --config ~/.config/claw/claw.yaml\n  claw --log-dir /tmp/claw-logs\n"
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Do not watch the system clipboard for new entries
    #[arg(long)]
    pub no_watch: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["claw"]);
        assert_eq!(cli.config, None);
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
        assert!(!cli.no_watch);
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::parse_from(["claw", "--config", "/tmp/c.yaml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.yaml")));
    }

    #[test]
    fn test_no_watch_flag() {
        let cli = Cli::parse_from(["claw", "--no-watch"]);
        assert!(cli.no_watch);
    }
}

//! Input resolution for the TUI.

pub mod keymap;

pub use keymap::{resolve_intent, spec_matches};

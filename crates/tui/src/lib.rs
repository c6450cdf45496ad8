//! Claw TUI library.
//!
//! Modules:
//! - `action`: the action protocol connecting input, state, and the
//!   async side-effect layer.
//! - `app`: application state, the history cursor, and the update loop.
//! - `cli`: command-line argument parsing.
//! - `input`: key event matching against the keybind set.
//! - `runtime`: terminal guard, config hot reload, side effects.
//! - `ui`: rendering.

pub mod action;
pub mod app;
pub mod cli;
pub mod input;
pub mod runtime;
pub mod ui;

//! Claw configuration.
//!
//! This crate owns everything configuration-shaped: the config file
//! types and loader, the key-specification normalizer, and the
//! resolved keybind set consumed by the TUI.
//!
//! Raw key strings are validated and normalized eagerly at this
//! boundary; nothing downstream ever sees an unparsed config value.

pub mod keybinds;
pub mod keyspec;
pub mod loader;
pub mod types;

pub use keybinds::{ACTION_PRIORITY, KeybindAction, KeybindSet};
pub use keyspec::{BaseKey, KeySpec, Modifiers};
pub use loader::{ConfigError, default_config_path, load_config, load_or_default};
pub use types::{ClawConfig, KeybindsConfig};

//! Configuration file types.
//!
//! Responsibilities:
//! - Define the serde shape of the claw config file.
//!
//! Does NOT handle:
//! - File discovery or parsing (see `loader`).
//! - Keybind resolution (see `keybinds`).
//!
//! Invariants:
//! - Every field has a default; an empty config file is valid.

use serde::{Deserialize, Serialize};

/// Raw keybind fields as written in the config file.
///
/// `None` means the field is absent and the built-in default applies;
/// an empty string disables the action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindsConfig {
    #[serde(default)]
    pub up: Option<String>,
    #[serde(default)]
    pub down: Option<String>,
    #[serde(default)]
    pub select: Option<String>,
    #[serde(default)]
    pub delete: Option<String>,
    #[serde(default)]
    pub delete_all: Option<String>,
}

/// Top-level claw configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClawConfig {
    /// Maximum number of history entries kept by the service.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Clipboard poll interval in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Keybind overrides.
    #[serde(default)]
    pub keybinds: KeybindsConfig,
}

fn default_history_limit() -> usize {
    50
}

fn default_poll_interval_ms() -> u64 {
    250
}

impl Default for ClawConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            poll_interval_ms: default_poll_interval_ms(),
            keybinds: KeybindsConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_deserializes_to_defaults() {
        let cfg: ClawConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, ClawConfig::default());
        assert_eq!(cfg.history_limit, 50);
        assert_eq!(cfg.poll_interval_ms, 250);
    }

    #[test]
    fn partial_keybinds_leave_other_fields_absent() {
        let cfg: ClawConfig = serde_yaml::from_str("keybinds:\n  up: k\n").unwrap();
        assert_eq!(cfg.keybinds.up.as_deref(), Some("k"));
        assert_eq!(cfg.keybinds.down, None);
    }

    #[test]
    fn empty_string_field_is_preserved() {
        // Present-but-empty must stay distinguishable from absent.
        let cfg: ClawConfig = serde_yaml::from_str("keybinds:\n  delete_all: \"\"\n").unwrap();
        assert_eq!(cfg.keybinds.delete_all.as_deref(), Some(""));
    }
}

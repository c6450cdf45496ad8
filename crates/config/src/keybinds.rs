//! Keybind actions and the resolved keybind set.
//!
//! Responsibilities:
//! - Define the fixed set of remappable actions (`KeybindAction`).
//! - Build a complete `KeybindSet` from raw config fields, applying
//!   built-in defaults for missing fields.
//!
//! Does NOT handle:
//! - Key string parsing (see `keyspec`).
//! - Runtime key event matching (TUI crate).
//!
//! Invariants:
//! - A `KeybindSet` always carries exactly one spec per action; it is
//!   an immutable value rebuilt wholesale on every config (re)load so
//!   readers never observe a mix of old and new bindings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::keyspec::{BaseKey, KeySpec};
use crate::types::KeybindsConfig;

/// A remappable action identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum KeybindAction {
    /// Move the selection up one entry
    MoveUp,
    /// Move the selection down one entry
    MoveDown,
    /// Copy the selected entry back to the clipboard
    Activate,
    /// Delete the selected entry
    Remove,
    /// Delete every entry
    RemoveAll,
}

/// Resolution order when one event could satisfy several bindings.
///
/// If a user configures two actions with the same key, the earlier
/// action in this order always wins. This is defined behavior, not an
/// accident of iteration order.
pub const ACTION_PRIORITY: [KeybindAction; 5] = [
    KeybindAction::MoveUp,
    KeybindAction::MoveDown,
    KeybindAction::Activate,
    KeybindAction::Remove,
    KeybindAction::RemoveAll,
];

impl fmt::Display for KeybindAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveUp => write!(f, "move_up"),
            Self::MoveDown => write!(f, "move_down"),
            Self::Activate => write!(f, "activate"),
            Self::Remove => write!(f, "remove"),
            Self::RemoveAll => write!(f, "remove_all"),
        }
    }
}

/// The complete, resolved binding table: one canonical spec per action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindSet {
    move_up: KeySpec,
    move_down: KeySpec,
    activate: KeySpec,
    remove: KeySpec,
    remove_all: KeySpec,
}

impl KeybindSet {
    /// Build the set from raw config fields.
    ///
    /// Missing fields fall back to the built-in defaults; fields that
    /// are present but empty disable the action.
    pub fn from_config(cfg: &KeybindsConfig) -> Self {
        let set = Self {
            move_up: spec_or(cfg.up.as_deref(), "ArrowUp"),
            move_down: spec_or(cfg.down.as_deref(), "ArrowDown"),
            activate: spec_or(cfg.select.as_deref(), "Enter"),
            remove: spec_or(cfg.delete.as_deref(), "x"),
            remove_all: match cfg.delete_all.as_deref() {
                Some(raw) => KeySpec::parse(raw),
                None => KeySpec::Disabled,
            },
        };

        for (action, spec) in set.bindings() {
            if let KeySpec::Bound {
                key: BaseKey::Literal(name),
                ..
            } = spec
                && name.chars().count() > 1
            {
                tracing::warn!(%action, key = %name, "keybind names an unknown key; it will never fire");
            }
        }

        set
    }

    /// The spec bound to one action.
    pub fn spec(&self, action: KeybindAction) -> &KeySpec {
        match action {
            KeybindAction::MoveUp => &self.move_up,
            KeybindAction::MoveDown => &self.move_down,
            KeybindAction::Activate => &self.activate,
            KeybindAction::Remove => &self.remove,
            KeybindAction::RemoveAll => &self.remove_all,
        }
    }

    /// All bindings in resolution priority order.
    pub fn bindings(&self) -> impl Iterator<Item = (KeybindAction, &KeySpec)> {
        ACTION_PRIORITY.iter().map(|&a| (a, self.spec(a)))
    }
}

impl Default for KeybindSet {
    fn default() -> Self {
        Self::from_config(&KeybindsConfig::default())
    }
}

fn spec_or(raw: Option<&str>, default: &str) -> KeySpec {
    match raw {
        Some(raw) => KeySpec::parse(raw),
        None => KeySpec::parse(default),
    }
}

//! Key specification parsing and canonicalization.
//!
//! Responsibilities:
//! - Turn raw, user-authored key strings into a canonical `KeySpec`.
//! - Provide the canonical string form via `Display`.
//!
//! Does NOT handle:
//! - Runtime key event matching (see the TUI crate's keymap module).
//! - Mapping specs to actions (see `keybinds`).
//!
//! Invariants:
//! - Parsing never fails: unrecognized modifier tokens are ignored and
//!   unrecognized key names degrade to a lower-cased literal, so one
//!   bad config field can never invalidate the whole configuration.
//! - `KeySpec::parse` is idempotent over its own canonical form:
//!   `parse(s.to_string())` reproduces `s` for any parsed spec.

use std::fmt;

/// Modifier flags required by a key specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Modifiers {
    /// Control key held
    pub ctrl: bool,
    /// Shift key held
    pub shift: bool,
    /// Alt/Option key held
    pub alt: bool,
}

impl Modifiers {
    /// Returns true if no modifier is required.
    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.shift || self.alt)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.alt {
            parts.push("Alt");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// The non-modifier part of a key specification.
///
/// Named keys carry their own variants; everything else is a
/// lower-cased literal compared case-insensitively at match time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BaseKey {
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
    /// Enter/Return key
    Enter,
    /// Delete key
    Delete,
    /// A literal key name, lower-cased (usually a single character)
    Literal(String),
}

impl BaseKey {
    /// Parse one trimmed token into a base key.
    ///
    /// Returns `None` for an empty token (the caller treats the whole
    /// spec as disabled in that case).
    fn parse(token: &str) -> Option<Self> {
        if token.is_empty() {
            return None;
        }
        let lower = token.to_lowercase();
        Some(match lower.as_str() {
            "up" | "arrowup" => Self::Up,
            "down" | "arrowdown" => Self::Down,
            "left" | "arrowleft" => Self::Left,
            "right" | "arrowright" => Self::Right,
            "enter" | "return" => Self::Enter,
            "delete" => Self::Delete,
            _ => Self::Literal(lower),
        })
    }
}

impl fmt::Display for BaseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "ArrowUp"),
            Self::Down => write!(f, "ArrowDown"),
            Self::Left => write!(f, "ArrowLeft"),
            Self::Right => write!(f, "ArrowRight"),
            Self::Enter => write!(f, "Enter"),
            Self::Delete => write!(f, "Delete"),
            Self::Literal(s) => write!(f, "{}", s),
        }
    }
}

/// A canonical key specification: a required modifier set plus a base
/// key, or `Disabled` for an action that is switched off.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeySpec {
    /// Matches no event; how an action is turned off in config.
    Disabled,
    /// Matches events whose base key and exact modifier set agree.
    Bound {
        /// Required modifier set (compared exactly, not as a subset)
        mods: Modifiers,
        /// Required base key
        key: BaseKey,
    },
}

impl KeySpec {
    /// Parse a raw configuration string into its canonical form.
    ///
    /// Grammar: zero or more `+`-separated modifier tokens
    /// (`shift`/`ctrl`/`alt`, case-insensitive, unknown tokens
    /// ignored) followed by one base-key token. Empty or
    /// whitespace-only input yields `Disabled`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::Disabled;
        }

        let parts: Vec<&str> = raw.split('+').map(str::trim).collect();
        // parts is non-empty because raw is non-empty
        let Some((key_token, modifier_tokens)) = parts.split_last() else {
            return Self::Disabled;
        };

        let mut mods = Modifiers::default();
        for token in modifier_tokens {
            match token.to_lowercase().as_str() {
                "ctrl" => mods.ctrl = true,
                "shift" => mods.shift = true,
                "alt" => mods.alt = true,
                // Config is user-authored; skip what we don't know.
                _ => {}
            }
        }

        match BaseKey::parse(key_token) {
            Some(key) => Self::Bound { mods, key },
            // Trailing '+' or "shift+" with nothing after it.
            None => Self::Disabled,
        }
    }

    /// Returns true if this spec can never match an event.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => Ok(()),
            Self::Bound { mods, key } => {
                if mods.is_empty() {
                    write!(f, "{}", key)
                } else {
                    write!(f, "{}+{}", mods, key)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_are_disabled() {
        assert_eq!(KeySpec::parse(""), KeySpec::Disabled);
        assert_eq!(KeySpec::parse("   "), KeySpec::Disabled);
        assert_eq!(KeySpec::parse("\t\n"), KeySpec::Disabled);
    }

    #[test]
    fn trailing_plus_is_disabled() {
        assert_eq!(KeySpec::parse("shift+"), KeySpec::Disabled);
        assert_eq!(KeySpec::parse("+"), KeySpec::Disabled);
    }

    #[test]
    fn bare_char_key_is_lowercased() {
        assert_eq!(
            KeySpec::parse("X"),
            KeySpec::Bound {
                mods: Modifiers::default(),
                key: BaseKey::Literal("x".to_string()),
            }
        );
    }

    #[test]
    fn shift_combo_splits_modifier_and_base() {
        let spec = KeySpec::parse("Shift+x");
        assert_eq!(
            spec,
            KeySpec::Bound {
                mods: Modifiers {
                    shift: true,
                    ..Default::default()
                },
                key: BaseKey::Literal("x".to_string()),
            }
        );
    }

    #[test]
    fn all_modifiers_any_case() {
        let spec = KeySpec::parse("CTRL+Shift+alt+Delete");
        assert_eq!(
            spec,
            KeySpec::Bound {
                mods: Modifiers {
                    ctrl: true,
                    shift: true,
                    alt: true,
                },
                key: BaseKey::Delete,
            }
        );
    }

    #[test]
    fn unrecognized_modifier_tokens_are_ignored() {
        // "super" and "meta" are not in the grammar; the binding still works.
        assert_eq!(KeySpec::parse("super+x"), KeySpec::parse("x"));
        assert_eq!(KeySpec::parse("meta+shift+x"), KeySpec::parse("shift+x"));
    }

    #[test]
    fn arrow_and_named_aliases() {
        assert_eq!(KeySpec::parse("up"), KeySpec::parse("ArrowUp"));
        assert_eq!(KeySpec::parse("down"), KeySpec::parse("arrowdown"));
        assert_eq!(KeySpec::parse("left"), KeySpec::parse("ArrowLeft"));
        assert_eq!(KeySpec::parse("right"), KeySpec::parse("ARROWRIGHT"));
        assert_eq!(KeySpec::parse("return"), KeySpec::parse("Enter"));
        assert_eq!(KeySpec::parse("delete"), KeySpec::parse("Delete"));

        let spec = KeySpec::parse("up");
        assert_eq!(
            spec,
            KeySpec::Bound {
                mods: Modifiers::default(),
                key: BaseKey::Up,
            }
        );
    }

    #[test]
    fn unknown_names_degrade_to_literal() {
        assert_eq!(
            KeySpec::parse("PageDown"),
            KeySpec::Bound {
                mods: Modifiers::default(),
                key: BaseKey::Literal("pagedown".to_string()),
            }
        );
    }

    #[test]
    fn spaces_around_plus_are_trimmed() {
        assert_eq!(KeySpec::parse("Ctrl + x"), KeySpec::parse("ctrl+x"));
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(KeySpec::parse("up").to_string(), "ArrowUp");
        assert_eq!(KeySpec::parse("shift+X").to_string(), "Shift+x");
        assert_eq!(
            KeySpec::parse("alt+ctrl+enter").to_string(),
            "Ctrl+Alt+Enter"
        );
        assert_eq!(KeySpec::parse("").to_string(), "");
    }

    #[test]
    fn parse_display_round_trip() {
        for raw in ["", "  ", "x", "Shift+x", "up", "ctrl+alt+delete", "foo"] {
            let spec = KeySpec::parse(raw);
            assert_eq!(KeySpec::parse(&spec.to_string()), spec, "raw = {raw:?}");
        }
    }
}

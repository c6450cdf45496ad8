//! Key event matching against canonical key specifications.
//!
//! Responsibilities:
//! - Decide whether one crossterm `KeyEvent` satisfies one `KeySpec`.
//! - Resolve a key event into at most one keybind action using the
//!   fixed priority order.
//!
//! Non-responsibilities:
//! - Parsing key strings (see `claw_config::keyspec`).
//! - Applying intents to app state (see `App`).
//!
//! Invariants:
//! - Matching is pure: no state is read beyond the arguments and no
//!   state is mutated.
//! - Modifier comparison is exact over Shift/Ctrl/Alt, never a subset
//!   test: a binding without modifiers must not fire while a modifier
//!   is held, and vice versa.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use claw_config::{BaseKey, KeySpec, KeybindAction, KeybindSet, Modifiers};

/// Returns true when `key` satisfies `spec`.
///
/// `Disabled` specs match nothing; that is how an action is turned
/// off. Character keys compare case-insensitively (Shift+x arrives as
/// `Char('X')` with the shift flag set), named keys compare by key
/// code.
pub fn spec_matches(spec: &KeySpec, key: KeyEvent) -> bool {
    let KeySpec::Bound { mods, key: base } = spec else {
        return false;
    };
    modifiers_match(mods, key.modifiers) && base_matches(base, key.code)
}

/// Resolve one key event into at most one intent.
///
/// Bindings are evaluated in the fixed priority order of
/// [`claw_config::ACTION_PRIORITY`]; if a user configures two actions
/// with the same key, the earlier action wins. Events matching no
/// binding resolve to `None` and are not consumed.
pub fn resolve_intent(binds: &KeybindSet, key: KeyEvent) -> Option<KeybindAction> {
    binds
        .bindings()
        .find(|(_, spec)| spec_matches(spec, key))
        .map(|(action, _)| action)
}

fn modifiers_match(required: &Modifiers, actual: KeyModifiers) -> bool {
    let mask = KeyModifiers::SHIFT | KeyModifiers::CONTROL | KeyModifiers::ALT;
    let mut wanted = KeyModifiers::NONE;
    if required.shift {
        wanted |= KeyModifiers::SHIFT;
    }
    if required.ctrl {
        wanted |= KeyModifiers::CONTROL;
    }
    if required.alt {
        wanted |= KeyModifiers::ALT;
    }
    actual & mask == wanted
}

fn base_matches(base: &BaseKey, code: KeyCode) -> bool {
    match (base, code) {
        (BaseKey::Up, KeyCode::Up)
        | (BaseKey::Down, KeyCode::Down)
        | (BaseKey::Left, KeyCode::Left)
        | (BaseKey::Right, KeyCode::Right)
        | (BaseKey::Enter, KeyCode::Enter)
        | (BaseKey::Delete, KeyCode::Delete) => true,
        (BaseKey::Literal(name), KeyCode::Char(c)) => {
            // The spec side is already lower-cased; fold the event
            // side the same way. Multi-character literals (degraded
            // unknown key names) can never equal a single char.
            let lowered: String = c.to_lowercase().collect();
            *name == lowered
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claw_config::KeybindsConfig;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn disabled_matches_nothing() {
        let spec = KeySpec::Disabled;
        assert!(!spec_matches(&spec, key(KeyCode::Enter)));
        assert!(!spec_matches(&spec, key(KeyCode::Char('x'))));
        assert!(!spec_matches(
            &spec,
            key_with(KeyCode::Char('x'), KeyModifiers::SHIFT)
        ));
    }

    #[test]
    fn char_keys_match_case_insensitively() {
        let spec = KeySpec::parse("shift+x");
        // Shift+x arrives as an uppercase char with the shift flag.
        assert!(spec_matches(
            &spec,
            key_with(KeyCode::Char('X'), KeyModifiers::SHIFT)
        ));
        assert!(spec_matches(
            &spec,
            key_with(KeyCode::Char('x'), KeyModifiers::SHIFT)
        ));
    }

    #[test]
    fn modifier_match_is_exact_not_subset() {
        let plain = KeySpec::parse("x");
        assert!(spec_matches(&plain, key(KeyCode::Char('x'))));
        // A held modifier must not satisfy an unmodified binding.
        assert!(!spec_matches(
            &plain,
            key_with(KeyCode::Char('X'), KeyModifiers::SHIFT)
        ));
        assert!(!spec_matches(
            &plain,
            key_with(KeyCode::Char('x'), KeyModifiers::CONTROL)
        ));

        let shifted = KeySpec::parse("shift+x");
        // And a required modifier must actually be held.
        assert!(!spec_matches(&shifted, key(KeyCode::Char('x'))));
        // Extra modifiers beyond the required set also reject.
        assert!(!spec_matches(
            &shifted,
            key_with(
                KeyCode::Char('X'),
                KeyModifiers::SHIFT | KeyModifiers::CONTROL
            )
        ));
    }

    #[test]
    fn named_keys_match_by_code() {
        let spec = KeySpec::parse("up");
        assert!(spec_matches(&spec, key(KeyCode::Up)));
        assert!(!spec_matches(&spec, key(KeyCode::Down)));
        // Exact modifiers apply to named keys too.
        assert!(!spec_matches(&spec, key_with(KeyCode::Up, KeyModifiers::SHIFT)));

        assert!(spec_matches(&KeySpec::parse("enter"), key(KeyCode::Enter)));
        assert!(spec_matches(
            &KeySpec::parse("delete"),
            key(KeyCode::Delete)
        ));
    }

    #[test]
    fn unknown_literal_names_never_fire() {
        let spec = KeySpec::parse("pagedown");
        assert!(!spec_matches(&spec, key(KeyCode::PageDown)));
        assert!(!spec_matches(&spec, key(KeyCode::Char('p'))));
    }

    #[test]
    fn resolves_default_bindings() {
        let binds = KeybindSet::default();
        assert_eq!(
            resolve_intent(&binds, key(KeyCode::Up)),
            Some(KeybindAction::MoveUp)
        );
        assert_eq!(
            resolve_intent(&binds, key(KeyCode::Down)),
            Some(KeybindAction::MoveDown)
        );
        assert_eq!(
            resolve_intent(&binds, key(KeyCode::Enter)),
            Some(KeybindAction::Activate)
        );
        assert_eq!(
            resolve_intent(&binds, key(KeyCode::Char('x'))),
            Some(KeybindAction::Remove)
        );
        // remove_all ships disabled.
        assert_eq!(
            resolve_intent(&binds, key_with(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            None
        );
    }

    #[test]
    fn unbound_events_resolve_to_none() {
        let binds = KeybindSet::default();
        assert_eq!(resolve_intent(&binds, key(KeyCode::Char('q'))), None);
        assert_eq!(resolve_intent(&binds, key(KeyCode::Tab)), None);
    }

    #[test]
    fn duplicate_bindings_resolve_by_priority() {
        // Both move_up and activate bound to Enter: move_up is earlier
        // in the priority order and must always win.
        let cfg = KeybindsConfig {
            up: Some("enter".to_string()),
            select: Some("enter".to_string()),
            ..Default::default()
        };
        let binds = KeybindSet::from_config(&cfg);
        assert_eq!(
            resolve_intent(&binds, key(KeyCode::Enter)),
            Some(KeybindAction::MoveUp)
        );
    }
}

//! Application state and the action update loop.
//!
//! Responsibilities:
//! - Translate key events into actions using the active keybind set.
//! - Apply actions that mutate app state (see `App::update`).
//! - Track toast notifications and the quit flag.
//!
//! Does NOT handle:
//! - Async service calls (see `runtime::side_effects`).
//! - Rendering (see `ui`).
//!
//! Invariants:
//! - Quit keys (Esc, Ctrl+C) are handled before keybind resolution and
//!   cannot be shadowed by configuration.
//! - History snapshots apply only when their version is newer than the
//!   last applied one, so a slow fetch cannot clobber a fresh list.

pub mod history;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use claw_config::{KeybindAction, KeybindSet};

use crate::action::Action;
use crate::input::resolve_intent;
use crate::ui::toast::Toast;
use history::HistoryView;

/// The whole of the TUI's mutable state.
pub struct App {
    pub keybinds: KeybindSet,
    pub history: HistoryView,
    pub list_state: ListState,
    pub toasts: Vec<Toast>,
    pub should_quit: bool,
    applied_version: u64,
}

impl App {
    pub fn new(keybinds: KeybindSet) -> Self {
        Self {
            keybinds,
            history: HistoryView::default(),
            list_state: ListState::default(),
            toasts: Vec::new(),
            should_quit: false,
            applied_version: 0,
        }
    }

    /// Translate a key event into an action, or `None` when the key is
    /// not bound.
    pub fn handle_input(&self, key: KeyEvent) -> Option<Action> {
        // Quit keys are hardwired so a bad config can never trap the
        // user in the UI.
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return Some(Action::Quit);
        }

        match resolve_intent(&self.keybinds, key)? {
            KeybindAction::MoveUp => Some(Action::MoveUp),
            KeybindAction::MoveDown => Some(Action::MoveDown),
            KeybindAction::Activate => self
                .history
                .selected_entry()
                .map(|e| Action::ActivateEntry(e.id)),
            KeybindAction::Remove => self
                .history
                .selected_entry()
                .map(|e| Action::RemoveEntry(e.id)),
            KeybindAction::RemoveAll => {
                (!self.history.is_empty()).then_some(Action::ClearHistory)
            }
        }
    }

    /// Apply a state-mutating action.
    ///
    /// Service-bound actions are not handled here; the caller routes
    /// them to the side-effect layer (see `Action::requires_service`).
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => {
                self.history.move_up();
                self.sync_list_state();
            }
            Action::MoveDown => {
                self.history.move_down();
                self.sync_list_state();
            }
            Action::HistoryLoaded { version, entries } => {
                if version <= self.applied_version {
                    tracing::debug!(
                        version,
                        applied = self.applied_version,
                        "dropping stale history snapshot"
                    );
                    return;
                }
                self.applied_version = version;
                self.history.replace(entries);
                self.sync_list_state();
            }
            Action::KeybindsReloaded(keybinds) => {
                self.keybinds = keybinds;
                self.add_toast(Toast::info("Keybinds reloaded"));
            }
            Action::ServiceFailed(message) => {
                self.add_toast(Toast::error(message));
            }
            Action::ActivateEntry(_)
            | Action::RemoveEntry(_)
            | Action::ClearHistory
            | Action::LoadHistory
            | Action::ReloadConfig => {
                tracing::warn!(?action, "service action reached App::update");
            }
        }
    }

    /// Add a toast notification.
    pub fn add_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Drop expired toasts. Called on every tick.
    pub fn prune_toasts(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    fn sync_list_state(&mut self) {
        self.list_state.select(self.history.selected_index());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claw_client::HistoryEntry;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded(version: u64, contents: &[&str]) -> Action {
        Action::HistoryLoaded {
            version,
            entries: contents.iter().map(|c| HistoryEntry::text(*c)).collect(),
        }
    }

    #[test]
    fn esc_and_ctrl_c_always_quit() {
        // Even with Esc bound to an action, quit wins.
        let cfg = claw_config::KeybindsConfig {
            up: Some("escape".to_string()),
            ..Default::default()
        };
        let app = App::new(KeybindSet::from_config(&cfg));
        assert!(matches!(app.handle_input(key(KeyCode::Esc)), Some(Action::Quit)));
        assert!(matches!(
            app.handle_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn activate_on_empty_history_is_a_no_op() {
        let app = App::new(KeybindSet::default());
        assert!(app.handle_input(key(KeyCode::Enter)).is_none());
        assert!(app.handle_input(key(KeyCode::Char('x'))).is_none());
    }

    #[test]
    fn activate_targets_the_selected_entry() {
        let mut app = App::new(KeybindSet::default());
        app.update(loaded(1, &["b", "a"]));
        app.update(Action::MoveDown);

        let selected_id = app.history.selected_entry().map(|e| e.id);
        match app.handle_input(key(KeyCode::Enter)) {
            Some(Action::ActivateEntry(id)) => assert_eq!(Some(id), selected_id),
            other => panic!("expected ActivateEntry, got {other:?}"),
        }
    }

    #[test]
    fn stale_snapshot_is_dropped() {
        let mut app = App::new(KeybindSet::default());
        app.update(loaded(2, &["fresh"]));
        app.update(loaded(1, &["stale", "older"]));

        assert_eq!(app.history.len(), 1);
        assert_eq!(
            app.history.selected_entry().map(|e| e.content.as_str()),
            Some("fresh")
        );
    }

    #[test]
    fn newer_snapshot_applies_and_syncs_list_state() {
        let mut app = App::new(KeybindSet::default());
        app.update(loaded(1, &["b", "a"]));
        assert_eq!(app.list_state.selected(), Some(0));

        app.update(Action::MoveDown);
        assert_eq!(app.list_state.selected(), Some(1));

        app.update(loaded(2, &[]));
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn keybind_swap_takes_effect_immediately() {
        let mut app = App::new(KeybindSet::default());
        app.update(loaded(1, &["a"]));

        let cfg = claw_config::KeybindsConfig {
            up: Some("k".to_string()),
            down: Some("j".to_string()),
            ..Default::default()
        };
        app.update(Action::KeybindsReloaded(KeybindSet::from_config(&cfg)));

        assert!(matches!(
            app.handle_input(key(KeyCode::Char('k'))),
            Some(Action::MoveUp)
        ));
        // The old binding no longer fires.
        assert!(app.handle_input(key(KeyCode::Up)).is_none());
    }

    #[test]
    fn service_failure_becomes_an_error_toast() {
        let mut app = App::new(KeybindSet::default());
        app.update(Action::ServiceFailed("clipboard unavailable".to_string()));
        assert_eq!(app.toasts.len(), 1);
        assert!(app.toasts[0].message.contains("clipboard"));
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new(KeybindSet::default());
        app.update(Action::Quit);
        assert!(app.should_quit);
    }
}

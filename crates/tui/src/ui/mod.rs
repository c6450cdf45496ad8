//! UI rendering for the clipboard history screen.
//!
//! Rendering is a pure function of `App` state plus the frame; no app
//! state is mutated here other than the list scroll offset inside
//! `ListState`.

pub mod toast;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use claw_config::KeybindAction;

use crate::app::App;

pub use toast::{Toast, ToastLevel};

/// Render one frame of the UI.
pub fn render(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    render_history(f, chunks[0], app);
    render_footer(f, chunks[1], app);
    toast::render_toasts(f, &app.toasts);
}

fn render_history(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Clipboard history ({})", app.history.len()));

    if app.history.is_empty() {
        let placeholder = Paragraph::new("Nothing copied yet.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(placeholder, area);
        return;
    }

    let width = area.width.saturating_sub(12) as usize;
    let items: Vec<ListItem> = app
        .history
        .entries()
        .iter()
        .map(|e| {
            let stamp = e.timestamp.with_timezone(&chrono::Local).format("%H:%M");
            ListItem::new(format!("{stamp}  {}", preview_line(&e.content, width)))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// Footer hints reflect the live keybind set, so a hot reload updates
/// them on the next frame.
fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = [
        (KeybindAction::MoveUp, "up"),
        (KeybindAction::MoveDown, "down"),
        (KeybindAction::Activate, "copy"),
        (KeybindAction::Remove, "delete"),
        (KeybindAction::RemoveAll, "clear all"),
    ];

    let mut spans = Vec::new();
    for (action, label) in hints {
        let spec = app.keybinds.spec(action);
        if spec.is_disabled() {
            continue;
        }
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            spec.to_string(),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(" {label}")));
    }
    if !spans.is_empty() {
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled("Esc", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(" quit"));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Collapse an entry to a single display line, eliding long content.
fn preview_line(content: &str, width: usize) -> String {
    let flattened: String = content
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if width > 3 && flattened.chars().count() > width {
        let truncated: String = flattened.chars().take(width - 3).collect();
        format!("{truncated}...")
    } else {
        flattened
    }
}

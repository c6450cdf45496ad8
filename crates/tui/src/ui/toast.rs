//! Toast notification widgets for transient feedback messages.
//!
//! Toasts appear in the bottom-right corner, stack vertically, and
//! expire automatically after their TTL.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Informational message
    Info,
    /// Error message
    Error,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERR",
        }
    }

    /// Returns the TTL (time-to-live) for this level.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info => Duration::from_secs(4),
            Self::Error => Duration::from_secs(8),
        }
    }

    fn color(&self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Error => Color::Red,
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique identifier for this toast
    pub id: Uuid,
    /// The message to display
    pub message: String,
    /// Severity level
    pub level: ToastLevel,
    /// When this toast was created
    pub created_at: Instant,
    /// Time-to-live before auto-expiry
    pub ttl: Duration,
}

impl Toast {
    /// Creates a new toast with the given message and level.
    pub fn new(message: String, level: ToastLevel) -> Self {
        let ttl = level.ttl();
        Self {
            id: Uuid::new_v4(),
            message,
            level,
            created_at: Instant::now(),
            ttl,
        }
    }

    /// Returns true if this toast has expired (TTL elapsed).
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    /// Creates an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }
}

/// Maximum number of toasts to display at once (prevents screen overflow).
const MAX_TOASTS: usize = 4;

const TOAST_HEIGHT: u16 = 3;
const TOAST_WIDTH: u16 = 44;

/// Renders all active toasts in the bottom-right corner.
///
/// Toasts are stacked vertically with the most recent at the bottom.
/// Expired toasts are filtered out before rendering.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast]) {
    let active: Vec<_> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }

    // Keep the most recent toasts when over the cap.
    let active: Vec<_> = if active.len() > MAX_TOASTS {
        let skip = active.len() - MAX_TOASTS;
        active.into_iter().skip(skip).collect()
    } else {
        active
    };

    let total_height = active.len() as u16 * TOAST_HEIGHT;
    let area = f.area();
    if area.height < total_height + 3 || area.width < TOAST_WIDTH + 2 {
        return;
    }

    let toast_area = Rect {
        x: area.width.saturating_sub(TOAST_WIDTH + 1),
        y: area.height.saturating_sub(total_height + 2),
        width: TOAST_WIDTH,
        height: total_height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat_n(Constraint::Length(TOAST_HEIGHT), active.len())
                .collect::<Vec<_>>(),
        )
        .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk);
    }
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect) {
    let color = toast.level.color();

    let max_width = area.width.saturating_sub(4) as usize;
    let message: String = if toast.message.chars().count() > max_width {
        let truncated: String = toast
            .message
            .chars()
            .take(max_width.saturating_sub(3))
            .collect();
        format!("{truncated}...")
    } else {
        toast.message.clone()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(toast.level.label(), Style::default().fg(color)));
    let paragraph = Paragraph::new(Line::from(message)).block(block);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_toast_is_not_expired() {
        let toast = Toast::info("copied");
        assert!(!toast.is_expired());
        assert_eq!(toast.level, ToastLevel::Info);
    }

    #[test]
    fn error_toasts_live_longer_than_info() {
        assert!(ToastLevel::Error.ttl() > ToastLevel::Info.ttl());
    }

    #[test]
    fn backdated_toast_expires() {
        let mut toast = Toast::error("boom");
        toast.created_at = Instant::now() - toast.ttl - Duration::from_millis(1);
        assert!(toast.is_expired());
    }
}

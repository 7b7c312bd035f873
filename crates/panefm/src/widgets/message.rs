use std::fmt::Display;
use std::sync::{Mutex, MutexGuard, OnceLock};

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Debug, Default)]
struct MessageLine {
    text: Option<(Level, String)>,
    area: Rect,
}

static MESSAGE: OnceLock<Mutex<MessageLine>> = OnceLock::new();

fn line() -> MutexGuard<'static, MessageLine> {
    MESSAGE
        .get_or_init(|| Mutex::new(MessageLine::default()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn init() {
    line().text = None;
}

pub fn info(message: impl Display) {
    let text = message.to_string();
    tracing::info!(message = %text, "info");
    set(Level::Info, text);
}

pub fn error(err: impl Display) {
    let text = err.to_string();
    tracing::warn!(message = %text, "error reported");
    set(Level::Error, text);
}

fn set(level: Level, text: String) {
    let trimmed = text.trim();
    line().text = if trimmed.is_empty() {
        None
    } else {
        Some((level, trimmed.to_string()))
    };
}

/// The message currently shown, if any.
#[cfg(test)]
pub fn current() -> Option<(Level, String)> {
    line().text.clone()
}

pub fn resize(area: Rect) {
    line().area = area;
}

pub fn draw(frame: &mut Frame) {
    let state = line();
    let area = state.area.intersection(frame.area());
    if area.is_empty() {
        return;
    }
    let Some((level, text)) = &state.text else {
        return;
    };
    let style = match level {
        Level::Info => Style::default().fg(Color::Gray),
        Level::Error => Style::default().fg(Color::Red),
    };
    let first = text.lines().next().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(first.to_string(), style))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::{current, error, info, Level};

    #[test]
    fn latest_message_wins_and_blank_clears() {
        let _guard = crate::test_utils::message_lock();
        info("  copied 3 files ");
        assert_eq!(
            current(),
            Some((Level::Info, "copied 3 files".to_string()))
        );
        error("permission denied");
        assert_eq!(
            current(),
            Some((Level::Error, "permission denied".to_string()))
        );
        info("   ");
        assert_eq!(current(), None);
    }
}

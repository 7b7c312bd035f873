use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

#[derive(Debug, Default)]
struct Progress {
    label: Option<String>,
    started: Option<Instant>,
    area: Rect,
}

static PROGRESS: OnceLock<Mutex<Progress>> = OnceLock::new();

fn progress() -> MutexGuard<'static, Progress> {
    PROGRESS
        .get_or_init(|| Mutex::new(Progress::default()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn init() {
    let mut state = progress();
    state.label = None;
    state.started = None;
}

/// Show a running task until `finish`.
pub fn start(label: impl Into<String>) {
    let mut state = progress();
    state.label = Some(label.into());
    state.started = Some(Instant::now());
}

pub fn finish() {
    let mut state = progress();
    state.label = None;
    state.started = None;
}

pub fn is_finished() -> bool {
    progress().label.is_none()
}

pub fn resize(area: Rect) {
    progress().area = area;
}

pub fn draw(frame: &mut Frame) {
    let state = progress();
    let Some(label) = state.label.as_deref() else {
        return;
    };
    let area = state.area.intersection(frame.area());
    if area.is_empty() {
        return;
    }
    let elapsed = state
        .started
        .map(|started| started.elapsed().as_secs())
        .unwrap_or(0);
    let line = Line::raw(format!("{label} ({elapsed}s)"));
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::Cyan)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::{finish, is_finished, start};

    #[test]
    fn start_and_finish_toggle_visibility() {
        let _guard = crate::test_utils::progress_lock();
        finish();
        assert!(is_finished());
        start("copy");
        assert!(!is_finished());
        finish();
        assert!(is_finished());
    }
}

use std::sync::{Mutex, MutexGuard, OnceLock};

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::filer::FileEntry;

static AREA: OnceLock<Mutex<Rect>> = OnceLock::new();

fn area() -> MutexGuard<'static, Rect> {
    AREA.get_or_init(|| Mutex::new(Rect::default()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn init() {
    *area() = Rect::default();
}

pub fn resize(rect: Rect) {
    *area() = rect;
}

/// `[title]` of the current workspace, then the entry under the cursor.
pub fn draw(frame: &mut Frame, title: &str, entry: Option<&FileEntry>) {
    let rect = area().intersection(frame.area());
    if rect.is_empty() {
        return;
    }
    let dim = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM);
    let mut spans = vec![Span::styled(format!("[{title}] "), dim)];
    match entry {
        Some(entry) => spans.extend([
            Span::styled(format!("{:<5}", kind_label(entry)), dim),
            Span::styled(format!("{:>8} ", size_label(entry)), dim),
            Span::raw(entry.name.clone()),
            Span::styled(if entry.readonly { " [ro]" } else { "" }, dim),
        ]),
        None => spans.push(Span::styled("(empty)", dim)),
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rect);
}

fn kind_label(entry: &FileEntry) -> &'static str {
    if entry.is_symlink {
        "link"
    } else if entry.is_dir {
        "dir"
    } else {
        "file"
    }
}

fn size_label(entry: &FileEntry) -> String {
    if entry.is_dir {
        "-".to_string()
    } else {
        human_size(entry.size)
    }
}

/// Format a byte count with a binary unit suffix.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["K", "M", "G", "T", "P"];
    if bytes < 1024 {
        return format!("{bytes}B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1}{}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::human_size;

    #[test]
    fn human_size_picks_binary_units() {
        assert_eq!(human_size(0), "0B");
        assert_eq!(human_size(1023), "1023B");
        assert_eq!(human_size(1024), "1.0K");
        assert_eq!(human_size(1536), "1.5K");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0M");
    }
}

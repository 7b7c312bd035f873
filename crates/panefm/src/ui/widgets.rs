//! Reusable widget rendering functions.
//!
//! Pure functions that produce ratatui widgets from data.
//! No state mutation happens here.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::layout::centered_rect;

/// Render a centered, bordered selection list over whatever is below.
pub fn render_list_overlay(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: &[String],
    selected: usize,
) {
    // Two border rows around the items.
    let wanted = u16::try_from(items.len() + 2).unwrap_or(u16::MAX);
    let overlay_rect = centered_rect(60, 50, wanted, area).intersection(frame.area());
    if overlay_rect.is_empty() {
        return;
    }
    frame.render_widget(Clear, overlay_rect);

    let rows = overlay_rect.height.saturating_sub(2) as usize;
    let offset = if rows == 0 {
        0
    } else {
        selected.saturating_sub(rows - 1)
    };
    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows)
        .map(|(idx, label)| {
            let style = if idx == selected {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(label.clone(), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().bg(Color::Black));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(Color::Black)),
        overlay_rect,
    );
}

/// Render a centered one-line input box with a block cursor.
pub fn render_input_overlay(frame: &mut Frame, area: Rect, title: &str, input: &str) {
    let overlay_rect = centered_rect(60, 20, 3, area).intersection(frame.area());
    if overlay_rect.is_empty() {
        return;
    }
    frame.render_widget(Clear, overlay_rect);

    let line = Line::from(vec![
        Span::styled(input.to_string(), Style::default().fg(Color::White)),
        Span::styled(" ", Style::default().bg(Color::White).fg(Color::Black)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().bg(Color::Black));
    frame.render_widget(
        Paragraph::new(line)
            .block(block)
            .style(Style::default().bg(Color::Black)),
        overlay_rect,
    );
}

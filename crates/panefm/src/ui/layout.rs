//! Layout utilities for rect manipulation.
//!
//! Pure functions for computing layout areas. No state mutation.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create a centered rect with given percentage of parent dimensions.
///
/// The result is never smaller than `min_height` rows (clamped to the
/// parent) so short lists stay readable on small terminals.
pub fn centered_rect(percent_x: u16, percent_y: u16, min_height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1];

    let height = min_height.min(area.height);
    if column.height >= height {
        return column;
    }
    let y = area.y + (area.height - height) / 2;
    Rect {
        y,
        height,
        ..column
    }
}

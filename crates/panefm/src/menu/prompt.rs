//! One-line text prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::keymap::Action;
use crate::ui::render_input_overlay;

use super::{Overlay, OverlayOutcome};

/// Edits a line of text; Enter hands the trimmed text to `submit`.
pub struct Prompt {
    title: String,
    input: String,
    submit: fn(String) -> Action,
    area: Rect,
}

impl Prompt {
    pub fn new(
        title: impl Into<String>,
        initial: impl Into<String>,
        submit: fn(String) -> Action,
    ) -> Self {
        Self {
            title: title.into(),
            input: initial.into(),
            submit,
            area: Rect::default(),
        }
    }

    /// Prompt for a new workspace title, starting from the current one.
    pub fn rename_workspace(current: &str) -> Self {
        Self::new("rename workspace", current, Action::SetTitle)
    }
}

impl Overlay for Prompt {
    fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    fn draw(&self, frame: &mut Frame) {
        render_input_overlay(frame, self.area, &self.title, &self.input);
    }

    fn input(&mut self, key: KeyEvent) -> OverlayOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('g') => OverlayOutcome::Disconnect,
                KeyCode::Char('u') => {
                    self.input.clear();
                    OverlayOutcome::Continue
                }
                _ => OverlayOutcome::Continue,
            };
        }
        match key.code {
            KeyCode::Esc => OverlayOutcome::Disconnect,
            KeyCode::Enter => {
                let text = self.input.trim();
                if text.is_empty() {
                    OverlayOutcome::Disconnect
                } else {
                    OverlayOutcome::Run((self.submit)(text.to_string()))
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                OverlayOutcome::Continue
            }
            KeyCode::Char(ch) => {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::ALT | KeyModifiers::SUPER)
                {
                    self.input.push(ch);
                }
                OverlayOutcome::Continue
            }
            _ => OverlayOutcome::Continue,
        }
    }
}

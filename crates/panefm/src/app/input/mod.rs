//! Input event handling.
//!
//! Keys go to the overlay while one is open, otherwise through the
//! filer's keymap to an `Action`. Resizes re-lay out the whole screen.
//!
//! Submodules:
//! - actions: what each action does to the filer
//! - subprocess: shell, editor and menu commands

mod actions;
mod subprocess;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::error::Result;
use crate::events::AppEvent;
use crate::menu::OverlayOutcome;

use super::state::App;

/// Main event dispatcher.
pub fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => app.input(key),
        AppEvent::Resize(width, height) => {
            app.resize(Rect::new(0, 0, width, height));
            Ok(())
        }
    }
}

impl App {
    pub fn input(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(overlay) = self.overlay.as_mut() {
            return match overlay.input(key) {
                OverlayOutcome::Continue => Ok(()),
                OverlayOutcome::Disconnect => {
                    self.overlay = None;
                    Ok(())
                }
                OverlayOutcome::Run(action) => {
                    self.overlay = None;
                    self.apply(action)
                }
            };
        }
        match self.filer.lookup(&key).cloned() {
            Some(action) => self.apply(action),
            None => Ok(()),
        }
    }
}

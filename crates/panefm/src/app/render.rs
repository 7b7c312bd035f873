//! Frame composition.
//!
//! Draw order decides overlap: the workspace first, then the overlay,
//! then the status widgets along the bottom.

use ratatui::Frame;

use crate::widgets::{infobar, message, progress};

use super::state::App;

/// Main render entry point. Called each frame by the scheduling loop.
pub fn render(app: &App, frame: &mut Frame) {
    app.filer.draw(frame);
    if let Some(overlay) = app.overlay.as_ref() {
        overlay.draw(frame);
    }
    message::draw(frame);
    infobar::draw(frame, app.filer.workspace().title(), app.filer.file());
    progress::draw(frame);
}

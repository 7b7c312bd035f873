//! Application state.
//!
//! `App` owns the filer, the optional overlay and the handles used to
//! start subprocesses. Methods are split across input/ (key routing and
//! actions) and render.rs (drawing).

use ratatui::layout::Rect;

use crate::config::Config;
use crate::filer::Filer;
use crate::menu::{Menu, Overlay, Prompt};
use crate::schedule::TaskSlot;
use crate::shell::Spawner;
use crate::widgets::{infobar, message, progress};

/// Rows under the workspace for the message line and the info bar.
const STATUS_ROWS: u16 = 2;
/// Extra rows while background progress is shown.
const PROGRESS_ROWS: u16 = 2;

pub struct App {
    pub filer: Filer,
    pub overlay: Option<Box<dyn Overlay>>,
    pub config: Config,
    pub spawner: Spawner<App>,
    pub tasks: TaskSlot,
    pub area: Rect,
    pub should_quit: bool,
    /// Clear the terminal before the next frame, e.g. after a subprocess
    /// drew over it.
    pub refresh_requested: bool,
}

impl App {
    pub fn new(config: Config, filer: Filer, spawner: Spawner<App>) -> Self {
        Self {
            filer,
            overlay: None,
            config,
            spawner,
            tasks: TaskSlot::new(),
            area: Rect::default(),
            should_quit: false,
            refresh_requested: false,
        }
    }

    /// Lay out the workspace and the status widgets inside `area`.
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        let mut reserved = STATUS_ROWS;
        if !progress::is_finished() {
            reserved += PROGRESS_ROWS;
        }
        let body = Rect {
            height: area.height.saturating_sub(reserved),
            ..area
        };
        self.filer.resize(body);
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.resize(body);
        }
        message::resize(status_row(area, 2));
        infobar::resize(status_row(area, 1));
        progress::resize(status_row(area, 4));
    }

    /// Open the named menu over the workspace. Unknown menus are reported
    /// and leave the current mode alone.
    pub fn enter_menu(&mut self, name: &str) {
        match Menu::new(name, &self.config) {
            Ok(mut menu) => {
                menu.resize(self.filer.workspace().area());
                self.overlay = Some(Box::new(menu));
            }
            Err(err) => message::error(err),
        }
    }

    /// Prompt for a new title for the current workspace.
    pub fn enter_rename(&mut self) {
        let workspace = self.filer.workspace();
        let mut prompt = Prompt::rename_workspace(workspace.title());
        prompt.resize(workspace.area());
        self.overlay = Some(Box::new(prompt));
    }
}

/// The single row `from_bottom` rows above the bottom edge of `area`.
fn status_row(area: Rect, from_bottom: u16) -> Rect {
    if area.height < from_bottom {
        return Rect::default();
    }
    Rect::new(area.x, area.y + area.height - from_bottom, area.width, 1)
}

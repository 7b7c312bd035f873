//! A workspace: ordered directory panes, a focus cursor and a layout.
//!
//! Every focus change re-attaches the process working directory to the
//! focused pane. Failing to do so is fatal (`Error::WorkingDir`): spawned
//! commands would otherwise run somewhere the user is not looking.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use ratatui::layout::Rect;
use ratatui::widgets::BorderType;
use ratatui::Frame;

use crate::error::{Error, Result};
use crate::process::ProcessEnv;

use super::layout::{allocate, LayoutMode};
use super::Pane;

pub struct Workspace<P: Pane> {
    panes: Vec<P>,
    cursor: usize,
    layout: LayoutMode,
    title: String,
    area: Rect,
    border: BorderType,
    env: Rc<dyn ProcessEnv>,
}

impl<P: Pane> Workspace<P> {
    /// A workspace seeded with one pane at the home location.
    pub fn new(title: impl Into<String>, layout: LayoutMode, env: Rc<dyn ProcessEnv>) -> Self {
        let home = env.home_dir();
        Self::from_parts(title, layout, vec![home], 0, env)
    }

    /// Rebuild a workspace from pane locations. No locations means one
    /// pane at home.
    pub fn from_parts(
        title: impl Into<String>,
        layout: LayoutMode,
        paths: Vec<PathBuf>,
        cursor: usize,
        env: Rc<dyn ProcessEnv>,
    ) -> Self {
        let mut panes: Vec<P> = paths.iter().map(|path| P::open(path)).collect();
        if panes.is_empty() {
            panes.push(P::open(&env.home_dir()));
        }
        let cursor = cursor.min(panes.len() - 1);
        Self {
            panes,
            cursor,
            layout,
            title: title.into(),
            area: Rect::default(),
            border: BorderType::Plain,
            env,
        }
    }

    pub fn panes(&self) -> &[P] {
        &self.panes
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// The focused pane.
    pub fn focused(&self) -> &P {
        &self.panes[self.cursor]
    }

    pub fn focused_mut(&mut self) -> &mut P {
        &mut self.panes[self.cursor]
    }

    pub fn next_pane(&self) -> &P {
        &self.panes[self.next_index()]
    }

    fn next_index(&self) -> usize {
        (self.cursor + 1) % self.panes.len()
    }

    fn prev_index(&self) -> usize {
        (self.cursor + self.panes.len() - 1) % self.panes.len()
    }

    /// Open a pane at home in front of all others and focus it.
    pub fn create_pane(&mut self) -> Result<()> {
        let home = self.env.home_dir();
        let mut pane = P::open(&home);
        pane.set_border(self.border);
        pane.reload();
        self.panes.insert(0, pane);
        self.set_cursor(0)?;
        self.allocate();
        Ok(())
    }

    /// Close the focused pane. The last pane is never closed.
    pub fn close_pane(&mut self) -> Result<()> {
        if self.panes.len() < 2 {
            return Ok(());
        }
        self.panes.remove(self.cursor);
        if self.cursor >= self.panes.len() {
            self.cursor = self.panes.len() - 1;
        }
        self.attach()?;
        self.allocate();
        Ok(())
    }

    /// Move focus by `delta` panes, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) -> Result<()> {
        let len = self.panes.len() as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
        self.attach()
    }

    /// Focus pane `index`, clamped into range.
    pub fn set_cursor(&mut self, index: isize) -> Result<()> {
        let last = self.panes.len() as isize - 1;
        self.cursor = index.clamp(0, last) as usize;
        self.attach()
    }

    /// Swap the focused pane with the next one; focus follows the pane.
    pub fn swap_next(&mut self) -> Result<()> {
        let next = self.next_index();
        self.panes.swap(self.cursor, next);
        self.move_cursor(1)?;
        self.allocate();
        Ok(())
    }

    /// Swap the focused pane with the previous one; focus follows the pane.
    pub fn swap_prev(&mut self) -> Result<()> {
        let prev = self.prev_index();
        self.panes.swap(self.cursor, prev);
        self.move_cursor(-1)?;
        self.allocate();
        Ok(())
    }

    /// Send the focused pane to the next pane's location.
    pub fn chdir_neighbor(&mut self) -> Result<()> {
        let target = self.next_pane().path().to_path_buf();
        self.chdir_focused(&target)
    }

    /// Change the focused pane's location and follow it with the working
    /// directory.
    pub fn chdir_focused(&mut self, path: &Path) -> Result<()> {
        self.focused_mut().chdir(path)?;
        self.attach()
    }

    /// Re-read every pane and re-assert the working directory.
    pub fn reload_all(&mut self) -> Result<()> {
        for pane in &mut self.panes {
            pane.reload();
        }
        self.attach()
    }

    /// Hidden workspaces drop their listings; shown ones re-read them.
    pub fn set_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            return self.reload_all();
        }
        for pane in &mut self.panes {
            pane.clear_list();
        }
        Ok(())
    }

    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
        self.allocate();
    }

    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.allocate();
    }

    /// Border style for every pane, including ones created later.
    pub fn set_border(&mut self, border: BorderType) {
        self.border = border;
        for pane in &mut self.panes {
            pane.set_border(border);
        }
    }

    fn attach(&self) -> Result<()> {
        let path = self.focused().path();
        self.env
            .set_current_dir(path)
            .map_err(|source| Error::WorkingDir {
                path: path.to_path_buf(),
                source,
            })
    }

    fn allocate(&mut self) {
        let rects = allocate(self.layout, self.area, self.panes.len());
        for (pane, rect) in self.panes.iter_mut().zip(rects) {
            pane.resize(rect);
        }
    }

    /// Draw the panes. The focused pane goes last so its border is never
    /// covered; fullscreen draws only the focused pane.
    pub fn draw(&self, frame: &mut Frame) {
        if self.layout != LayoutMode::Fullscreen {
            for (idx, pane) in self.panes.iter().enumerate() {
                if idx != self.cursor {
                    pane.draw(frame, false);
                }
            }
        }
        self.focused().draw(frame, true);
    }
}

#[cfg(test)]
mod tests;

//! Workspaces of directory panes.
//!
//! The filer is the workspace stack: an ordered list of workspaces with
//! one of them current. Only the current workspace holds listings and is
//! drawn; switching hides the old one and reloads the new one.
//!
//! Submodules:
//! - pane: the contract a directory view implements
//! - directory: the filesystem-backed pane
//! - layout: tiling algorithms
//! - workspace: panes, focus and layout for one workspace

mod directory;
pub mod layout;
mod pane;
mod workspace;

#[cfg(test)]
pub(crate) mod testing;

use std::rc::Rc;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::widgets::BorderType;
use ratatui::Frame;

use crate::error::Result;
use crate::keymap::{Action, Keymap};
use crate::process::ProcessEnv;
use crate::state::{FilerState, WorkspaceState};

pub use directory::{Directory, FileEntry};
pub use layout::LayoutMode;
pub use pane::Pane;
pub use workspace::Workspace;

pub struct Filer<P: Pane = Directory> {
    workspaces: Vec<Workspace<P>>,
    current: usize,
    keymap: Keymap,
    area: Rect,
    border: BorderType,
    env: Rc<dyn ProcessEnv>,
}

impl<P: Pane> Filer<P> {
    /// `count` fresh workspaces titled by number.
    pub fn new(count: usize, layout: LayoutMode, env: Rc<dyn ProcessEnv>) -> Self {
        let workspaces = (1..=count.max(1))
            .map(|n| Workspace::new(n.to_string(), layout, env.clone()))
            .collect();
        Self::with_workspaces(workspaces, 0, env)
    }

    /// A filer over pre-built workspaces, e.g. restored from saved state.
    pub fn with_workspaces(
        mut workspaces: Vec<Workspace<P>>,
        current: usize,
        env: Rc<dyn ProcessEnv>,
    ) -> Self {
        if workspaces.is_empty() {
            workspaces.push(Workspace::new("1", LayoutMode::default(), env.clone()));
        }
        let current = current.min(workspaces.len() - 1);
        Self {
            workspaces,
            current,
            keymap: Keymap::default(),
            area: Rect::default(),
            border: BorderType::Plain,
            env,
        }
    }

    /// Rebuild from saved state. Locations that no longer exist open at
    /// home.
    pub fn from_state(state: FilerState, env: Rc<dyn ProcessEnv>) -> Self {
        let home = env.home_dir();
        let workspaces = state
            .workspaces
            .into_iter()
            .map(|saved| {
                let paths = saved
                    .paths
                    .into_iter()
                    .map(|path| if path.is_dir() { path } else { home.clone() })
                    .collect();
                Workspace::from_parts(saved.title, saved.layout, paths, saved.cursor, env.clone())
            })
            .collect();
        Self::with_workspaces(workspaces, state.current, env)
    }

    pub fn snapshot(&self) -> FilerState {
        FilerState {
            current: self.current,
            workspaces: self
                .workspaces
                .iter()
                .map(|ws| WorkspaceState {
                    title: ws.title().to_string(),
                    layout: ws.layout(),
                    cursor: ws.cursor(),
                    paths: ws.panes().iter().map(|p| p.path().to_path_buf()).collect(),
                })
                .collect(),
        }
    }

    pub fn workspace(&self) -> &Workspace<P> {
        &self.workspaces[self.current]
    }

    pub fn workspace_mut(&mut self) -> &mut Workspace<P> {
        &mut self.workspaces[self.current]
    }

    #[cfg(test)]
    pub fn workspaces(&self) -> &[Workspace<P>] {
        &self.workspaces
    }

    #[cfg(test)]
    pub fn current(&self) -> usize {
        self.current
    }

    /// The entry under the cursor of the focused pane.
    pub fn file(&self) -> Option<&FileEntry> {
        self.workspace().focused().entry()
    }

    /// Switch workspaces, wrapping at both ends.
    pub fn move_workspace(&mut self, delta: isize) -> Result<()> {
        let len = self.workspaces.len() as isize;
        let next = (self.current as isize + delta).rem_euclid(len) as usize;
        self.switch_to(next)
    }

    fn switch_to(&mut self, index: usize) -> Result<()> {
        if index == self.current {
            return Ok(());
        }
        self.workspace_mut().set_visible(false)?;
        self.current = index;
        self.workspace_mut().set_visible(true)
    }

    /// Append a workspace and switch to it.
    pub fn create_workspace(&mut self) -> Result<()> {
        let title = (self.workspaces.len() + 1).to_string();
        let mut workspace = Workspace::new(title, self.workspace().layout(), self.env.clone());
        workspace.resize(self.area);
        workspace.set_border(self.border);
        self.workspaces.push(workspace);
        self.switch_to(self.workspaces.len() - 1)
    }

    /// Close the current workspace. The last workspace is never closed.
    pub fn close_workspace(&mut self) -> Result<()> {
        if self.workspaces.len() < 2 {
            return Ok(());
        }
        self.workspaces.remove(self.current);
        if self.current >= self.workspaces.len() {
            self.current = self.workspaces.len() - 1;
        }
        self.workspace_mut().set_visible(true)
    }

    /// Pane border style for every workspace, including later ones.
    pub fn set_border(&mut self, border: BorderType) {
        self.border = border;
        for workspace in &mut self.workspaces {
            workspace.set_border(border);
        }
    }

    pub fn merge_keymap(&mut self, keymap: Keymap) {
        self.keymap.merge(keymap);
    }

    pub fn lookup(&self, key: &KeyEvent) -> Option<&Action> {
        self.keymap.lookup(key)
    }

    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        for workspace in &mut self.workspaces {
            workspace.resize(area);
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.workspace().draw(frame);
    }
}

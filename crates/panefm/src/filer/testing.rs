//! In-memory pane for workspace and filer tests.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::layout::Rect;
use ratatui::widgets::BorderType;
use ratatui::Frame;

use crate::error::{Error, Result};

use super::{FileEntry, Pane};

thread_local! {
    static DRAWS: RefCell<Vec<(PathBuf, bool)>> = const { RefCell::new(Vec::new()) };
}

/// Take the `(path, focused)` draw calls recorded on this thread.
pub fn take_draws() -> Vec<(PathBuf, bool)> {
    DRAWS.with(|draws| std::mem::take(&mut *draws.borrow_mut()))
}

#[derive(Debug)]
pub struct MockPane {
    pub path: PathBuf,
    pub area: Rect,
    pub border: BorderType,
    pub reloads: usize,
    pub listed: bool,
    entry: FileEntry,
}

impl Pane for MockPane {
    fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            area: Rect::default(),
            border: BorderType::Plain,
            reloads: 0,
            listed: false,
            entry: FileEntry {
                name: "entry".to_string(),
                path: path.join("entry"),
                is_dir: false,
                is_symlink: false,
                size: 1,
                readonly: false,
            },
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn chdir(&mut self, path: &Path) -> Result<()> {
        if path.ends_with("missing") {
            return Err(Error::Location {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }
        self.path = path.to_path_buf();
        self.listed = true;
        Ok(())
    }

    fn reload(&mut self) {
        self.reloads += 1;
        self.listed = true;
    }

    fn clear_list(&mut self) {
        self.listed = false;
    }

    fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    fn set_border(&mut self, border: BorderType) {
        self.border = border;
    }

    fn draw(&self, _frame: &mut Frame, focused: bool) {
        DRAWS.with(|draws| draws.borrow_mut().push((self.path.clone(), focused)));
    }

    fn move_cursor(&mut self, _delta: isize) {}

    fn entry(&self) -> Option<&FileEntry> {
        self.listed.then_some(&self.entry)
    }
}

//! Directory pane: a sorted listing of one filesystem location.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::error::{Error, Result};
use crate::widgets::message;

use super::Pane;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub size: u64,
    pub readonly: bool,
}

impl FileEntry {
    fn read(path: PathBuf, name: String) -> io::Result<Self> {
        let link = fs::symlink_metadata(&path)?;
        // Follow links for the kind and size, but keep broken links listed.
        let meta = fs::metadata(&path).unwrap_or_else(|_| link.clone());
        Ok(Self {
            name,
            is_dir: meta.is_dir(),
            is_symlink: link.file_type().is_symlink(),
            size: meta.len(),
            readonly: meta.permissions().readonly(),
            path,
        })
    }

    fn parent(path: PathBuf) -> Self {
        Self {
            name: "..".to_string(),
            path,
            is_dir: true,
            is_symlink: false,
            size: 0,
            readonly: false,
        }
    }
}

#[derive(Debug)]
pub struct Directory {
    path: PathBuf,
    entries: Vec<FileEntry>,
    cursor: usize,
    area: Rect,
    border: BorderType,
}

impl Directory {
    #[cfg(test)]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn read_entries(path: &Path) -> io::Result<Vec<FileEntry>> {
        let mut entries = Vec::new();
        for item in fs::read_dir(path)? {
            let item = item?;
            let name = item.file_name().to_string_lossy().to_string();
            match FileEntry::read(item.path(), name) {
                Ok(entry) => entries.push(entry),
                Err(err) => tracing::debug!(path = %item.path().display(), %err, "skip entry"),
            }
        }
        entries.sort_by(compare_entries);
        if let Some(parent) = path.parent() {
            entries.insert(0, FileEntry::parent(parent.to_path_buf()));
        }
        Ok(entries)
    }

    /// First visible row so that the cursor stays on screen.
    fn scroll_offset(&self, rows: usize) -> usize {
        if rows == 0 {
            return 0;
        }
        self.cursor.saturating_sub(rows - 1)
    }
}

fn compare_entries(a: &FileEntry, b: &FileEntry) -> Ordering {
    b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name))
}

impl Pane for Directory {
    fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            entries: Vec::new(),
            cursor: 0,
            area: Rect::default(),
            border: BorderType::Plain,
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn chdir(&mut self, path: &Path) -> Result<()> {
        let location = |source| Error::Location {
            path: path.to_path_buf(),
            source,
        };
        let target = fs::canonicalize(path).map_err(location)?;
        let entries = Self::read_entries(&target).map_err(location)?;
        let previous = std::mem::replace(&mut self.path, target);
        self.entries = entries;
        // Landing on the parent keeps the cursor on the directory we left.
        self.cursor = self
            .entries
            .iter()
            .position(|entry| entry.name != ".." && entry.path == previous)
            .unwrap_or(0);
        Ok(())
    }

    fn reload(&mut self) {
        match Self::read_entries(&self.path) {
            Ok(entries) => {
                self.entries = entries;
                self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
            }
            Err(err) => {
                self.entries.clear();
                self.cursor = 0;
                message::error(format!("{}: {err}", self.path.display()));
            }
        }
    }

    fn clear_list(&mut self) {
        self.entries = Vec::new();
    }

    fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    fn set_border(&mut self, border: BorderType) {
        self.border = border;
    }

    fn draw(&self, frame: &mut Frame, focused: bool) {
        let area = self.area.intersection(frame.area());
        if area.is_empty() {
            return;
        }
        let border_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.border)
            .border_style(border_style)
            .title(self.path.display().to_string());

        let rows = area.height.saturating_sub(2) as usize;
        let offset = self.scroll_offset(rows);
        let lines: Vec<Line> = self
            .entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .map(|(idx, entry)| {
                let mut style = if entry.is_dir {
                    Style::default().fg(Color::Blue)
                } else {
                    Style::default().fg(Color::White)
                };
                if idx == self.cursor {
                    style = if focused {
                        style.add_modifier(Modifier::REVERSED)
                    } else {
                        style.add_modifier(Modifier::UNDERLINED)
                    };
                }
                let suffix = if entry.is_dir && entry.name != ".." { "/" } else { "" };
                Line::from(Span::styled(format!("{}{suffix}", entry.name), style))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.entries.is_empty() {
            return;
        }
        let last = self.entries.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    fn entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::{Directory, Pane};
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::widgets::BorderType;
    use ratatui::Terminal;
    use std::fs;
    use tempfile::TempDir;

    fn sample_tree() -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        fs::create_dir(dir.path().join("src")).expect("mkdir src");
        fs::create_dir(dir.path().join("docs")).expect("mkdir docs");
        fs::write(dir.path().join("b.txt"), "bb").expect("write b");
        fs::write(dir.path().join("a.txt"), "a").expect("write a");
        dir
    }

    #[test]
    fn chdir_lists_parent_then_dirs_then_files() {
        let tree = sample_tree();
        let mut pane = Directory::open(tree.path());
        pane.chdir(tree.path()).expect("chdir");
        let names: Vec<&str> = pane.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "docs", "src", "a.txt", "b.txt"]);
        assert_eq!(pane.entries()[4].size, 2);
    }

    #[test]
    fn chdir_to_missing_path_keeps_location() {
        let tree = sample_tree();
        let mut pane = Directory::open(tree.path());
        pane.chdir(tree.path()).expect("chdir");
        let before = pane.path().to_path_buf();
        let err = pane
            .chdir(&tree.path().join("missing"))
            .expect_err("missing dir");
        assert!(!err.is_fatal());
        assert_eq!(pane.path(), before);
    }

    #[test]
    fn chdir_to_parent_keeps_cursor_on_child() {
        let tree = sample_tree();
        let src = tree.path().join("src");
        let mut pane = Directory::open(&src);
        pane.chdir(&src).expect("chdir src");
        pane.chdir(tree.path()).expect("chdir parent");
        assert_eq!(pane.entry().map(|e| e.name.as_str()), Some("src"));
    }

    #[test]
    fn move_cursor_stops_at_ends() {
        let tree = sample_tree();
        let mut pane = Directory::open(tree.path());
        pane.reload();
        pane.move_cursor(-3);
        assert_eq!(pane.cursor(), 0);
        pane.move_cursor(100);
        assert_eq!(pane.cursor(), pane.entries().len() - 1);
    }

    #[test]
    fn clear_list_drops_entries_and_reload_restores_them() {
        let tree = sample_tree();
        let mut pane = Directory::open(tree.path());
        pane.reload();
        assert!(!pane.entries().is_empty());
        pane.clear_list();
        assert!(pane.entries().is_empty());
        assert!(pane.entry().is_none());
        pane.reload();
        assert_eq!(pane.entries().len(), 5);
    }

    #[test]
    fn draw_uses_the_configured_border() {
        let tree = sample_tree();
        let mut pane = Directory::open(tree.path());
        pane.reload();
        pane.resize(Rect::new(0, 0, 30, 8));
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).expect("terminal");

        terminal.draw(|frame| pane.draw(frame, true)).expect("draw");
        assert_eq!(terminal.backend().buffer()[(0, 0)].symbol(), "┌");

        pane.set_border(BorderType::Rounded);
        terminal.draw(|frame| pane.draw(frame, true)).expect("draw");
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].symbol(), "╭");
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("docs/"));
    }
}

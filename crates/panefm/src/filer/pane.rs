use std::path::Path;

use ratatui::layout::Rect;
use ratatui::widgets::BorderType;
use ratatui::Frame;

use crate::error::Result;

use super::FileEntry;

/// A single directory view inside a workspace.
///
/// Workspaces only arrange panes and track focus; listing, sorting and
/// drawing the contents belong to the implementor.
pub trait Pane {
    /// A pane located at `path`. The listing is not read until `reload`.
    fn open(path: &Path) -> Self
    where
        Self: Sized;

    fn path(&self) -> &Path;

    /// Move to another directory and read its listing.
    ///
    /// Fails with `Error::Location` when `path` is not an accessible
    /// directory; the pane stays where it was.
    fn chdir(&mut self, path: &Path) -> Result<()>;

    /// Re-read the listing. Failures go to the message line.
    fn reload(&mut self);

    /// Drop the cached listing.
    fn clear_list(&mut self);

    fn resize(&mut self, area: Rect);

    fn set_border(&mut self, border: BorderType);

    fn draw(&self, frame: &mut Frame, focused: bool);

    /// Move the entry cursor, stopping at either end.
    fn move_cursor(&mut self, delta: isize);

    /// The entry under the cursor.
    fn entry(&self) -> Option<&FileEntry>;
}

use crate::error::Result;
use crate::filer::Pane;
use crate::keymap::Action;

use super::super::state::App;

impl App {
    /// Apply one action to the filer.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        tracing::debug!(%action, "apply");
        match action {
            Action::Quit => {
                self.should_quit = true;
                Ok(())
            }
            Action::CursorUp => {
                self.filer.workspace_mut().focused_mut().move_cursor(-1);
                Ok(())
            }
            Action::CursorDown => {
                self.filer.workspace_mut().focused_mut().move_cursor(1);
                Ok(())
            }
            Action::EnterDir => self.enter_dir(),
            Action::ParentDir => self.parent_dir(),
            Action::CreatePane => self.filer.workspace_mut().create_pane(),
            Action::ClosePane => self.filer.workspace_mut().close_pane(),
            Action::NextPane => self.filer.workspace_mut().move_cursor(1),
            Action::PrevPane => self.filer.workspace_mut().move_cursor(-1),
            Action::SwapNext => self.filer.workspace_mut().swap_next(),
            Action::SwapPrev => self.filer.workspace_mut().swap_prev(),
            Action::ChdirNeighbor => self.filer.workspace_mut().chdir_neighbor(),
            Action::ReloadAll => {
                self.refresh_requested = true;
                self.filer.workspace_mut().reload_all()
            }
            Action::NextWorkspace => self.filer.move_workspace(1),
            Action::PrevWorkspace => self.filer.move_workspace(-1),
            Action::CreateWorkspace => self.filer.create_workspace(),
            Action::CloseWorkspace => self.filer.close_workspace(),
            Action::Layout(mode) => {
                self.filer.workspace_mut().set_layout(mode);
                Ok(())
            }
            Action::Menu(name) => {
                self.enter_menu(&name);
                Ok(())
            }
            Action::Shell => {
                self.spawn_shell();
                Ok(())
            }
            Action::Edit => {
                self.spawn_editor();
                Ok(())
            }
            Action::Run {
                command,
                background,
            } => {
                self.run_command(command, background);
                Ok(())
            }
            Action::Terminal => {
                self.open_terminal(None);
                Ok(())
            }
            Action::Spawn(line) => {
                self.open_terminal(Some(line));
                Ok(())
            }
            Action::RenameWorkspace => {
                self.enter_rename();
                Ok(())
            }
            Action::SetTitle(title) => {
                self.filer.workspace_mut().set_title(title);
                Ok(())
            }
        }
    }

    fn enter_dir(&mut self) -> Result<()> {
        let target = match self.filer.file() {
            Some(entry) if entry.is_dir => entry.path.clone(),
            _ => return Ok(()),
        };
        self.filer.workspace_mut().chdir_focused(&target)
    }

    fn parent_dir(&mut self) -> Result<()> {
        let parent = match self.filer.workspace().focused().path().parent() {
            Some(parent) => parent.to_path_buf(),
            None => return Ok(()),
        };
        self.filer.workspace_mut().chdir_focused(&parent)
    }
}

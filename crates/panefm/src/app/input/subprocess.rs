use crate::error::Result;
use crate::shell::{self, Outcome};
use crate::widgets::{message, progress};

use super::super::state::App;

impl App {
    pub(super) fn spawn_shell(&mut self) {
        let command = shell::interactive_shell(&self.config.shell);
        self.spawner
            .foreground(command, "shell", false, finish_foreground);
    }

    pub(super) fn spawn_editor(&mut self) {
        let path = match self.filer.file() {
            Some(entry) if entry.name != ".." => entry.path.clone(),
            _ => {
                message::error("nothing to edit here");
                return;
            }
        };
        match shell::editor(&self.config.editor, &path) {
            Some(command) => {
                self.spawner
                    .foreground(command, "edit", false, finish_foreground);
            }
            None => message::error("no editor configured"),
        }
    }

    /// Run a menu command line in the foreground or, holding the task
    /// slot, in the background.
    pub(super) fn run_command(&mut self, line: String, background: bool) {
        let command = shell::command_line(&self.config.shell, &line);
        if !background {
            self.spawner.foreground(command, line, true, finish_foreground);
            return;
        }
        let Some(slot) = self.tasks.try_acquire() else {
            message::error("a background task is already running");
            return;
        };
        progress::start(line.clone());
        self.resize(self.area);
        self.spawner
            .background(command, line, slot, finish_background);
    }

    /// Open the configured terminal, running `line` in it when given.
    pub(super) fn open_terminal(&mut self, line: Option<String>) {
        let Some(terminal) = self.config.terminal.as_ref() else {
            message::error("no terminal configured");
            return;
        };
        let command = shell::in_terminal(terminal, &self.config.shell, line.as_deref());
        let label = line.unwrap_or_else(|| terminal.command.clone());
        message::info(format!("{label}: started in terminal"));
        self.spawner.detached(command, label, finish_detached);
    }
}

fn finish_foreground(app: &mut App, outcome: Outcome) -> Result<()> {
    app.refresh_requested = true;
    outcome.report();
    app.filer.workspace_mut().reload_all()
}

fn finish_detached(app: &mut App, outcome: Outcome) -> Result<()> {
    outcome.report();
    app.filer.workspace_mut().reload_all()
}

fn finish_background(app: &mut App, outcome: Outcome) -> Result<()> {
    progress::finish();
    app.resize(app.area);
    outcome.report();
    app.filer.workspace_mut().reload_all()
}

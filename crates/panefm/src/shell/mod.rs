//! Foreground and background subprocesses.
//!
//! Foreground commands take the terminal: the worker thread holds a
//! handoff guard for the whole run, so the scheduling loop stays parked
//! and never paints over the subprocess. Background commands hold the
//! task slot and capture their output instead. Terminal commands open in
//! a window of their own and need neither.
//!
//! Either way the result comes back to the loop thread through a UI
//! callback; workers never touch UI state themselves.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::config::{EditorConfig, ShellConfig, TerminalConfig};
use crate::error::Result;
use crate::schedule::{Handoff, TaskGuard, UiCallbacks};
use crate::terminal::Session;
use crate::widgets::message;

/// Run `line` through the configured shell, e.g. `sh -c line`.
pub fn command_line(shell: &ShellConfig, line: &str) -> Command {
    let mut command = Command::new(&shell.command);
    command.args(&shell.args).arg(line);
    command
}

/// The configured terminal running `line` through the shell, or just the
/// terminal when there is no line, e.g. `tmux new-window sh -c line`.
pub fn in_terminal(terminal: &TerminalConfig, shell: &ShellConfig, line: Option<&str>) -> Command {
    let mut command = Command::new(&terminal.command);
    command.args(&terminal.args);
    if let Some(line) = line {
        command.arg(&shell.command).args(&shell.args).arg(line);
    }
    command
}

/// An interactive shell: `$SHELL`, or the configured shell.
pub fn interactive_shell(shell: &ShellConfig) -> Command {
    match env::var_os("SHELL").filter(|value| !value.is_empty()) {
        Some(program) => Command::new(program),
        None => Command::new(&shell.command),
    }
}

/// The editor opened on `path`. The editor setting may carry arguments.
pub fn editor(editor: &EditorConfig, path: &Path) -> Option<Command> {
    let mut words = editor.command.split_whitespace();
    let mut command = Command::new(words.next()?);
    command.args(words).arg(path);
    Some(command)
}

/// How a subprocess ended.
#[derive(Debug)]
pub struct Outcome {
    pub label: String,
    pub status: io::Result<ExitStatus>,
    /// Captured output; empty for foreground commands.
    pub output: String,
}

impl Outcome {
    /// The line to show: `Ok` for success, `Err` for failure.
    pub fn summary(&self) -> std::result::Result<String, String> {
        let last = self
            .output
            .lines()
            .map(str::trim)
            .rev()
            .find(|line| !line.is_empty());
        match (&self.status, last) {
            (Err(err), _) => Err(format!("{}: {err}", self.label)),
            (Ok(status), Some(line)) if status.success() => Ok(format!("{}: {line}", self.label)),
            (Ok(status), None) if status.success() => Ok(format!("{}: done", self.label)),
            (Ok(status), Some(line)) => Err(format!("{}: {line} ({status})", self.label)),
            (Ok(status), None) => Err(format!("{}: {status}", self.label)),
        }
    }

    pub fn report(&self) {
        match self.summary() {
            Ok(text) => message::info(text),
            Err(text) => message::error(text),
        }
    }
}

/// Starts subprocesses on worker threads and reports back to the loop.
pub struct Spawner<S> {
    handoff: Handoff,
    session: Arc<dyn Session>,
    callbacks: UiCallbacks<S>,
}

impl<S: 'static> Spawner<S> {
    pub fn new(handoff: Handoff, session: Arc<dyn Session>, callbacks: UiCallbacks<S>) -> Self {
        Self {
            handoff,
            session,
            callbacks,
        }
    }

    /// Run `command` with the terminal handed over. With `pause`, wait for
    /// Enter afterwards so the output stays readable.
    pub fn foreground<F>(
        &self,
        mut command: Command,
        label: impl Into<String>,
        pause: bool,
        finish: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(&mut S, Outcome) -> Result<()> + Send + 'static,
    {
        let label = label.into();
        let handoff = self.handoff.clone();
        let session = self.session.clone();
        let callbacks = self.callbacks.clone();
        thread::spawn(move || {
            let status = {
                let _terminal = handoff.begin();
                if let Err(err) = session.suspend() {
                    tracing::warn!(%err, "terminal suspend failed");
                }
                tracing::info!(%label, "foreground command started");
                let status = command.status();
                if pause {
                    wait_for_enter();
                }
                if let Err(err) = session.resume() {
                    tracing::warn!(%err, "terminal resume failed");
                }
                status
            };
            let outcome = Outcome {
                label,
                status,
                output: String::new(),
            };
            if !callbacks.call(move |state| finish(state, outcome)) {
                tracing::debug!("loop stopped before foreground command finished");
            }
        })
    }

    /// Run `command` detached from the terminal while holding the task
    /// slot. The slot is released after `finish` has run.
    pub fn background<F>(
        &self,
        mut command: Command,
        label: impl Into<String>,
        slot: TaskGuard,
        finish: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(&mut S, Outcome) -> Result<()> + Send + 'static,
    {
        let label = label.into();
        let callbacks = self.callbacks.clone();
        thread::spawn(move || {
            tracing::info!(%label, "background command started");
            command.stdin(Stdio::null());
            let outcome = match command.output() {
                Ok(output) => {
                    let mut text = String::from_utf8_lossy(&output.stdout).to_string();
                    text.push_str(&String::from_utf8_lossy(&output.stderr));
                    Outcome {
                        label,
                        status: Ok(output.status),
                        output: text,
                    }
                }
                Err(err) => Outcome {
                    label,
                    status: Err(err),
                    output: String::new(),
                },
            };
            let delivered = callbacks.call(move |state| {
                let _slot = slot;
                finish(state, outcome)
            });
            if !delivered {
                tracing::debug!("loop stopped before background command finished");
            }
        })
    }

    /// Run `command` without the terminal or the task slot and report how
    /// it exited.
    pub fn detached<F>(
        &self,
        mut command: Command,
        label: impl Into<String>,
        finish: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(&mut S, Outcome) -> Result<()> + Send + 'static,
    {
        let label = label.into();
        let callbacks = self.callbacks.clone();
        thread::spawn(move || {
            tracing::info!(%label, "terminal command started");
            let status = command
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();
            let outcome = Outcome {
                label,
                status,
                output: String::new(),
            };
            if !callbacks.call(move |state| finish(state, outcome)) {
                tracing::debug!("loop stopped before terminal command finished");
            }
        })
    }
}

fn wait_for_enter() {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\n[press Enter to return to panefm]");
    let _ = stdout.flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

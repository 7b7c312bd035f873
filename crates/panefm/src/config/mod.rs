//! Configuration loading and merging.
//!
//! Config is read from `~/.config/panefm/config.toml`, or from the path
//! in `PANEFM_CONFIG`. Every field is optional and merged over defaults.
//!
//! Supports the workspace stack shape and pane borders, the shell, editor
//! and terminal used for subprocesses, keymap overrides and user menus.
//! Uses TOML format with serde.

use ratatui::widgets::BorderType;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::filer::LayoutMode;

const DEFAULT_WORKSPACE_COUNT: usize = 4;
const DEFAULT_SHELL: &str = "sh";
const DEFAULT_SHELL_ARGS: [&str; 1] = ["-c"];
const DEFAULT_EDITOR: &str = "vi";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub workspace: WorkspaceConfig,
    pub shell: ShellConfig,
    pub editor: EditorConfig,
    /// `None` when no terminal is configured.
    pub terminal: Option<TerminalConfig>,
    /// Action name to chord.
    pub keymap: BTreeMap<String, String>,
    pub menus: BTreeMap<String, Vec<MenuItemConfig>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceConfig {
    pub count: usize,
    pub layout: LayoutMode,
    /// Where new panes open. `None` means the user's home.
    pub start: Option<PathBuf>,
    pub border: BorderType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub command: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub command: String,
}

/// A terminal emulator that runs commands in a window of its own, e.g.
/// `tmux new-window`. The shell and the command line are appended to
/// `args`.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalConfig {
    pub command: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItemConfig {
    pub key: Option<char>,
    pub label: String,
    pub command: String,
    #[serde(default)]
    pub background: bool,
    /// Run through `[terminal]` instead of taking over this one.
    #[serde(default)]
    pub terminal: bool,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    workspace: Option<RawWorkspace>,
    shell: Option<RawShell>,
    editor: Option<RawEditor>,
    terminal: Option<RawTerminal>,
    keymap: Option<BTreeMap<String, String>>,
    menus: Option<BTreeMap<String, RawMenu>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawWorkspace {
    count: Option<usize>,
    layout: Option<String>,
    start: Option<String>,
    border: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawShell {
    command: Option<String>,
    args: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawEditor {
    command: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawTerminal {
    command: Option<String>,
    args: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMenu {
    #[serde(default)]
    items: Vec<MenuItemConfig>,
}

impl Default for Config {
    fn default() -> Self {
        merge_config(None)
    }
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    match toml::from_str::<RawConfig>(&contents) {
        Ok(raw) => Some(raw),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring malformed config");
            None
        }
    }
}

fn default_editor() -> String {
    env::var("EDITOR")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

fn expand_home(value: &str) -> PathBuf {
    match value.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(value),
        },
        None => PathBuf::from(value),
    }
}

fn parse_border(value: &str) -> Option<BorderType> {
    match value.trim().to_lowercase().as_str() {
        "plain" => Some(BorderType::Plain),
        "rounded" => Some(BorderType::Rounded),
        "double" => Some(BorderType::Double),
        "thick" => Some(BorderType::Thick),
        _ => None,
    }
}

fn merge_config(raw: Option<RawConfig>) -> Config {
    let raw = raw.unwrap_or_default();

    let raw_workspace = raw.workspace.unwrap_or_default();
    let count = raw_workspace
        .count
        .unwrap_or(DEFAULT_WORKSPACE_COUNT)
        .max(1);
    let layout = match raw_workspace.layout.as_deref().map(str::parse::<LayoutMode>) {
        Some(Ok(layout)) => layout,
        Some(Err(err)) => {
            tracing::warn!(%err, "using default layout");
            LayoutMode::default()
        }
        None => LayoutMode::default(),
    };
    let start = raw_workspace
        .start
        .filter(|value| !value.trim().is_empty())
        .map(|value| expand_home(value.trim()));
    let border = match raw_workspace.border.as_deref() {
        Some(value) => parse_border(value).unwrap_or_else(|| {
            tracing::warn!(border = value, "unknown border style, using plain");
            BorderType::Plain
        }),
        None => BorderType::Plain,
    };

    let raw_shell = raw.shell.unwrap_or_default();
    let shell = ShellConfig {
        command: raw_shell
            .command
            .unwrap_or_else(|| DEFAULT_SHELL.to_string()),
        args: raw_shell
            .args
            .unwrap_or_else(|| DEFAULT_SHELL_ARGS.iter().map(|arg| arg.to_string()).collect()),
    };

    let editor = EditorConfig {
        command: raw
            .editor
            .and_then(|editor| editor.command)
            .unwrap_or_else(default_editor),
    };

    let terminal = raw.terminal.and_then(|terminal| {
        let command = terminal
            .command
            .filter(|command| !command.trim().is_empty())?;
        Some(TerminalConfig {
            command,
            args: terminal.args.unwrap_or_default(),
        })
    });

    let menus = raw
        .menus
        .unwrap_or_default()
        .into_iter()
        .map(|(name, menu)| (name, menu.items))
        .collect();

    Config {
        workspace: WorkspaceConfig {
            count,
            layout,
            start,
            border,
        },
        shell,
        editor,
        terminal,
        keymap: raw.keymap.unwrap_or_default(),
        menus,
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os("PANEFM_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("panefm").join("config.toml"))
}

pub fn load_config() -> Config {
    let raw = config_path().and_then(|path| read_toml(&path));
    merge_config(raw)
}

use std::fmt;
use std::str::FromStr;

use crate::filer::LayoutMode;

/// Something a key or a menu item can ask the filer to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    CursorUp,
    CursorDown,
    EnterDir,
    ParentDir,
    CreatePane,
    ClosePane,
    NextPane,
    PrevPane,
    SwapNext,
    SwapPrev,
    ChdirNeighbor,
    ReloadAll,
    NextWorkspace,
    PrevWorkspace,
    CreateWorkspace,
    CloseWorkspace,
    /// Ask for a new title for the current workspace.
    RenameWorkspace,
    SetTitle(String),
    Layout(LayoutMode),
    Menu(String),
    Shell,
    Edit,
    /// Open the configured terminal in the focused directory.
    Terminal,
    /// A command line from a user menu.
    Run { command: String, background: bool },
    /// A command line from a user menu, run in the configured terminal.
    Spawn(String),
}

const SIMPLE: [(&str, Action); 21] = [
    ("quit", Action::Quit),
    ("cursor-up", Action::CursorUp),
    ("cursor-down", Action::CursorDown),
    ("enter-dir", Action::EnterDir),
    ("parent-dir", Action::ParentDir),
    ("create-pane", Action::CreatePane),
    ("close-pane", Action::ClosePane),
    ("next-pane", Action::NextPane),
    ("prev-pane", Action::PrevPane),
    ("swap-next", Action::SwapNext),
    ("swap-prev", Action::SwapPrev),
    ("chdir-neighbor", Action::ChdirNeighbor),
    ("reload-all", Action::ReloadAll),
    ("next-workspace", Action::NextWorkspace),
    ("prev-workspace", Action::PrevWorkspace),
    ("create-workspace", Action::CreateWorkspace),
    ("close-workspace", Action::CloseWorkspace),
    ("rename-workspace", Action::RenameWorkspace),
    ("shell", Action::Shell),
    ("edit", Action::Edit),
    ("terminal", Action::Terminal),
];

impl FromStr for Action {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let name = value.trim().to_lowercase();
        if let Some(mode) = name.strip_prefix("layout-") {
            return mode.parse().map(Action::Layout);
        }
        if let Some(menu) = name.strip_prefix("menu-") {
            if menu.is_empty() {
                return Err(format!("unknown action: {value}"));
            }
            return Ok(Action::Menu(menu.to_string()));
        }
        SIMPLE
            .iter()
            .find(|(simple, _)| *simple == name)
            .map(|(_, action)| action.clone())
            .ok_or_else(|| format!("unknown action: {value}"))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Layout(mode) => write!(f, "layout-{mode}"),
            Action::Menu(name) => write!(f, "menu-{name}"),
            Action::Run { command, .. } | Action::Spawn(command) => f.write_str(command),
            Action::SetTitle(title) => write!(f, "set-title {title}"),
            other => {
                let name = SIMPLE
                    .iter()
                    .find(|(_, action)| action == other)
                    .map(|(name, _)| *name)
                    .unwrap_or("unknown");
                f.write_str(name)
            }
        }
    }
}

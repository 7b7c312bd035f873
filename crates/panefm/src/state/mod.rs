//! Persistent filer state.
//!
//! Stores the workspace stack across sessions in:
//! `~/.config/panefm/state.toml`
//!
//! Tracks the current workspace and, per workspace, its title, layout,
//! focused pane and pane locations. `PANEFM_STATE_PATH` overrides the
//! location.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::filer::LayoutMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilerState {
    #[serde(default)]
    pub current: usize,
    #[serde(default)]
    pub workspaces: Vec<WorkspaceState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceState {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub layout: LayoutMode,
    #[serde(default)]
    pub cursor: usize,
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

fn state_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os("PANEFM_STATE_PATH") {
        return Some(PathBuf::from(path));
    }
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("panefm").join("state.toml"))
}

/// The saved state, if there is any worth restoring.
pub fn load_state() -> Option<FilerState> {
    let path = state_path()?;
    let contents = fs::read_to_string(&path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }

    let state: FilerState = match toml::from_str(&contents) {
        Ok(state) => state,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring unreadable state");
            return None;
        }
    };
    if state.workspaces.is_empty() {
        return None;
    }
    Some(state)
}

pub fn save_state(state: &FilerState) -> std::io::Result<()> {
    let path = match state_path() {
        Some(path) => path,
        None => return Ok(()),
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string(state)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
    fs::write(path, contents)
}

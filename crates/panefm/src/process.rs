//! Process environment capability.
//!
//! Focus changes move the process working directory to the focused pane,
//! so every spawned command starts where the user is looking. The effect
//! goes through `ProcessEnv` so tests can observe it without touching the
//! real working directory.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

pub trait ProcessEnv {
    /// Location new panes open at.
    fn home_dir(&self) -> PathBuf;

    fn set_current_dir(&self, path: &Path) -> io::Result<()>;
}

/// The real process environment.
#[derive(Debug, Clone)]
pub struct SystemEnv {
    home: PathBuf,
}

impl SystemEnv {
    /// Uses `start` when given, otherwise the user's home directory.
    pub fn new(start: Option<PathBuf>) -> Self {
        let home = start
            .filter(|path| path.is_dir())
            .or_else(dirs::home_dir)
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("/"));
        Self { home }
    }
}

impl ProcessEnv for SystemEnv {
    fn home_dir(&self) -> PathBuf {
        self.home.clone()
    }

    fn set_current_dir(&self, path: &Path) -> io::Result<()> {
        env::set_current_dir(path)
    }
}


#[cfg(test)]
mod tests {
    use super::{ProcessEnv, SystemEnv};
    use tempfile::TempDir;

    #[test]
    fn system_env_prefers_existing_start_dir() {
        let dir = TempDir::new().expect("temp dir");
        let env = SystemEnv::new(Some(dir.path().to_path_buf()));
        assert_eq!(env.home_dir(), dir.path());
    }

    #[test]
    fn system_env_ignores_missing_start_dir() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("missing");
        let env = SystemEnv::new(Some(missing.clone()));
        assert_ne!(env.home_dir(), missing);
    }
}

//! File logging.
//!
//! The terminal belongs to the UI, so log lines go to
//! `~/.local/state/panefm/panefm.log` (or `PANEFM_LOG_PATH`). The level
//! filter comes from `PANEFM_LOG` and defaults to `info`.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn log_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os("PANEFM_LOG_PATH") {
        return Some(PathBuf::from(path));
    }
    let home = dirs::home_dir()?;
    Some(
        home.join(".local")
            .join("state")
            .join("panefm")
            .join("panefm.log"),
    )
}

fn open_log(path: &PathBuf) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Logging stays off if the file cannot be
/// opened.
pub fn init() {
    let Some(path) = log_path() else {
        return;
    };
    let file = match open_log(&path) {
        Ok(file) => file,
        Err(_) => return,
    };
    let filter = EnvFilter::try_from_env("PANEFM_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    if installed.is_ok() {
        tracing::info!(path = %path.display(), "logging started");
    }
}

//! Crate-wide error type.
//!
//! A lost working directory or a lost terminal is fatal; everything else
//! is shown on the message line and the loop keeps running.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown menu: {0}")]
    UnknownMenu(String),

    #[error("cannot open {}: {source}", path.display())]
    Location {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("lost working directory {}: {source}", path.display())]
    WorkingDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Drawing to the terminal failed; there is nowhere left to report.
    #[error("terminal lost: {0}")]
    Terminal(#[source] io::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// The working directory no longer matches the focused pane, or the
    /// terminal can no longer be drawn to.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::WorkingDir { .. } | Error::Terminal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn only_working_dir_and_terminal_errors_are_fatal() {
        let lost = Error::WorkingDir {
            path: PathBuf::from("/gone"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let location = Error::Location {
            path: PathBuf::from("/gone"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(lost.is_fatal());
        assert!(Error::Terminal(io::Error::from(io::ErrorKind::BrokenPipe)).is_fatal());
        assert!(!location.is_fatal());
        assert!(!Error::from(io::Error::from(io::ErrorKind::PermissionDenied)).is_fatal());
        assert!(!Error::UnknownMenu("nope".to_string()).is_fatal());
    }

    #[test]
    fn unknown_menu_message_names_the_menu() {
        let err = Error::UnknownMenu("bookmarks".to_string());
        assert_eq!(err.to_string(), "unknown menu: bookmarks");
    }
}

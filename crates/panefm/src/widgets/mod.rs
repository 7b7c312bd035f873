//! Status widgets drawn below the workspace.
//!
//! Each widget is a process-wide singleton: background workers report
//! progress and failures from any thread, while the scheduling loop
//! resizes and draws them every frame.
//!
//! Submodules:
//! - message: one-line info/error reporting
//! - infobar: details of the focused file entry
//! - progress: long-running background task indicator

pub mod infobar;
pub mod message;
pub mod progress;

/// Initialize every status widget. Called once before the loop starts.
pub fn init() {
    message::init();
    infobar::init();
    progress::init();
}

mod app;
mod config;
mod error;
mod events;
mod filer;
mod keymap;
mod logging;
mod menu;
mod process;
mod schedule;
mod shell;
mod state;
mod terminal;
#[cfg(test)]
mod test_utils;
mod ui;
mod widgets;

use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let config = config::load_config();
    match app::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "panefm stopped");
            eprintln!("panefm: {err}");
            ExitCode::FAILURE
        }
    }
}

//! Application runner.
//!
//! Handles terminal setup/teardown and drives the scheduling loop.
//! The frontend pairs the app with the real terminal: each loop
//! iteration draws one frame through it and hands it one event.

use std::rc::Rc;
use std::sync::Arc;

use ratatui::layout::Rect;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::events::{spawn_input_thread, AppEvent};
use crate::filer::Filer;
use crate::keymap::Keymap;
use crate::process::SystemEnv;
use crate::schedule::{self, Driver, Endpoints, Scheduler};
use crate::shell::Spawner;
use crate::state::{load_state, save_state};
use crate::terminal::{self, Crossterm, Tui};
use crate::widgets::{self, message};

use super::state::App;

/// The app bound to the real terminal.
struct Frontend<'a> {
    app: App,
    terminal: &'a mut Tui,
}

impl Driver for Frontend<'_> {
    type State = App;

    fn state_mut(&mut self) -> &mut App {
        &mut self.app
    }

    fn frame(&mut self) -> Result<()> {
        if self.app.refresh_requested {
            self.terminal.clear().map_err(Error::Terminal)?;
            self.app.refresh_requested = false;
        }
        let app = &self.app;
        self.terminal
            .draw(|frame| super::render::render(app, frame))
            .map_err(Error::Terminal)?;
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) -> Result<()> {
        super::input::handle_event(&mut self.app, event)
    }

    fn should_exit(&self) -> bool {
        self.app.should_quit
    }
}

/// Entry point: build the app, set up the terminal and run until quit.
pub fn run(config: Config) -> Result<()> {
    let (mut scheduler, endpoints) = schedule::channels::<App>();
    let app = build_app(config, &endpoints);
    widgets::init();

    let mut terminal = terminal::setup()?;
    let result = run_loop(&mut scheduler, &endpoints, &mut terminal, app);
    let restored = terminal::restore(&mut terminal);

    result?;
    restored?;
    Ok(())
}

fn build_app(config: Config, endpoints: &Endpoints<App>) -> App {
    let env = Rc::new(SystemEnv::new(config.workspace.start.clone()));
    let mut filer = match load_state() {
        Some(state) => {
            tracing::info!(workspaces = state.workspaces.len(), "restoring saved state");
            Filer::from_state(state, env)
        }
        None => Filer::new(config.workspace.count, config.workspace.layout, env),
    };
    filer.set_border(config.workspace.border);
    filer.merge_keymap(Keymap::from_config(
        config
            .keymap
            .iter()
            .map(|(action, chord)| (action.as_str(), chord.as_str())),
    ));

    let spawner = Spawner::new(
        endpoints.handoff.clone(),
        Arc::new(Crossterm),
        endpoints.callbacks.clone(),
    );
    App::new(config, filer, spawner)
}

/// Main event loop: process events until quit.
fn run_loop(
    scheduler: &mut Scheduler<App>,
    endpoints: &Endpoints<App>,
    terminal: &mut Tui,
    mut app: App,
) -> Result<()> {
    let size = terminal.size()?;
    app.resize(Rect::new(0, 0, size.width, size.height));
    message::info("Welcome to panefm");
    app.filer.workspace_mut().reload_all()?;

    spawn_input_thread(endpoints.events.clone(), endpoints.handoff.clone());

    let mut frontend = Frontend { app, terminal };
    let result = scheduler.run(&mut frontend);

    if let Err(err) = save_state(&frontend.app.filer.snapshot()) {
        tracing::warn!(%err, "failed to save state");
    }
    result
}

//! Terminal session setup and teardown.
//!
//! `setup`/`restore` bracket the whole program. `suspend`/`resume`
//! bracket a foreground subprocess: the program gives back the cooked
//! screen, then takes it over again and throws away keys typed meanwhile.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn setup() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

pub fn restore(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Gives the screen to a subprocess and takes it back.
pub trait Session: Send + Sync {
    fn suspend(&self) -> io::Result<()>;

    fn resume(&self) -> io::Result<()>;
}

/// The real terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crossterm;

impl Session for Crossterm {
    fn suspend(&self) -> io::Result<()> {
        suspend()
    }

    fn resume(&self) -> io::Result<()> {
        resume()
    }
}

/// Hand the terminal to a subprocess.
pub fn suspend() -> io::Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, crossterm::cursor::Show)
}

/// Take the terminal back. The next frame must clear the screen.
pub fn resume() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    enable_raw_mode()?;
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read();
    }
    Ok(())
}

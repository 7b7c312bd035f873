//! Terminal input events and the feeder thread.
//!
//! The feeder polls crossterm and pushes key presses and resizes onto the
//! scheduling loop's event channel. While a terminal handoff is active it
//! stops reading so the subprocess gets the keyboard.

use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::schedule::Handoff;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    /// New terminal size as (columns, rows).
    Resize(u16, u16),
}

impl AppEvent {
    /// The loop only cares about key presses and resizes.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(AppEvent::Key(key)),
            Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
            _ => None,
        }
    }
}

trait EventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

struct Crossterm;

impl EventSource for Crossterm {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// One feeder step: `None` when there is nothing to read or the terminal
/// belongs to a subprocess.
fn next_event(
    source: &mut impl EventSource,
    handoff_active: impl Fn() -> bool,
) -> io::Result<Option<Event>> {
    if handoff_active() {
        thread::sleep(POLL_INTERVAL);
        return Ok(None);
    }
    if !source.poll(POLL_INTERVAL)? {
        return Ok(None);
    }
    // A handoff that started during the poll owns the pending input.
    if handoff_active() {
        return Ok(None);
    }
    source.read().map(Some)
}

/// Spawn a thread to read terminal input events.
///
/// The thread ends when the loop drops its receiver or the terminal
/// stops producing events.
pub fn spawn_input_thread(sender: Sender<AppEvent>, handoff: Handoff) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut source = Crossterm;
        loop {
            let event = match next_event(&mut source, || handoff.is_active()) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(err) => {
                    tracing::error!(%err, "terminal input failed");
                    break;
                }
            };
            if let Some(event) = AppEvent::from_terminal(event) {
                if sender.send(event).is_err() {
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{next_event, AppEvent, EventSource};
    use crossterm::event::{
        Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEvent,
        MouseEventKind,
    };
    use std::cell::Cell;
    use std::io;
    use std::time::Duration;

    /// Always has a key pending; optionally starts a handoff mid-poll.
    struct Pending<'a> {
        starts_handoff: Option<&'a Cell<bool>>,
        reads: usize,
    }

    impl EventSource for Pending<'_> {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            if let Some(active) = self.starts_handoff {
                active.set(true);
            }
            Ok(true)
        }

        fn read(&mut self) -> io::Result<Event> {
            self.reads += 1;
            Ok(Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)))
        }
    }

    #[test]
    fn reads_pending_input_without_a_handoff() {
        let mut source = Pending {
            starts_handoff: None,
            reads: 0,
        };
        let event = next_event(&mut source, || false).expect("step");
        assert!(matches!(event, Some(Event::Key(_))));
        assert_eq!(source.reads, 1);
    }

    #[test]
    fn leaves_input_alone_when_a_handoff_starts_during_poll() {
        let active = Cell::new(false);
        let mut source = Pending {
            starts_handoff: Some(&active),
            reads: 0,
        };
        let event = next_event(&mut source, || active.get()).expect("step");
        assert!(event.is_none());
        assert_eq!(source.reads, 0);
    }

    #[test]
    fn keeps_presses_and_resizes_only() {
        let press = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
            ..press
        };
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };

        assert_eq!(
            AppEvent::from_terminal(Event::Key(press)),
            Some(AppEvent::Key(press))
        );
        assert_eq!(AppEvent::from_terminal(Event::Key(release)), None);
        assert_eq!(
            AppEvent::from_terminal(Event::Resize(120, 40)),
            Some(AppEvent::Resize(120, 40))
        );
        assert_eq!(AppEvent::from_terminal(Event::Mouse(mouse)), None);
        assert_eq!(AppEvent::from_terminal(Event::FocusGained), None);
    }
}

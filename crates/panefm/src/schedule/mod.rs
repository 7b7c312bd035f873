//! The scheduling loop.
//!
//! One thread owns every piece of UI state. Everything else talks to it
//! through three channels:
//! - events: key and resize input from the terminal feeder
//! - handoff: the two-signal terminal handoff (see `handoff`)
//! - callbacks: closures that run on the loop thread, sent synchronously
//!
//! Each iteration draws one frame, then waits for exactly one message.

mod handoff;
mod task;

use std::sync::Arc;

use crossbeam_channel::{bounded, select, Receiver, Sender};

use crate::error::Result;
use crate::events::AppEvent;
use crate::widgets::message;

pub use handoff::Handoff;
pub use task::{TaskGuard, TaskSlot};

const EVENT_CAPACITY: usize = 20;
const HANDOFF_CAPACITY: usize = 2;

pub type Callback<S> = Box<dyn FnOnce(&mut S) -> Result<()> + Send>;

/// What the loop drives: a frame source and an event sink over some state.
pub trait Driver {
    type State;

    fn state_mut(&mut self) -> &mut Self::State;

    /// Draw and flush one frame. Fatal errors end the loop; others go to
    /// the message line and show up on the next frame.
    fn frame(&mut self) -> Result<()>;

    fn handle(&mut self, event: AppEvent) -> Result<()>;

    fn should_exit(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    HandoffInProgress,
}

impl LoopState {
    /// Every handoff signal flips the state: the first parks, the second
    /// resumes.
    pub fn on_handoff_signal(self) -> Self {
        match self {
            LoopState::Running => LoopState::HandoffInProgress,
            LoopState::HandoffInProgress => LoopState::Running,
        }
    }
}

/// Runs closures on the loop thread.
pub struct UiCallbacks<S> {
    tx: Sender<Callback<S>>,
}

impl<S> Clone for UiCallbacks<S> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<S> UiCallbacks<S> {
    /// Hand `f` to the loop and block until the loop has taken it.
    /// Returns false when the loop is gone.
    pub fn call<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut S) -> Result<()> + Send + 'static,
    {
        self.tx.send(Box::new(f)).is_ok()
    }
}

/// Producer handles for the loop's channels.
pub struct Endpoints<S> {
    pub events: Sender<AppEvent>,
    pub handoff: Handoff,
    pub callbacks: UiCallbacks<S>,
}

enum Next<S> {
    Event(AppEvent),
    Handoff,
    Callback(Callback<S>),
    Closed,
}

pub struct Scheduler<S> {
    events: Receiver<AppEvent>,
    handoff: Receiver<()>,
    parked: Sender<()>,
    callbacks: Receiver<Callback<S>>,
    shared: Arc<handoff::Shared>,
    state: LoopState,
}

pub fn channels<S>() -> (Scheduler<S>, Endpoints<S>) {
    let (events_tx, events) = bounded(EVENT_CAPACITY);
    let (handoff_tx, handoff) = bounded(HANDOFF_CAPACITY);
    let (parked, parked_rx) = bounded(0);
    let (callbacks_tx, callbacks) = bounded(0);
    let shared = Arc::new(handoff::Shared::default());

    let scheduler = Scheduler {
        events,
        handoff,
        parked,
        callbacks,
        shared: shared.clone(),
        state: LoopState::Running,
    };
    let endpoints = Endpoints {
        events: events_tx,
        handoff: Handoff::new(handoff_tx, parked_rx, shared),
        callbacks: UiCallbacks { tx: callbacks_tx },
    };
    (scheduler, endpoints)
}

impl<S> Scheduler<S> {
    #[cfg(test)]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run until the driver asks to exit, a fatal error comes back, or
    /// every producer is gone.
    pub fn run<D>(&mut self, driver: &mut D) -> Result<()>
    where
        D: Driver<State = S>,
    {
        while !driver.should_exit() {
            settle(driver.frame())?;
            let next = select! {
                recv(self.events) -> event => event.map_or(Next::Closed, Next::Event),
                recv(self.handoff) -> signal => signal.map_or(Next::Closed, |()| Next::Handoff),
                recv(self.callbacks) -> callback => callback.map_or(Next::Closed, Next::Callback),
            };
            let result = match next {
                Next::Event(event) => driver.handle(event),
                Next::Handoff => {
                    if !self.park() {
                        break;
                    }
                    Ok(())
                }
                Next::Callback(callback) => callback(driver.state_mut()),
                Next::Closed => break,
            };
            settle(result)?;
        }
        Ok(())
    }

    /// Block until the resume signal. False if the channel closed instead.
    fn park(&mut self) -> bool {
        self.state = self.state.on_handoff_signal();
        self.shared.mark_parked();
        // Rendezvous with the waiting `begin`.
        let _ = self.parked.send(());
        tracing::debug!("loop parked for terminal handoff");

        let resumed = self.handoff.recv().is_ok();

        self.shared.mark_resumed();
        self.state = self.state.on_handoff_signal();
        tracing::debug!(resumed, "loop resumed");
        resumed
    }
}

fn settle(result: Result<()>) -> Result<()> {
    match result {
        Err(err) if err.is_fatal() => {
            tracing::error!(%err, "fatal error");
            Err(err)
        }
        Err(err) => {
            message::error(err);
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}

//! Exclusive terminal handoff.
//!
//! A foreground subprocess takes the terminal in two signals on the
//! handoff channel: the first parks the scheduling loop, the second
//! resumes it. `Handoff::begin` sends the first and hands back a guard
//! whose drop sends the second, so the pair can never come apart.
//!
//! The loop acknowledges the park on a zero-capacity channel, so `begin`
//! returns only once the loop has stopped drawing.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver, Sender};

#[derive(Debug, Default)]
pub(super) struct Shared {
    active: AtomicUsize,
    parked: AtomicBool,
    parks: AtomicU64,
}

impl Shared {
    pub(super) fn mark_parked(&self) {
        self.parked.store(true, Ordering::SeqCst);
        self.parks.fetch_add(1, Ordering::SeqCst);
    }

    pub(super) fn mark_resumed(&self) {
        self.parked.store(false, Ordering::SeqCst);
    }
}

/// Producer side of the handoff channel.
#[derive(Debug, Clone)]
pub struct Handoff {
    signal: Sender<()>,
    parked: Receiver<()>,
    // One handoff in flight at a time; a second `begin` waits here.
    exclusive: (Sender<()>, Receiver<()>),
    shared: Arc<Shared>,
}

impl Handoff {
    pub(super) fn new(signal: Sender<()>, parked: Receiver<()>, shared: Arc<Shared>) -> Self {
        Self {
            signal,
            parked,
            exclusive: bounded(1),
            shared,
        }
    }

    /// Park the scheduling loop and take the terminal.
    ///
    /// Blocks while another handoff is in flight, then until the loop
    /// acknowledges the park. Returns at once if the loop is gone.
    pub fn begin(&self) -> HandoffGuard {
        let (token, release) = &self.exclusive;
        let _ = token.send(());
        self.shared.active.fetch_add(1, Ordering::SeqCst);
        let guard = HandoffGuard {
            signal: self.signal.clone(),
            release: release.clone(),
            shared: self.shared.clone(),
        };

        if self.signal.send(()).is_err() || self.parked.recv().is_err() {
            tracing::debug!("handoff without a running loop");
        }
        guard
    }

    /// A guard is alive somewhere; input readers should leave the
    /// terminal alone.
    pub fn is_active(&self) -> bool {
        self.shared.active.load(Ordering::SeqCst) > 0
    }

    /// The loop is currently blocked waiting for the resume signal.
    #[cfg(test)]
    pub fn is_parked(&self) -> bool {
        self.shared.parked.load(Ordering::SeqCst)
    }

    /// Completed parks since startup.
    #[cfg(test)]
    pub fn parks(&self) -> u64 {
        self.shared.parks.load(Ordering::SeqCst)
    }
}

/// Holds the terminal; dropping it resumes the scheduling loop.
#[must_use = "dropping the guard resumes the loop immediately"]
pub struct HandoffGuard {
    signal: Sender<()>,
    release: Receiver<()>,
    shared: Arc<Shared>,
}

impl Drop for HandoffGuard {
    fn drop(&mut self) {
        let _ = self.signal.send(());
        self.shared.active.fetch_sub(1, Ordering::SeqCst);
        let _ = self.release.try_recv();
    }
}

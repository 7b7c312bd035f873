//! The background task slot.
//!
//! At most one background task shows progress at a time. The slot is a
//! single-capacity channel: acquiring fills it, dropping the guard drains
//! it.

use crossbeam_channel::{bounded, Receiver, Sender};

#[derive(Debug, Clone)]
pub struct TaskSlot {
    fill: Sender<()>,
    drain: Receiver<()>,
}

impl TaskSlot {
    pub fn new() -> Self {
        let (fill, drain) = bounded(1);
        Self { fill, drain }
    }

    /// Take the slot if it is free.
    pub fn try_acquire(&self) -> Option<TaskGuard> {
        self.fill.try_send(()).ok().map(|()| TaskGuard {
            drain: self.drain.clone(),
        })
    }

    #[cfg(test)]
    pub fn is_busy(&self) -> bool {
        self.fill.is_full()
    }
}

impl Default for TaskSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases the slot on drop.
pub struct TaskGuard {
    drain: Receiver<()>,
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        let _ = self.drain.try_recv();
    }
}

#[cfg(test)]
mod tests {
    use super::TaskSlot;
    use std::thread;

    #[test]
    fn slot_has_one_holder() {
        let slot = TaskSlot::new();
        assert!(!slot.is_busy());

        let guard = slot.try_acquire().expect("free slot");
        assert!(slot.is_busy());
        assert!(slot.try_acquire().is_none());

        drop(guard);
        assert!(!slot.is_busy());
        assert!(slot.try_acquire().is_some());
    }

    #[test]
    fn guard_released_on_worker_thread_frees_slot() {
        let slot = TaskSlot::new();
        let guard = slot.try_acquire().expect("free slot");
        thread::spawn(move || drop(guard)).join().expect("worker");

        assert!(!slot.is_busy());
        assert!(slot.try_acquire().is_some());
    }
}

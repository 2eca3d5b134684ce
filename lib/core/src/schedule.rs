//! Single-shot timer seam.

use std::time::Duration;

/// Arms and cancels single-shot timers.
///
/// The owner of a handle is responsible for cancelling it before arming a
/// replacement; a scheduler never cancels on its own.
pub trait Scheduler {
    /// Token identifying one armed timer.
    type Handle;

    /// Arms a timer that fires once after `delay`.
    fn schedule(&mut self, delay: Duration) -> Self::Handle;

    /// Cancels a timer that has not fired yet.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Scheduler that records timers instead of running them.
///
/// Tests fire the armed timer by calling the owner's fire method directly.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ManualScheduler {
    next_id: u64,
    /// Currently armed timers as `(id, delay)`.
    pub(crate) armed: Vec<(u64, Duration)>,
    /// Total number of timers ever armed.
    pub(crate) scheduled: usize,
    /// Total number of cancellations.
    pub(crate) cancelled: usize,
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&mut self, delay: Duration) -> u64 {
        self.next_id += 1;
        self.scheduled += 1;
        self.armed.push((self.next_id, delay));
        self.next_id
    }

    fn cancel(&mut self, handle: u64) {
        self.cancelled += 1;
        self.armed.retain(|(id, _)| *id != handle);
    }
}

#[cfg(test)]
impl ManualScheduler {
    /// Marks the armed timer `handle` as fired.
    pub(crate) fn fired(&mut self, handle: u64) {
        self.armed.retain(|(id, _)| *id != handle);
    }
}

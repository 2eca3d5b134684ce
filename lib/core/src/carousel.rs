//! Timed image carousel.
//!
//! A carousel cycles through a fixed list of slides. Exactly one timer is
//! pending while it runs: every index change, automatic or manual, cancels
//! the pending timer and arms a fresh one, so a manual interaction restarts
//! the countdown.

use crate::schedule::Scheduler;
use std::time::Duration;

/// Interval used when a page does not pick its own.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// One image in a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    /// Externally hosted image locator.
    pub src: &'static str,
    /// Alternative text.
    pub alt: &'static str,
}

/// Slide position plus the auto-advance timer that owns it.
///
/// Dropping the carousel cancels its pending timer.
pub struct Carousel<S: Scheduler> {
    slides: Vec<Slide>,
    index: usize,
    interval: Duration,
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Carousel<S> {
    /// Creates a stopped carousel at the first slide.
    #[must_use]
    pub fn new(slides: Vec<Slide>, interval: Duration, scheduler: S) -> Self {
        Self {
            slides,
            index: 0,
            interval,
            scheduler,
            pending: None,
        }
    }

    /// Returns the current slide index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Returns true if there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Returns the slide on display, or `None` for an empty carousel.
    #[must_use]
    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }

    /// Returns all slides in order.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Returns the auto-advance interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true while an auto-advance timer is pending.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Arms the first auto-advance timer. An empty carousel never schedules.
    pub fn start(&mut self) {
        self.rearm();
    }

    /// Cancels the pending timer, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Handles the pending timer firing: advances one slide and re-arms.
    ///
    /// A fire that arrives after [`stop`](Self::stop) is ignored. Returns
    /// whether the index moved.
    pub fn fire(&mut self) -> bool {
        if self.pending.take().is_none() {
            return false;
        }
        self.step_forward();
        self.rearm();
        true
    }

    /// Moves to the next slide, wrapping to the first.
    pub fn next(&mut self) {
        self.step_forward();
        self.rearm();
    }

    /// Moves to the previous slide, wrapping to the last.
    pub fn prev(&mut self) {
        let len = self.slides.len();
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
        self.rearm();
    }

    /// Jumps to slide `index`.
    ///
    /// Out-of-range indices are ignored and leave the timer alone. Returns
    /// whether the jump was applied.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.slides.len() {
            return false;
        }
        self.index = index;
        self.rearm();
        true
    }

    fn step_forward(&mut self) {
        let len = self.slides.len();
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    fn rearm(&mut self) {
        self.stop();
        if !self.slides.is_empty() {
            self.pending = Some(self.scheduler.schedule(self.interval));
        }
    }

    #[cfg(test)]
    pub(crate) fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<S: Scheduler> Drop for Carousel<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;

    const INTERVAL: Duration = Duration::from_millis(4500);

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|_| Slide {
                src: "https://images.example/slide.jpg",
                alt: "slide",
            })
            .collect()
    }

    fn carousel(n: usize) -> Carousel<ManualScheduler> {
        let mut carousel = Carousel::new(slides(n), INTERVAL, ManualScheduler::default());
        carousel.start();
        carousel
    }

    /// Lets the single armed timer elapse.
    fn elapse(carousel: &mut Carousel<ManualScheduler>) -> bool {
        let armed = &carousel.scheduler().armed;
        assert_eq!(armed.len(), 1, "exactly one timer should be pending");
        let (id, delay) = armed[0];
        assert_eq!(delay, INTERVAL);
        carousel.scheduler_mut().fired(id);
        carousel.fire()
    }

    #[test]
    fn auto_advance_wraps_after_last_slide() {
        let mut carousel = carousel(3);
        assert_eq!(carousel.index(), 0);

        assert!(elapse(&mut carousel));
        assert!(elapse(&mut carousel));
        assert_eq!(carousel.index(), 2);

        assert!(elapse(&mut carousel));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn empty_carousel_never_schedules() {
        let mut carousel = carousel(0);
        carousel.next();
        carousel.prev();
        assert!(!carousel.jump_to(0));
        assert!(!carousel.fire());

        assert!(carousel.current().is_none());
        assert_eq!(carousel.scheduler().scheduled, 0);
        assert!(!carousel.is_running());
    }

    #[test]
    fn index_stays_in_bounds_for_any_walk() {
        for n in 1..=5 {
            let mut carousel = carousel(n);
            // Deterministic mix of forward and backward steps.
            for step in 0..50usize {
                if step % 3 == 0 || step % 7 == 0 {
                    carousel.prev();
                } else {
                    carousel.next();
                }
                assert!(carousel.index() < n);
                assert!(carousel.current().is_some());
            }
        }
    }

    #[test]
    fn next_then_prev_returns_to_start() {
        for n in 1..=4 {
            for start in 0..n {
                let mut carousel = carousel(n);
                carousel.jump_to(start);
                carousel.next();
                carousel.prev();
                assert_eq!(carousel.index(), start);
            }
        }
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut carousel = carousel(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn manual_action_restarts_countdown() {
        let mut carousel = carousel(3);
        let first = carousel.scheduler().armed[0].0;

        carousel.next();

        let armed = &carousel.scheduler().armed;
        assert_eq!(armed.len(), 1);
        assert_ne!(armed[0].0, first);
        assert_eq!(carousel.scheduler().cancelled, 1);
        assert_eq!(carousel.scheduler().scheduled, 2);
    }

    #[test]
    fn jump_to_ignores_out_of_range() {
        let mut carousel = carousel(2);
        assert!(carousel.jump_to(1));
        assert_eq!(carousel.index(), 1);

        let scheduled = carousel.scheduler().scheduled;
        assert!(!carousel.jump_to(2));
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.scheduler().scheduled, scheduled);
    }

    #[test]
    fn fire_after_stop_is_ignored() {
        let mut carousel = carousel(3);
        carousel.stop();
        assert!(!carousel.is_running());
        assert!(carousel.scheduler().armed.is_empty());

        assert!(!carousel.fire());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn drop_cancels_pending_timer() {
        use std::cell::RefCell;
        use std::rc::Rc;

        struct Counting(Rc<RefCell<(usize, usize)>>);

        impl Scheduler for Counting {
            type Handle = ();

            fn schedule(&mut self, _delay: Duration) {
                self.0.borrow_mut().0 += 1;
            }

            fn cancel(&mut self, _handle: ()) {
                self.0.borrow_mut().1 += 1;
            }
        }

        let counts = Rc::new(RefCell::new((0, 0)));
        {
            let mut carousel = Carousel::new(slides(2), INTERVAL, Counting(Rc::clone(&counts)));
            carousel.start();
        }
        assert_eq!(*counts.borrow(), (1, 1));
    }
}

//! Autoplay timer lifecycle.
//!
//! Timers are created through a [`Scheduler`] so the carousel can run on the
//! browser's `setInterval` in production and on a manual clock in tests.
//! Dropping a handle cancels its timer.

use gloo_timers::callback::Interval;
use log::debug;

/// Creates repeating timers.
pub trait Scheduler {
    /// Cancels the timer when dropped.
    type Handle: 'static;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// `setInterval`-backed scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }
}

/// Owns at most one live timer.
pub struct Autoplay<S: Scheduler> {
    scheduler: S,
    interval_ms: u32,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> Autoplay<S> {
    pub fn new(scheduler: S, interval_ms: u32) -> Self {
        Self {
            scheduler,
            interval_ms,
            handle: None,
        }
    }

    /// Arm the timer, replacing any timer that is already running.
    pub fn start(&mut self, tick: Box<dyn FnMut()>) {
        if self.stop() {
            debug!("autoplay re-armed, previous timer cancelled");
        }
        self.handle = Some(self.scheduler.every(self.interval_ms, tick));
    }

    /// Disarm the timer. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        self.handle.take().is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.handle.is_some()
    }
}

/// Remembers whether hovering paused a running timer, so leaving resumes only
/// what the hover stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverPause {
    suspended: bool,
}

impl HoverPause {
    /// Pointer entered. Returns whether the timer should be stopped.
    pub fn enter(&mut self, playing: bool) -> bool {
        if playing {
            self.suspended = true;
        }
        playing
    }

    /// Pointer left. Returns whether the timer should be re-armed.
    pub fn leave(&mut self) -> bool {
        std::mem::take(&mut self.suspended)
    }

    /// An explicit pause or resume overrides the hover.
    pub fn clear(&mut self) {
        self.suspended = false;
    }
}

impl<S: Scheduler> std::fmt::Debug for Autoplay<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autoplay")
            .field("interval_ms", &self.interval_ms)
            .field("playing", &self.is_playing())
            .finish()
    }
}

//! In-memory stand-ins for the browser, used by unit tests.

use crate::autoplay::Scheduler;
use crate::carousel::SlideView;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Tick = Rc<RefCell<Box<dyn FnMut()>>>;

struct ManualTimer {
    period_ms: u64,
    due_ms: u64,
    tick: Tick,
    live: Rc<Cell<bool>>,
}

#[derive(Default)]
struct ClockState {
    now_ms: u64,
    timers: Vec<ManualTimer>,
}

/// A clock that only moves when told to.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

/// Cancels its timer when dropped, like `gloo_timers::callback::Interval`.
pub struct ManualHandle {
    live: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.live.set(false);
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    pub fn live_timers(&self) -> usize {
        self.state
            .borrow()
            .timers
            .iter()
            .filter(|t| t.live.get())
            .count()
    }

    /// Move time forward, firing every tick that falls due on the way.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms() + ms;
        loop {
            let tick = {
                let mut state = self.state.borrow_mut();
                state.timers.retain(|t| t.live.get());
                let Some(timer) = state
                    .timers
                    .iter_mut()
                    .filter(|t| t.due_ms <= target)
                    .min_by_key(|t| t.due_ms)
                else {
                    break;
                };
                let due = timer.due_ms;
                timer.due_ms += timer.period_ms;
                let tick = timer.tick.clone();
                state.now_ms = due;
                tick
            };
            // The state borrow is released so the tick may arm or cancel timers.
            (tick.borrow_mut())();
        }
        self.state.borrow_mut().now_ms = target;
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualHandle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualHandle {
        let live = Rc::new(Cell::new(true));
        let mut state = self.state.borrow_mut();
        let period_ms = u64::from(period_ms);
        let due_ms = state.now_ms + period_ms;
        state.timers.push(ManualTimer {
            period_ms,
            due_ms,
            tick: Rc::new(RefCell::new(tick)),
            live: live.clone(),
        });
        ManualHandle { live }
    }
}

/// Slide markers kept in a shared vector so tests can inspect them after
/// handing the view to a carousel.
#[derive(Clone)]
pub struct MarkerView {
    markers: Rc<RefCell<Vec<bool>>>,
}

impl MarkerView {
    pub fn new(count: usize) -> Self {
        Self {
            markers: Rc::new(RefCell::new(vec![false; count])),
        }
    }

    /// Pre-mark arbitrary slides, as stale page markup would.
    pub fn with_marked(count: usize, marked: &[usize]) -> Self {
        let view = Self::new(count);
        for &i in marked {
            view.markers.borrow_mut()[i] = true;
        }
        view
    }

    pub fn active_indices(&self) -> Vec<usize> {
        self.markers
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i)
            .collect()
    }
}

impl SlideView for MarkerView {
    fn slide_count(&self) -> usize {
        self.markers.borrow().len()
    }

    fn set_active(&mut self, index: usize, active: bool) {
        self.markers.borrow_mut()[index] = active;
    }
}

//! The carousel controller.
//!
//! [`Carousel`] ties the slide state, the view that shows the active marker,
//! the autoplay timer, the swipe tracker and hover suspension together. It is a
//! cheap `Rc` handle: event callbacks clone it instead of capturing `this`.

use crate::autoplay::{Autoplay, HoverPause, Scheduler};
use crate::config::CarouselConfig;
use crate::gesture::{SwipeDirection, SwipeTracker};
use crate::state::{SlideState, Transition};
use crate::CarouselError;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Whatever renders the slides and their active marker.
pub trait SlideView {
    fn slide_count(&self) -> usize;
    fn set_active(&mut self, index: usize, active: bool);
}

/// A user-facing action bound to a control or indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Prev,
    Next,
    Pause,
    Resume,
    GoTo(usize),
}

impl Command {
    /// The four control buttons, in the order they are laid out.
    pub const CONTROLS: [Command; 4] = [Command::Prev, Command::Next, Command::Pause, Command::Resume];

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "prev" => Some(Command::Prev),
            "next" => Some(Command::Next),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            _ => None,
        }
    }

    /// Button text for control commands; indicators are labelled by position.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Command::Prev => Some("prev"),
            Command::Next => Some("next"),
            Command::Pause => Some("pause"),
            Command::Resume => Some("resume"),
            Command::GoTo(_) => None,
        }
    }
}

struct Inner<V: SlideView, S: Scheduler> {
    state: SlideState,
    view: V,
    autoplay: Autoplay<S>,
    swipe: SwipeTracker,
    hover: HoverPause,
}

impl<V: SlideView, S: Scheduler> Inner<V, S> {
    fn apply(&mut self, t: Transition) {
        if t.from != t.to {
            self.view.set_active(t.from, false);
        }
        self.view.set_active(t.to, true);
        debug!("slide {} -> {}", t.from, t.to);
    }

    fn next(&mut self) {
        let t = self.state.next();
        self.apply(t);
    }

    fn prev(&mut self) {
        let t = self.state.prev();
        self.apply(t);
    }
}

pub struct Carousel<V: SlideView, S: Scheduler> {
    inner: Rc<RefCell<Inner<V, S>>>,
}

impl<V: SlideView, S: Scheduler> Clone for Carousel<V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<V: SlideView, S: Scheduler> fmt::Debug for Carousel<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Carousel")
            .field("state", &inner.state)
            .field("autoplay", &inner.autoplay)
            .field("hover", &inner.hover)
            .finish()
    }
}

impl<V: SlideView + 'static, S: Scheduler + 'static> Carousel<V, S> {
    /// Render slide 0 as active and, if configured, start autoplay.
    ///
    /// `source` names where the slides came from and only appears in errors.
    pub fn new(
        mut view: V,
        scheduler: S,
        config: &CarouselConfig,
        source: &str,
    ) -> Result<Self, CarouselError> {
        let config = config.clone().validate()?;
        let state = SlideState::try_new(view.slide_count(), source)?;

        // Clear any marker left in the page markup.
        for i in 0..state.count() {
            view.set_active(i, i == 0);
        }

        let carousel = Self {
            inner: Rc::new(RefCell::new(Inner {
                state,
                view,
                autoplay: Autoplay::new(scheduler, config.interval_ms),
                swipe: SwipeTracker::default(),
                hover: HoverPause::default(),
            })),
        };
        info!(
            "carousel {} ready: {} slides, interval {}ms, autoplay {}",
            source,
            carousel.slide_count(),
            config.interval_ms,
            config.auto_play
        );
        if config.auto_play {
            carousel.start_auto_scroll();
        }
        Ok(carousel)
    }

    pub fn current_index(&self) -> usize {
        self.inner.borrow().state.current()
    }

    pub fn slide_count(&self) -> usize {
        self.inner.borrow().state.count()
    }

    pub fn is_playing(&self) -> bool {
        self.inner.borrow().autoplay.is_playing()
    }

    pub fn go_to_slide(&self, index: usize) -> Result<(), CarouselError> {
        let mut inner = self.inner.borrow_mut();
        let t = inner.state.go_to(index)?;
        inner.apply(t);
        Ok(())
    }

    pub fn next_slide(&self) {
        self.inner.borrow_mut().next();
    }

    pub fn prev_slide(&self) {
        self.inner.borrow_mut().prev();
    }

    /// Arm the autoplay timer. Any running timer is replaced, never doubled.
    pub fn start_auto_scroll(&self) {
        let weak: Weak<RefCell<Inner<V, S>>> = Rc::downgrade(&self.inner);
        let tick = Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().next();
            }
        });
        let mut inner = self.inner.borrow_mut();
        inner.hover.clear();
        inner.autoplay.start(tick);
    }

    pub fn stop_auto_scroll(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.hover.clear();
        inner.autoplay.stop();
    }

    pub fn dispatch(&self, command: Command) -> Result<(), CarouselError> {
        match command {
            Command::Prev => self.prev_slide(),
            Command::Next => self.next_slide(),
            Command::Pause => self.stop_auto_scroll(),
            Command::Resume => self.start_auto_scroll(),
            Command::GoTo(index) => self.go_to_slide(index)?,
        }
        Ok(())
    }

    /// Route a click on a control by its label. Unknown labels are ignored.
    pub fn dispatch_label(&self, label: &str) -> Result<bool, CarouselError> {
        match Command::from_label(label) {
            Some(command) => self.dispatch(command).map(|_| true),
            None => {
                warn!("ignoring control with unknown label {:?}", label);
                Ok(false)
            }
        }
    }

    pub fn pointer_down(&self, x: f64) {
        self.inner.borrow_mut().swipe.begin(x);
    }

    /// Finish a gesture and navigate if it crossed the swipe threshold.
    pub fn pointer_up(&self, x: f64) -> Option<SwipeDirection> {
        let mut inner = self.inner.borrow_mut();
        let direction = inner.swipe.end(x)?;
        match direction {
            SwipeDirection::Previous => inner.prev(),
            SwipeDirection::Next => inner.next(),
        }
        Some(direction)
    }

    pub fn hover_enter(&self) {
        let mut inner = self.inner.borrow_mut();
        let playing = inner.autoplay.is_playing();
        if inner.hover.enter(playing) {
            inner.autoplay.stop();
        }
    }

    pub fn hover_leave(&self) {
        let resume = self.inner.borrow_mut().hover.leave();
        if resume {
            self.start_auto_scroll();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualClock, MarkerView};

    fn config(interval_ms: u32, auto_play: bool) -> CarouselConfig {
        CarouselConfig {
            interval_ms,
            auto_play,
            ..CarouselConfig::default()
        }
    }

    fn carousel(n: usize, auto_play: bool) -> (Carousel<MarkerView, ManualClock>, MarkerView, ManualClock) {
        let view = MarkerView::new(n);
        let clock = ManualClock::new();
        let c = Carousel::new(view.clone(), clock.clone(), &config(100, auto_play), "#test").unwrap();
        (c, view, clock)
    }

    #[test]
    fn initial_render_overrides_existing_markup() {
        let view = MarkerView::with_marked(4, &[2, 3]);
        let c = Carousel::new(view.clone(), ManualClock::new(), &config(100, false), "#test").unwrap();
        assert_eq!(view.active_indices(), vec![0]);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn empty_container_fails_construction() {
        let err = Carousel::new(MarkerView::new(0), ManualClock::new(), &config(100, true), "#empty")
            .unwrap_err();
        assert!(matches!(err, CarouselError::NoSlides(ref s) if s == "#empty"));
    }

    #[test]
    fn invalid_interval_fails_construction() {
        let err = Carousel::new(MarkerView::new(2), ManualClock::new(), &config(0, true), "#test")
            .unwrap_err();
        assert!(matches!(err, CarouselError::InvalidInterval(0)));
    }

    #[test]
    fn exactly_one_active_after_every_move() {
        for n in 1..=5 {
            let (c, view, _) = carousel(n, false);
            for step in 0..(3 * n) {
                match step % 3 {
                    0 => c.next_slide(),
                    1 => c.prev_slide(),
                    _ => c.go_to_slide(step % n).unwrap(),
                }
                assert_eq!(view.active_indices(), vec![c.current_index()]);
            }
        }
    }

    #[test]
    fn out_of_range_go_to_reports_and_keeps_marker() {
        let (c, view, _) = carousel(3, false);
        c.next_slide();
        let err = c.go_to_slide(7).unwrap_err();
        assert!(matches!(err, CarouselError::IndexOutOfRange { index: 7, count: 3 }));
        assert_eq!(c.current_index(), 1);
        assert_eq!(view.active_indices(), vec![1]);
    }

    #[test]
    fn autoplay_advances_on_each_tick() {
        let (c, view, clock) = carousel(3, true);
        assert!(c.is_playing());
        clock.advance(250);
        assert_eq!(c.current_index(), 2);
        assert_eq!(view.active_indices(), vec![2]);
        clock.advance(100);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn no_autoplay_means_no_timer() {
        let (c, _, clock) = carousel(3, false);
        assert!(!c.is_playing());
        clock.advance(1_000);
        assert_eq!(c.current_index(), 0);
        assert_eq!(clock.live_timers(), 0);
    }

    #[test]
    fn indicator_click_moves_marker() {
        let (c, view, _) = carousel(3, false);
        c.dispatch(Command::GoTo(2)).unwrap();
        assert_eq!(c.current_index(), 2);
        assert_eq!(view.active_indices(), vec![2]);
    }

    #[test]
    fn stop_twice_is_harmless() {
        let (c, _, clock) = carousel(3, true);
        c.stop_auto_scroll();
        c.stop_auto_scroll();
        assert!(!c.is_playing());
        clock.advance(500);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn repeated_resume_keeps_single_timer() {
        let (c, _, clock) = carousel(4, true);
        for _ in 0..3 {
            c.dispatch(Command::Resume).unwrap();
        }
        assert_eq!(clock.live_timers(), 1);
        clock.advance(100);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn hover_round_trip_leaves_one_timer() {
        let (c, _, clock) = carousel(3, true);
        c.hover_enter();
        assert!(!c.is_playing());
        assert_eq!(clock.live_timers(), 0);
        c.hover_leave();
        assert!(c.is_playing());
        assert_eq!(clock.live_timers(), 1);

        for _ in 0..4 {
            c.hover_enter();
            c.hover_leave();
        }
        assert_eq!(clock.live_timers(), 1);
    }

    #[test]
    fn hover_does_not_resume_an_explicit_pause() {
        let (c, _, clock) = carousel(3, true);
        c.hover_enter();
        c.dispatch(Command::Pause).unwrap();
        c.hover_leave();
        assert!(!c.is_playing());
        assert_eq!(clock.live_timers(), 0);
    }

    #[test]
    fn hover_leave_without_autoplay_stays_paused() {
        let (c, _, _) = carousel(3, false);
        c.hover_enter();
        c.hover_leave();
        assert!(!c.is_playing());
    }

    #[test]
    fn swipe_navigates_past_threshold() {
        let (c, _, _) = carousel(3, false);
        c.pointer_down(100.0);
        assert_eq!(c.pointer_up(151.0), Some(SwipeDirection::Previous));
        assert_eq!(c.current_index(), 2);

        c.pointer_down(100.0);
        assert_eq!(c.pointer_up(150.0), None);
        assert_eq!(c.current_index(), 2);

        c.pointer_down(100.0);
        assert_eq!(c.pointer_up(49.0), Some(SwipeDirection::Next));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn labels_route_to_commands() {
        let (c, _, _) = carousel(3, true);
        assert!(c.dispatch_label("next").unwrap());
        assert_eq!(c.current_index(), 1);
        assert!(c.dispatch_label("prev").unwrap());
        assert_eq!(c.current_index(), 0);
        assert!(c.dispatch_label("pause").unwrap());
        assert!(!c.is_playing());
        assert!(c.dispatch_label("resume").unwrap());
        assert!(c.is_playing());
        assert!(!c.dispatch_label("shuffle").unwrap());
    }

    #[test]
    fn control_labels_round_trip() {
        for command in Command::CONTROLS {
            let label = command.label().unwrap();
            assert_eq!(Command::from_label(label), Some(command));
        }
        assert_eq!(Command::GoTo(1).label(), None);
    }

    #[test]
    fn dropping_carousel_cancels_timer() {
        let (c, _, clock) = carousel(3, true);
        drop(c);
        assert_eq!(clock.live_timers(), 0);
        clock.advance(500);
    }
}

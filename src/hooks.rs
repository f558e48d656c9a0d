use crate::autoplay::HoverPause;
use crate::carousel::Command;
use crate::config::CarouselConfig;
use crate::gesture::{SwipeDirection, SwipeTracker};
use crate::state::SlideState;
use gloo_timers::callback::Interval;
use log::warn;
use std::num::NonZeroUsize;
use std::rc::Rc;
use yew::prelude::*;

/// Navigation requests understood by the [`SlideState`] reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    Next,
    Prev,
    GoTo(usize),
}

impl Reducible for SlideState {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SlideAction::Next => {
                next.next();
            }
            SlideAction::Prev => {
                next.prev();
            }
            SlideAction::GoTo(index) => {
                if let Err(e) = next.go_to(index) {
                    warn!("{}", e);
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

/// Snapshot of a carousel's state plus the callbacks that drive it.
#[derive(Clone)]
pub struct CarouselHandle {
    /// Index of the slide carrying the active marker.
    pub current: usize,
    pub count: usize,
    /// Whether the autoplay interval is armed.
    pub playing: bool,
    /// Controls and indicators emit their [`Command`] here.
    pub on_command: Callback<Command>,
    /// Horizontal coordinate where a touch or mouse press started.
    pub on_pointer_down: Callback<f64>,
    /// Horizontal coordinate where it ended; navigates past the swipe threshold.
    pub on_pointer_up: Callback<f64>,
    pub on_hover_enter: Callback<()>,
    pub on_hover_leave: Callback<()>,
}

/// Custom hook running the carousel state machine inside a yew component.
#[hook]
pub fn use_carousel(count: NonZeroUsize, config: &CarouselConfig) -> CarouselHandle {
    let slides = use_reducer(move || SlideState::new(count));
    let auto_play = config.auto_play;
    let playing = use_state(move || auto_play);
    let hover = use_mut_ref(HoverPause::default);
    let swipe = use_mut_ref(SwipeTracker::default);

    // At most one interval exists: the teardown drops it before a new one is armed.
    {
        let dispatcher = slides.dispatcher();
        use_effect_with(
            (*playing, config.interval_ms),
            move |&(playing, interval_ms)| {
                let interval = playing.then(|| {
                    Interval::new(interval_ms, move || dispatcher.dispatch(SlideAction::Next))
                });
                move || drop(interval)
            },
        );
    }

    let on_command = {
        let slides = slides.clone();
        let playing = playing.clone();
        let hover = hover.clone();
        Callback::from(move |command: Command| match command {
            Command::Prev => slides.dispatch(SlideAction::Prev),
            Command::Next => slides.dispatch(SlideAction::Next),
            Command::GoTo(index) => slides.dispatch(SlideAction::GoTo(index)),
            Command::Pause => {
                hover.borrow_mut().clear();
                playing.set(false);
            }
            Command::Resume => {
                hover.borrow_mut().clear();
                playing.set(true);
            }
        })
    };

    let on_pointer_down = {
        let swipe = swipe.clone();
        Callback::from(move |x: f64| swipe.borrow_mut().begin(x))
    };

    let on_pointer_up = {
        let slides = slides.clone();
        Callback::from(move |x: f64| {
            let direction = swipe.borrow_mut().end(x);
            match direction {
                Some(SwipeDirection::Previous) => slides.dispatch(SlideAction::Prev),
                Some(SwipeDirection::Next) => slides.dispatch(SlideAction::Next),
                None => {}
            }
        })
    };

    let on_hover_enter = {
        let playing = playing.clone();
        let hover = hover.clone();
        Callback::from(move |_: ()| {
            if hover.borrow_mut().enter(*playing) {
                playing.set(false);
            }
        })
    };

    let on_hover_leave = {
        let playing = playing.clone();
        Callback::from(move |_: ()| {
            let resume = hover.borrow_mut().leave();
            if resume {
                playing.set(true);
            }
        })
    };

    CarouselHandle {
        current: slides.current(),
        count: slides.count(),
        playing: *playing,
        on_command,
        on_pointer_down,
        on_pointer_up,
        on_hover_enter,
        on_hover_leave,
    }
}

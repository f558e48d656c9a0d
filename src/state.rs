//! Active-slide state machine.
//!
//! Tracks which slide is current and computes wrap-around navigation. The
//! state knows nothing about the DOM; callers apply the returned
//! [`Transition`] to whatever renders the slides.

use crate::CarouselError;
use std::num::NonZeroUsize;

/// A completed move from one slide to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideState {
    current: usize,
    count: NonZeroUsize,
}

impl SlideState {
    /// A state over `count` slides with slide 0 active.
    pub fn new(count: NonZeroUsize) -> Self {
        Self { current: 0, count }
    }

    /// Like [`SlideState::new`] but for a registry size discovered at runtime.
    pub fn try_new(count: usize, selector: &str) -> Result<Self, CarouselError> {
        NonZeroUsize::new(count)
            .map(Self::new)
            .ok_or_else(|| CarouselError::NoSlides(selector.to_string()))
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Move to `index`, failing without side effects if it is out of range.
    pub fn go_to(&mut self, index: usize) -> Result<Transition, CarouselError> {
        if index >= self.count() {
            return Err(CarouselError::IndexOutOfRange {
                index,
                count: self.count(),
            });
        }
        let transition = Transition {
            from: self.current,
            to: index,
        };
        self.current = index;
        Ok(transition)
    }

    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.count()
    }

    pub fn prev_index(&self) -> usize {
        (self.current + self.count() - 1) % self.count()
    }

    pub fn next(&mut self) -> Transition {
        let to = self.next_index();
        self.jump(to)
    }

    pub fn prev(&mut self) -> Transition {
        let to = self.prev_index();
        self.jump(to)
    }

    // `to` comes from the modular arithmetic above and is always in range.
    fn jump(&mut self, to: usize) -> Transition {
        let transition = Transition {
            from: self.current,
            to,
        };
        self.current = to;
        transition
    }
}

//! Horizontal swipe detection shared by touch and mouse input.

use crate::config::SWIPE_THRESHOLD_PX;

/// Navigation requested by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger or pointer moved right: show the previous slide.
    Previous,
    /// Finger or pointer moved left: show the next slide.
    Next,
}

/// Classify a displacement of `end_x - start_x` pixels.
pub fn classify(displacement: f64, threshold: f64) -> Option<SwipeDirection> {
    if displacement > threshold {
        Some(SwipeDirection::Previous)
    } else if displacement < -threshold {
        Some(SwipeDirection::Next)
    } else {
        None
    }
}

/// Remembers where the current gesture started.
///
/// Touch and mouse streams feed the same tracker, so a second pointer
/// starting mid-gesture overwrites the first one's start point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
    threshold: f64,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            start_x: None,
            threshold,
        }
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the gesture at `x`. An end with no recorded start is ignored.
    pub fn end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        classify(x - start, self.threshold)
    }
}

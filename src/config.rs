//! Carousel configuration: compile-time defaults and the runtime config object.

use crate::CarouselError;
use serde::{Deserialize, Serialize};

// Timing
pub const DEFAULT_INTERVAL_MS: u32 = 2_000;
pub const BOOTSTRAP_INTERVAL_MS: u32 = 3_000;

// Gestures
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

// DOM contract
pub const DEFAULT_ACTIVE_CLASS: &str = "active";
pub const SLIDE_TAG: &str = "img";
pub const CONTROLS_ID: &str = "controls";
pub const INDICATORS_ID: &str = "indicators";

/// Where the control and indicator containers are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlsPlacement {
    /// Appended to `document.body`, after everything else on the page.
    #[default]
    Body,
    /// Appended inside the carousel's own container.
    Container,
}

/// Options accepted by `new Carousel(selector, config)`.
///
/// Every field is optional on the JavaScript side; missing keys fall back to
/// the defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    #[serde(rename = "interval")]
    pub interval_ms: u32,
    pub show_indicators: bool,
    pub auto_play: bool,
    pub controls_placement: ControlsPlacement,
    pub active_class: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            show_indicators: true,
            auto_play: true,
            controls_placement: ControlsPlacement::default(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
        }
    }
}

impl CarouselConfig {
    /// Parse a JSON config string, e.g. from a `data-` attribute.
    pub fn from_json(input: &str) -> Result<Self, CarouselError> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| CarouselError::InvalidConfig(e.to_string()))?;
        config.validate()
    }

    /// Reject values the timer or the DOM cannot work with.
    pub fn validate(self) -> Result<Self, CarouselError> {
        if self.interval_ms == 0 {
            return Err(CarouselError::InvalidInterval(self.interval_ms));
        }
        if self.active_class.trim().is_empty() || self.active_class.contains(char::is_whitespace) {
            return Err(CarouselError::InvalidConfig(format!(
                "active class must be a single non-empty class name, got {:?}",
                self.active_class
            )));
        }
        Ok(self)
    }
}

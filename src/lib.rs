//! Image carousel widget for the browser.
//!
//! The navigation core ([`state`], [`gesture`], [`autoplay`], [`carousel`]) is
//! plain Rust and runs anywhere. Two front ends sit on top of it:
//! - [`dom`] attaches to existing page markup and is exported to JavaScript as
//!   `Carousel`;
//! - [`components`] provides the yew `CarouselView` component.

use log::warn;
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod autoplay;
pub mod carousel;
pub mod components;
pub mod config;
pub mod dom;
pub mod gesture;
pub mod hooks;
pub mod state;

#[cfg(test)]
mod testing;

pub use carousel::{Carousel, Command, SlideView};
pub use config::{CarouselConfig, ControlsPlacement};
pub use state::SlideState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The selector matched no element.
    ContainerNotFound(String),
    /// The container holds no slide images.
    NoSlides(String),
    IndexOutOfRange {
        index: usize,
        count: usize,
    },
    InvalidInterval(u32),
    InvalidConfig(String),
    /// A browser API call failed.
    Dom(String),
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::ContainerNotFound(selector) => {
                write!(f, "No element matches carousel selector '{}'", selector)
            }
            CarouselError::NoSlides(selector) => {
                write!(f, "Carousel '{}' contains no slides", selector)
            }
            CarouselError::IndexOutOfRange { index, count } => write!(
                f,
                "Slide index {} is out of range (carousel has {} slides)",
                index, count
            ),
            CarouselError::InvalidInterval(ms) => {
                write!(f, "Autoplay interval must be positive, got {}ms", ms)
            }
            CarouselError::InvalidConfig(msg) => write!(f, "Invalid carousel config: {}", msg),
            CarouselError::Dom(msg) => write!(f, "DOM operation failed: {}", msg),
        }
    }
}

impl std::error::Error for CarouselError {}

impl From<CarouselError> for JsValue {
    fn from(err: CarouselError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// JavaScript entry point: `new Carousel('#slider', { interval: 3000 })`.
///
/// Nothing is instantiated on load; the hosting page constructs carousels
/// explicitly.
#[wasm_bindgen(js_name = Carousel)]
pub struct WebCarousel {
    mounted: Option<dom::MountedCarousel>,
}

impl WebCarousel {
    fn carousel(&self) -> Result<&dom::DomCarousel, JsValue> {
        self.mounted
            .as_ref()
            .map(|m| m.carousel())
            .ok_or_else(|| js_sys::Error::new("Carousel has been destroyed").into())
    }
}

#[wasm_bindgen(js_class = Carousel)]
impl WebCarousel {
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str, config: JsValue) -> Result<WebCarousel, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            CarouselConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| CarouselError::InvalidConfig(e.to_string()))?
        };
        let mounted = dom::mount(selector, config)?;
        Ok(WebCarousel {
            mounted: Some(mounted),
        })
    }

    #[wasm_bindgen(js_name = goToSlide)]
    pub fn go_to_slide(&self, index: usize) -> Result<(), JsValue> {
        Ok(self.carousel()?.go_to_slide(index)?)
    }

    #[wasm_bindgen(js_name = nextSlide)]
    pub fn next_slide(&self) -> Result<(), JsValue> {
        self.carousel()?.next_slide();
        Ok(())
    }

    #[wasm_bindgen(js_name = prevSlide)]
    pub fn prev_slide(&self) -> Result<(), JsValue> {
        self.carousel()?.prev_slide();
        Ok(())
    }

    #[wasm_bindgen(js_name = startAutoScroll)]
    pub fn start_auto_scroll(&self) -> Result<(), JsValue> {
        self.carousel()?.start_auto_scroll();
        Ok(())
    }

    #[wasm_bindgen(js_name = stopAutoScroll)]
    pub fn stop_auto_scroll(&self) -> Result<(), JsValue> {
        self.carousel()?.stop_auto_scroll();
        Ok(())
    }

    /// Route a command by control label (`"next"`, `"prev"`, `"pause"`,
    /// `"resume"`), for controls the host page builds itself.
    pub fn dispatch(&self, label: &str) -> Result<bool, JsValue> {
        Ok(self.carousel()?.dispatch_label(label)?)
    }

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> Result<usize, JsValue> {
        Ok(self.carousel()?.current_index())
    }

    #[wasm_bindgen(js_name = slideCount)]
    pub fn slide_count(&self) -> Result<usize, JsValue> {
        Ok(self.carousel()?.slide_count())
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> Result<bool, JsValue> {
        Ok(self.carousel()?.is_playing())
    }

    /// Remove listeners, timer and generated controls. Idempotent.
    pub fn destroy(&mut self) {
        if self.mounted.take().is_none() {
            warn!("destroy called on a carousel that is already destroyed");
        }
    }
}

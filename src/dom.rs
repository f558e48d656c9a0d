//! Imperative DOM binding: attach a carousel to markup that is already on the
//! page, in the spirit of `new Carousel('#slider', { ... })`.

use crate::autoplay::IntervalScheduler;
use crate::carousel::{Carousel, Command, SlideView};
use crate::config::{CarouselConfig, ControlsPlacement, CONTROLS_ID, INDICATORS_ID, SLIDE_TAG};
use crate::CarouselError;
use gloo_events::EventListener;
use log::{info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, TouchEvent};

pub type DomCarousel = Carousel<DomSlides, IntervalScheduler>;

fn dom_err(err: JsValue) -> CarouselError {
    CarouselError::Dom(format!("{:?}", err))
}

/// The `<img>` elements found under the container, toggled via a CSS class.
#[derive(Debug)]
pub struct DomSlides {
    slides: Vec<Element>,
    active_class: String,
}

impl DomSlides {
    /// Collect the container's images once; later changes are not tracked.
    pub fn discover(container: &Element, active_class: &str) -> Self {
        let collection = container.get_elements_by_tag_name(SLIDE_TAG);
        let slides = (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect();
        Self {
            slides,
            active_class: active_class.to_string(),
        }
    }
}

impl SlideView for DomSlides {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_active(&mut self, index: usize, active: bool) {
        let Some(slide) = self.slides.get(index) else {
            warn!("no slide at index {}", index);
            return;
        };
        let classes = slide.class_list();
        let result = if active {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
        if let Err(e) = result {
            warn!("failed to toggle class on slide {}: {:?}", index, e);
        }
    }
}

/// A carousel bound to the page together with everything it added to it.
///
/// Dropping it removes the listeners, cancels autoplay and detaches the
/// controls and indicators it created.
pub struct MountedCarousel {
    carousel: DomCarousel,
    created: Vec<Element>,
    listeners: Vec<EventListener>,
}

impl std::fmt::Debug for MountedCarousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedCarousel")
            .field("carousel", &self.carousel)
            .field("created", &self.created.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl MountedCarousel {
    pub fn carousel(&self) -> &DomCarousel {
        &self.carousel
    }
}

impl Drop for MountedCarousel {
    fn drop(&mut self) {
        self.carousel.stop_auto_scroll();
        self.listeners.clear();
        for element in self.created.drain(..) {
            element.remove();
        }
    }
}

fn run(carousel: &DomCarousel, command: Command) {
    if let Err(e) = carousel.dispatch(command) {
        warn!("{:?} failed: {}", command, e);
    }
}

/// Find the container, mark the first slide, build the control surface and
/// register every input listener.
pub fn mount(selector: &str, config: CarouselConfig) -> Result<MountedCarousel, CarouselError> {
    let config = config.validate()?;
    let document = gloo_utils::document();
    let container = document
        .query_selector(selector)
        .map_err(dom_err)?
        .ok_or_else(|| CarouselError::ContainerNotFound(selector.to_string()))?;

    let slides = DomSlides::discover(&container, &config.active_class);
    let carousel = Carousel::new(slides, IntervalScheduler, &config, selector)?;

    let parent: Element = match config.controls_placement {
        ControlsPlacement::Body => gloo_utils::body().into(),
        ControlsPlacement::Container => container.clone(),
    };

    let mut mounted = MountedCarousel {
        carousel,
        created: Vec::new(),
        listeners: Vec::new(),
    };

    let controls = build_controls(&document, &mut mounted)?;
    parent.append_child(&controls).map_err(dom_err)?;
    mounted.created.push(controls);

    if config.show_indicators {
        let indicators = build_indicators(&document, &mut mounted)?;
        parent.append_child(&indicators).map_err(dom_err)?;
        mounted.created.push(indicators);
    }

    add_swipe_support(&container, &mut mounted);
    add_hover_pause(&container, &mut mounted);

    info!("mounted carousel on {}", selector);
    Ok(mounted)
}

fn build_controls(document: &Document, mounted: &mut MountedCarousel) -> Result<Element, CarouselError> {
    let controls = document.create_element("div").map_err(dom_err)?;
    controls.set_id(CONTROLS_ID);

    for command in Command::CONTROLS {
        let button = document.create_element("button").map_err(dom_err)?;
        button.set_text_content(command.label());
        let carousel = mounted.carousel.clone();
        mounted.listeners.push(EventListener::new(&button, "click", move |_| {
            run(&carousel, command)
        }));
        controls.append_child(&button).map_err(dom_err)?;
    }
    Ok(controls)
}

fn build_indicators(document: &Document, mounted: &mut MountedCarousel) -> Result<Element, CarouselError> {
    let indicators = document.create_element("div").map_err(dom_err)?;
    indicators.set_id(INDICATORS_ID);

    for i in 0..mounted.carousel.slide_count() {
        let indicator = document.create_element("span").map_err(dom_err)?;
        indicator.set_text_content(Some(&(i + 1).to_string()));
        if let Some(html) = indicator.dyn_ref::<HtmlElement>() {
            html.style().set_property("cursor", "pointer").map_err(dom_err)?;
        }
        let carousel = mounted.carousel.clone();
        mounted.listeners.push(EventListener::new(&indicator, "click", move |_| {
            run(&carousel, Command::GoTo(i))
        }));
        indicators.append_child(&indicator).map_err(dom_err)?;
    }
    Ok(indicators)
}

fn mouse_x(event: &Event) -> Option<f64> {
    event.dyn_ref::<MouseEvent>().map(|e| f64::from(e.client_x()))
}

fn first_touch_x(event: &Event, changed: bool) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let list = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    list.get(0).map(|t| f64::from(t.client_x()))
}

fn add_swipe_support(container: &Element, mounted: &mut MountedCarousel) {
    let c = mounted.carousel.clone();
    mounted.listeners.push(EventListener::new(container, "touchstart", move |e| {
        if let Some(x) = first_touch_x(e, false) {
            c.pointer_down(x);
        }
    }));
    let c = mounted.carousel.clone();
    mounted.listeners.push(EventListener::new(container, "touchend", move |e| {
        if let Some(x) = first_touch_x(e, true) {
            c.pointer_up(x);
        }
    }));
    let c = mounted.carousel.clone();
    mounted.listeners.push(EventListener::new(container, "mousedown", move |e| {
        if let Some(x) = mouse_x(e) {
            c.pointer_down(x);
        }
    }));
    let c = mounted.carousel.clone();
    mounted.listeners.push(EventListener::new(container, "mouseup", move |e| {
        if let Some(x) = mouse_x(e) {
            c.pointer_up(x);
        }
    }));
}

fn add_hover_pause(container: &Element, mounted: &mut MountedCarousel) {
    let c = mounted.carousel.clone();
    mounted
        .listeners
        .push(EventListener::new(container, "mouseenter", move |_| c.hover_enter()));
    let c = mounted.carousel.clone();
    mounted
        .listeners
        .push(EventListener::new(container, "mouseleave", move |_| c.hover_leave()));
}

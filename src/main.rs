//! Demo page bootstrap: renders a carousel over the bundled sample images.
//! The carousel is instantiated here, by the page, not by the library.

use image_carousel::components::CarouselView;
use image_carousel::config::BOOTSTRAP_INTERVAL_MS;
use image_carousel::CarouselConfig;
use yew::prelude::*;

const DEMO_SLIDES: [&str; 4] = [
    "images/slide-1.jpg",
    "images/slide-2.jpg",
    "images/slide-3.jpg",
    "images/slide-4.jpg",
];

#[function_component]
pub fn App() -> Html {
    let slides: Vec<AttrValue> = DEMO_SLIDES.iter().map(|&s| AttrValue::from(s)).collect();
    let config = CarouselConfig {
        interval_ms: BOOTSTRAP_INTERVAL_MS,
        show_indicators: true,
        auto_play: true,
        ..CarouselConfig::default()
    };

    html! {
        <div id="slider">
            <CarouselView {slides} alt="Slide" {config} />
        </div>
    }
}

/// Entry point: installs the panic hook and renders the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

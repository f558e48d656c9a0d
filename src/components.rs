//! Yew view components for the carousel.
//!
//! `CarouselView` is the entry point; the control and indicator components are
//! stateless and render purely from props.

use crate::carousel::Command;
use crate::config::CarouselConfig;
use crate::hooks::use_carousel;
use crate::CarouselError;
use log::warn;
use std::num::NonZeroUsize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CarouselViewProps {
    /// Image URLs, in display order.
    pub slides: Vec<AttrValue>,
    /// Alt text prefix; each image gets "<alt> <position>".
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub config: CarouselConfig,
}

/// What `CarouselView` can render for a given slide list and config.
#[derive(Debug, PartialEq)]
enum StagePlan {
    Invalid(CarouselError),
    Empty,
    Ready {
        count: NonZeroUsize,
        config: CarouselConfig,
    },
}

fn plan_stage(slide_count: usize, config: &CarouselConfig) -> StagePlan {
    let config = match config.clone().validate() {
        Ok(config) => config,
        Err(e) => return StagePlan::Invalid(e),
    };
    match NonZeroUsize::new(slide_count) {
        Some(count) => StagePlan::Ready { count, config },
        None => StagePlan::Empty,
    }
}

#[function_component(CarouselView)]
pub fn carousel_view(props: &CarouselViewProps) -> Html {
    let (count, config) = match plan_stage(props.slides.len(), &props.config) {
        StagePlan::Invalid(e) => {
            warn!("{}", e);
            return html! {
                <div class="carousel">
                    <p class="carousel-error-message">{ e.to_string() }</p>
                </div>
            };
        }
        StagePlan::Empty => {
            return html! {
                <div class="carousel">
                    <p class="no-slides-message">{ "No slides to display" }</p>
                </div>
            };
        }
        StagePlan::Ready { count, config } => (count, config),
    };

    // Keyed on the slide count so the stage remounts with fresh state when it changes.
    html! {
        <CarouselStage
            key={count.to_string()}
            {count}
            slides={props.slides.clone()}
            alt={props.alt.clone()}
            {config}
        />
    }
}

#[derive(Properties, PartialEq)]
struct CarouselStageProps {
    count: NonZeroUsize,
    slides: Vec<AttrValue>,
    alt: AttrValue,
    config: CarouselConfig,
}

#[function_component(CarouselStage)]
fn carousel_stage(props: &CarouselStageProps) -> Html {
    let carousel = use_carousel(props.count, &props.config);

    let onmousedown = {
        let cb = carousel.on_pointer_down.clone();
        Callback::from(move |e: MouseEvent| cb.emit(f64::from(e.client_x())))
    };
    let onmouseup = {
        let cb = carousel.on_pointer_up.clone();
        Callback::from(move |e: MouseEvent| cb.emit(f64::from(e.client_x())))
    };
    let ontouchstart = {
        let cb = carousel.on_pointer_down.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                cb.emit(f64::from(touch.client_x()));
            }
        })
    };
    let ontouchend = {
        let cb = carousel.on_pointer_up.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                cb.emit(f64::from(touch.client_x()));
            }
        })
    };
    let onmouseenter = carousel.on_hover_enter.reform(|_: MouseEvent| ());
    let onmouseleave = carousel.on_hover_leave.reform(|_: MouseEvent| ());

    html! {
        <div class="carousel-wrapper">
            <div class="carousel"
                {onmousedown}
                {onmouseup}
                {ontouchstart}
                {ontouchend}
                {onmouseenter}
                {onmouseleave}
            >
                { props.slides.iter().enumerate().map(|(i, src)| {
                    render_slide(src, &props.alt, i, i == carousel.current, &props.config.active_class)
                }).collect::<Html>() }
            </div>
            <Controls playing={carousel.playing} on_command={carousel.on_command.clone()} />
            if props.config.show_indicators {
                <Indicators
                    count={carousel.count}
                    current={carousel.current}
                    active_class={props.config.active_class.clone()}
                    on_command={carousel.on_command.clone()}
                />
            }
        </div>
    }
}

fn render_slide(src: &AttrValue, alt: &AttrValue, index: usize, active: bool, active_class: &str) -> Html {
    html! {
        <img
            src={src.clone()}
            alt={format!("{} {}", alt, index + 1).trim().to_string()}
            class={classes!("slide", active.then(|| active_class.to_string()))}
        />
    }
}

/// Prev/next/pause/resume buttons.
#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub playing: bool,
    pub on_command: Callback<Command>,
}

#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    html! {
        <div class={classes!("controls", props.playing.then_some("playing"))}>
            { Command::CONTROLS.iter().filter_map(|&command| {
                let label = command.label()?;
                let onclick = props.on_command.reform(move |_: MouseEvent| command);
                Some(html! { <button {onclick}>{ label }</button> })
            }).collect::<Html>() }
        </div>
    }
}

/// One numbered, clickable marker per slide.
#[derive(Properties, PartialEq)]
pub struct IndicatorsProps {
    pub count: usize,
    pub current: usize,
    pub active_class: String,
    pub on_command: Callback<Command>,
}

#[function_component(Indicators)]
pub fn indicators(props: &IndicatorsProps) -> Html {
    html! {
        <div class="indicators">
            { (0..props.count).map(|i| {
                let onclick = props.on_command.reform(move |_: MouseEvent| Command::GoTo(i));
                let active = (i == props.current).then(|| props.active_class.clone());
                html! {
                    <span class={classes!("indicator", active)} style="cursor: pointer" {onclick}>
                        { i + 1 }
                    </span>
                }
            }).collect::<Html>() }
        </div>
    }
}

use crate::carousel::slide_style;
use crate::components::ViewportClass;
use crate::settings::PageSettings;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::carousel::{CarouselState, Debounce};
#[cfg(target_arch = "wasm32")]
use crate::components::dom::{element_by_id, listen, set_style};
#[cfg(target_arch = "wasm32")]
use crate::decor::viewport_width;
#[cfg(target_arch = "wasm32")]
use crate::error::PageError;
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::{debug, error};
#[cfg(target_arch = "wasm32")]
use gloo_render::{request_animation_frame, AnimationFrame};
#[cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlElement};

pub const SLIDESHOW_TRACK_ID: &str = "slideshowContainer";
pub const SLIDE_CLASS: &str = "slideshow-image";

/// Endless strip of the configured images, rendered twice.
#[component]
pub fn Slideshow() -> Element {
    let settings = use_context::<PageSettings>();
    let viewport = use_context::<ViewportClass>();
    let series = settings.series_len();
    let slide_style = slide_style(series);

    #[cfg(target_arch = "wasm32")]
    {
        let started = use_hook(|| Rc::new(Cell::new(false)));
        let speed = settings.carousel_speed(viewport.mobile);
        let debounce_ms = settings.resize_debounce_ms;
        use_effect(move || {
            if started.replace(true) {
                return;
            }
            if let Err(err) = CarouselDriver::start(series, speed, debounce_ms) {
                error!("carousel disabled: {err}");
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = viewport;

    rsx! {
        div { class: "slideshow",
            div { id: SLIDESHOW_TRACK_ID, class: "slideshow-track",
                for (index, path) in settings.images.iter().chain(settings.images.iter()).enumerate() {
                    img {
                        key: "{index}",
                        class: SLIDE_CLASS,
                        style: "{slide_style}",
                        src: "{path}",
                        alt: "",
                        "data-copy": if index < series { "first" } else { "second" },
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
struct CarouselDriver {
    track: HtmlElement,
    state: RefCell<CarouselState>,
    speed: f64,
    frame: RefCell<Option<AnimationFrame>>,
}

#[cfg(target_arch = "wasm32")]
impl CarouselDriver {
    fn start(series: usize, speed: f64, debounce_ms: u32) -> Result<Rc<Self>, PageError> {
        let track: HtmlElement = element_by_id(SLIDESHOW_TRACK_ID)?;
        let win = window().ok_or_else(|| PageError::MissingElement("window".to_string()))?;
        let driver = Rc::new(Self {
            track,
            state: RefCell::new(CarouselState::new(viewport_width(), series)),
            speed,
            frame: RefCell::new(None),
        });

        let debounce = Rc::new(Debounce::default());
        {
            let driver = Rc::clone(&driver);
            listen(&win, "resize", move |_| {
                let ticket = debounce.trigger();
                let debounce = Rc::clone(&debounce);
                let driver = Rc::clone(&driver);
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(debounce_ms).await;
                    if !debounce.is_latest(ticket) {
                        return;
                    }
                    let width = viewport_width();
                    driver.state.borrow_mut().resize(width);
                    debug!("carousel rescaled for {width}px viewport");
                });
            });
        }

        driver.step();
        Ok(driver)
    }

    /// Advance one frame and schedule the next. Runs for the page lifetime.
    fn step(self: &Rc<Self>) {
        let transform = {
            let mut state = self.state.borrow_mut();
            state.advance(self.speed);
            state.transform()
        };
        set_style(&self.track, "transform", &transform);

        let driver = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            driver.frame.borrow_mut().take();
            driver.step();
        });
        *self.frame.borrow_mut() = Some(handle);
    }
}

// Peripheral browser effects: image preloading, fade-in on first
// visibility, and scroll parallax.
use crate::components::dom::{document, listen, listen_once, set_style};
use crate::components::{PARTICLES_ID, SECTION_CLASS, SLIDE_CLASS};
use crate::decor::{
    alternate_path, parallax_transform, refers_to, PreloadOutcome, PreloadTally,
    FADE_IN_ROOT_MARGIN, FADE_IN_THRESHOLD,
};
use crate::error::PageError;
use crate::settings::PageSettings;
use dioxus::logger::tracing::{debug, error, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};

pub fn install_page_effects(settings: &PageSettings) {
    preload_images(&settings.images, settings.high_priority_images);
    if let Err(err) = observe_fade_in(&format!(".{SECTION_CLASS}")) {
        warn!("fade-in disabled: {err}");
    }
    if let Err(err) = install_parallax(settings.parallax_factor) {
        warn!("parallax disabled: {err}");
    }
}

/// Start loading every image at once. Failures retry once from the
/// alternate path; nothing waits on the result.
pub fn preload_images(paths: &[String], high_priority: usize) {
    let tally = Rc::new(RefCell::new(PreloadTally::new(paths.len())));
    for (index, path) in paths.iter().enumerate() {
        if let Err(err) = preload_one(index, path.clone(), index < high_priority, &tally) {
            warn!("could not preload {path}: {err}");
            record(&tally, PreloadOutcome::Failed);
        }
    }
}

fn record(tally: &Rc<RefCell<PreloadTally>>, outcome: PreloadOutcome) {
    let mut tally = tally.borrow_mut();
    if tally.record(outcome) {
        info!(
            "all {} slideshow images processed ({} loaded, {} from alternate path, {} failed)",
            tally.total, tally.loaded, tally.alternate, tally.failed
        );
    }
}

fn preload_one(
    index: usize,
    path: String,
    high_priority: bool,
    tally: &Rc<RefCell<PreloadTally>>,
) -> Result<(), PageError> {
    let img = HtmlImageElement::new()?;
    if high_priority {
        img.set_attribute("fetchpriority", "high")?;
    }

    {
        let tally = Rc::clone(tally);
        listen_once(&img, "load", move || {
            debug!("image {} loaded", index + 1);
            record(&tally, PreloadOutcome::Loaded);
        });
    }
    {
        let tally = Rc::clone(tally);
        let path = path.clone();
        listen_once(&img, "error", move || {
            if alternate_path(&path) == path {
                error!("image {} unavailable at {path}", index + 1);
                record(&tally, PreloadOutcome::Failed);
                return;
            }
            warn!("image {} failed, trying alternate path", index + 1);
            if let Err(err) = retry_alternate(index, path, Rc::clone(&tally)) {
                error!("image {} unavailable: {err}", index + 1);
                record(&tally, PreloadOutcome::Failed);
            }
        });
    }

    img.set_src(&path);
    Ok(())
}

fn retry_alternate(
    index: usize,
    path: String,
    tally: Rc<RefCell<PreloadTally>>,
) -> Result<(), PageError> {
    let alternate = alternate_path(&path).to_string();
    let img = HtmlImageElement::new()?;
    {
        let tally = Rc::clone(&tally);
        let alternate = alternate.clone();
        listen_once(&img, "load", move || {
            repoint_slides(&path, &alternate);
            record(&tally, PreloadOutcome::LoadedAlternate);
        });
    }
    {
        let alternate = alternate.clone();
        listen_once(&img, "error", move || {
            error!("image {} unavailable at {alternate}", index + 1);
            record(&tally, PreloadOutcome::Failed);
        });
    }
    img.set_src(&alternate);
    Ok(())
}

/// Point every rendered slide showing `path` at `alternate`.
fn repoint_slides(path: &str, alternate: &str) {
    let Ok(slides) = document().and_then(|doc| {
        doc.query_selector_all(&format!(".{SLIDE_CLASS}"))
            .map_err(PageError::from)
    }) else {
        return;
    };
    for i in 0..slides.length() {
        let Some(slide) = slides
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
        else {
            continue;
        };
        let current = slide.src();
        if refers_to(&current, path) || refers_to(&current, alternate) {
            slide.set_src(alternate);
        }
    }
}

/// Reveal each matching element the first time it becomes visible.
pub fn observe_fade_in(selector: &str) -> Result<(), PageError> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    set_style(element, "opacity", "1");
                    set_style(element, "transform", "translateY(0)");
                }
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));
    options.set_root_margin(FADE_IN_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let nodes = document()?.query_selector_all(selector)?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
    Ok(())
}

/// Drift the particle layer with the scroll position.
pub fn install_parallax(factor: f64) -> Result<(), PageError> {
    let win = window().ok_or_else(|| PageError::MissingElement("window".to_string()))?;
    let doc = document()?;
    listen(&win, "scroll", move |_| {
        let scroll_y = window()
            .and_then(|win| win.page_y_offset().ok())
            .unwrap_or(0.0);
        if let Some(layer) = doc
            .get_element_by_id(PARTICLES_ID)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        {
            set_style(&layer, "transform", &parallax_transform(scroll_y, factor));
        }
    });
    Ok(())
}

// Listener and element helpers shared by the browser bindings.
use crate::error::PageError;
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Event, EventTarget, HtmlElement};

pub(crate) fn document() -> Result<Document, PageError> {
    window()
        .and_then(|win| win.document())
        .ok_or_else(|| PageError::MissingElement("document".to_string()))
}

pub(crate) fn element_by_id<T: JsCast>(id: &str) -> Result<T, PageError> {
    document()?
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or_else(|| PageError::MissingElement(format!("#{id}")))
}

/// Keep a passive listener for the lifetime of the page.
pub(crate) fn listen<F>(target: &EventTarget, event: &'static str, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new(target, event, callback).forget();
}

/// Like [`listen`], but the callback may call `prevent_default`.
pub(crate) fn listen_active<F>(target: &EventTarget, event: &'static str, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event,
        EventListenerOptions::enable_prevent_default(),
        callback,
    )
    .forget();
}

/// Subscribe for the first delivery only; the browser drops the listener
/// after it fires.
pub(crate) fn listen_once<F>(target: &EventTarget, event: &'static str, callback: F)
where
    F: FnOnce() + 'static,
{
    EventListener::once(target, event, move |_| callback()).forget();
}

pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

/// Best-effort text for a rejected promise or thrown value.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

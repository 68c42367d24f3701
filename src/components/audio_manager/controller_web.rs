// Web binding: attach the playback controller to the <audio> element,
// the toggle button, and the page lifecycle.
use super::media_element::HtmlAudioMedia;
use super::{AUDIO_CONTROL_ID, AUDIO_ELEMENT_ID};
use crate::components::dom::{document, element_by_id, listen, listen_active, listen_once};
use crate::error::{PageError, PlaybackError};
use crate::playback::{Glyph, Interaction, MediaEvent, MediaResource, PlaybackController};
use crate::settings::PageSettings;
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{window, HtmlAudioElement, HtmlElement};

type WebController = PlaybackController<HtmlAudioMedia, Signal<Glyph>>;
type PendingPlay = <HtmlAudioMedia as MediaResource>::PlayFuture;

/// Controller shared between browser callbacks.
#[derive(Clone)]
pub struct SharedController {
    inner: Rc<RefCell<WebController>>,
    runtime: Rc<Runtime>,
}

impl SharedController {
    /// Run one controller operation and settle its play request, if any,
    /// once the platform decides.
    pub fn dispatch<F>(&self, action: F)
    where
        F: FnOnce(&mut WebController) -> Option<PendingPlay>,
    {
        let _guard = RuntimeGuard::new(self.runtime.clone());
        let pending = match self.inner.try_borrow_mut() {
            Ok(mut controller) => action(&mut *controller),
            Err(_) => {
                warn!("audio controller busy, dropping event");
                return;
            }
        };

        if let Some(pending) = pending {
            let shared = self.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome: Result<(), PlaybackError> = pending.await;
                let _guard = RuntimeGuard::new(shared.runtime.clone());
                match shared.inner.try_borrow_mut() {
                    Ok(mut controller) => controller.settle_play(outcome),
                    Err(_) => warn!("audio controller busy, dropping play outcome"),
                }
            });
        }
    }
}

/// Wire the controller into the page and start acquisition.
pub fn bind_background_audio(
    settings: &PageSettings,
    glyph: Signal<Glyph>,
) -> Result<SharedController, PageError> {
    let audio: HtmlAudioElement = element_by_id(AUDIO_ELEMENT_ID)?;
    let toggle: HtmlElement = element_by_id(AUDIO_CONTROL_ID)?;
    let document = document()?;
    let win = window().ok_or_else(|| PageError::MissingElement("window".to_string()))?;

    let controller = PlaybackController::new(
        HtmlAudioMedia::new(audio.clone()),
        glyph,
        settings.volume,
        settings.audio_fallbacks.clone(),
    );
    let shared = SharedController {
        inner: Rc::new(RefCell::new(controller)),
        runtime: Runtime::current(),
    };

    for event in MediaEvent::ALL {
        let shared = shared.clone();
        listen(&audio, event.dom_name(), move |_| {
            shared.dispatch(|controller| controller.on_media_event(event));
        });
    }

    {
        let shared = shared.clone();
        listen_active(&toggle, "click", move |event| {
            // Keep the document-level interaction triggers for real
            // first interactions.
            event.prevent_default();
            event.stop_propagation();
            shared.dispatch(|controller| controller.toggle());
        });
    }

    for interaction in Interaction::ALL {
        let shared = shared.clone();
        listen_once(&document, interaction.dom_name(), move || {
            shared.dispatch(|controller| controller.on_interaction(interaction));
        });
    }

    // Errors that happened before the listeners were attached.
    if audio.error().is_some() {
        shared.dispatch(|controller| controller.on_media_event(MediaEvent::Error));
    }

    // The page is mounted: the document is ready.
    shared.dispatch(|controller| controller.initialize_once());

    let delay_ms = settings.load_retry_delay_ms;
    let retry = {
        let shared = shared.clone();
        move || {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                debug!("window load retry");
                shared.dispatch(|controller| controller.initialize_once());
            });
        }
    };
    if document.ready_state() == "complete" {
        retry();
    } else {
        listen_once(&win, "load", retry);
    }

    Ok(shared)
}

//! Audio Manager - owns the background <audio> element and its indicator.
//! Playback decisions live in `crate::playback`; this module only renders
//! the elements and binds them in the browser.

use crate::playback::{Glyph, StatusIndicator};
use crate::settings::PageSettings;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
mod controller_web;
#[cfg(target_arch = "wasm32")]
mod media_element;

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::{error, info};
#[cfg(target_arch = "wasm32")]
use std::cell::Cell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

pub const AUDIO_ELEMENT_ID: &str = "backgroundMusic";
pub const AUDIO_CONTROL_ID: &str = "audioControl";

impl StatusIndicator for Signal<Glyph> {
    fn show(&mut self, glyph: Glyph) {
        self.set(glyph);
    }
}

#[component]
pub fn AudioController() -> Element {
    let settings = use_context::<PageSettings>();
    let glyph = use_signal(Glyph::default);

    #[cfg(target_arch = "wasm32")]
    {
        let bound = use_hook(|| Rc::new(Cell::new(false)));
        let settings = settings.clone();
        use_effect(move || {
            if bound.replace(true) {
                return;
            }
            match controller_web::bind_background_audio(&settings, glyph) {
                Ok(_) => info!("background audio bound"),
                Err(err) => error!("background audio disabled: {err}"),
            }
        });
    }

    rsx! {
        audio {
            id: AUDIO_ELEMENT_ID,
            src: "{settings.audio_src}",
            preload: "auto",
            autoplay: true,
        }
        AudioToggle { glyph }
    }
}

/// The single manual control. Clicks are bound natively so they never
/// count as a first page interaction.
#[component]
fn AudioToggle(glyph: Signal<Glyph>) -> Element {
    rsx! {
        button {
            id: AUDIO_CONTROL_ID,
            r#type: "button",
            class: "audio-control",
            span { id: "audioIcon", "{glyph().symbol()}" }
        }
    }
}

// `MediaResource` backed by the page's <audio> element.
use crate::components::dom::js_error_message;
use crate::error::PlaybackError;
use crate::playback::{MediaErrorDetail, MediaResource};
use dioxus::logger::tracing::warn;
use futures_util::future::{self, FutureExt, LocalBoxFuture};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

pub struct HtmlAudioMedia {
    audio: HtmlAudioElement,
}

impl HtmlAudioMedia {
    pub fn new(audio: HtmlAudioElement) -> Self {
        Self { audio }
    }
}

impl MediaResource for HtmlAudioMedia {
    type PlayFuture = LocalBoxFuture<'static, Result<(), PlaybackError>>;

    fn set_muted(&self, muted: bool) {
        self.audio.set_muted(muted);
    }

    fn set_volume(&self, volume: f64) {
        self.audio.set_volume(volume);
    }

    fn request_play(&self) -> Option<Self::PlayFuture> {
        match self.audio.play() {
            Ok(promise) => Some(
                async move {
                    JsFuture::from(promise)
                        .await
                        .map(|_| ())
                        .map_err(|err| PlaybackError::Rejected(js_error_message(&err)))
                }
                .boxed_local(),
            ),
            Err(err) => Some(
                future::ready(Err(PlaybackError::Rejected(js_error_message(&err)))).boxed_local(),
            ),
        }
    }

    fn pause(&self) {
        if let Err(err) = self.audio.pause() {
            warn!("pause failed: {}", js_error_message(&err));
        }
    }

    fn is_paused(&self) -> bool {
        self.audio.paused()
    }

    fn ready_state(&self) -> u16 {
        self.audio.ready_state()
    }

    fn source(&self) -> Option<String> {
        self.audio.get_attribute("src")
    }

    fn reload_from(&self, src: &str) {
        self.audio.set_src(src);
        self.audio.load();
    }

    fn error_detail(&self) -> Option<MediaErrorDetail> {
        self.audio.error().map(|err| MediaErrorDetail {
            code: err.code(),
            message: err.message(),
        })
    }
}

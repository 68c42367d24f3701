use crate::error::PlaybackError;
use crate::playback::state::{Glyph, Readiness};
use std::future::Future;

/// `HTMLMediaElement.HAVE_CURRENT_DATA`.
pub const HAVE_CURRENT_DATA: u16 = 2;

/// The audio resource the controller drives.
pub trait MediaResource {
    /// Settles when the platform accepts or rejects a play request.
    type PlayFuture: Future<Output = Result<(), PlaybackError>> + 'static;

    fn set_muted(&self, muted: bool);
    fn set_volume(&self, volume: f64);
    /// `None` means the platform gave no pending decision; treat as accepted.
    fn request_play(&self) -> Option<Self::PlayFuture>;
    fn pause(&self);
    fn is_paused(&self) -> bool;
    fn ready_state(&self) -> u16;
    /// The source as assigned, not as resolved by the platform.
    fn source(&self) -> Option<String>;
    /// Assign a new source and start loading it.
    fn reload_from(&self, src: &str);
    fn error_detail(&self) -> Option<MediaErrorDetail>;
}

/// Where the play/pause glyph is shown.
pub trait StatusIndicator {
    fn show(&mut self, glyph: Glyph);
}

/// Resource notifications the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaEvent {
    Play,
    Pause,
    Error,
    LoadStart,
    Ready(Readiness),
}

impl MediaEvent {
    pub const ALL: [MediaEvent; 7] = [
        MediaEvent::Play,
        MediaEvent::Pause,
        MediaEvent::Error,
        MediaEvent::LoadStart,
        MediaEvent::Ready(Readiness::LoadedData),
        MediaEvent::Ready(Readiness::CanPlay),
        MediaEvent::Ready(Readiness::CanPlayThrough),
    ];

    /// DOM event type name.
    pub fn dom_name(self) -> &'static str {
        match self {
            MediaEvent::Play => "play",
            MediaEvent::Pause => "pause",
            MediaEvent::Error => "error",
            MediaEvent::LoadStart => "loadstart",
            MediaEvent::Ready(Readiness::LoadedData) => "loadeddata",
            MediaEvent::Ready(Readiness::CanPlay) => "canplay",
            MediaEvent::Ready(Readiness::CanPlayThrough) => "canplaythrough",
        }
    }
}

/// User interactions that may unlock autoplay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Click,
    TouchStart,
    Scroll,
    KeyDown,
}

impl Interaction {
    pub const ALL: [Interaction; 4] = [
        Interaction::Click,
        Interaction::TouchStart,
        Interaction::Scroll,
        Interaction::KeyDown,
    ];

    pub fn dom_name(self) -> &'static str {
        match self {
            Interaction::Click => "click",
            Interaction::TouchStart => "touchstart",
            Interaction::Scroll => "scroll",
            Interaction::KeyDown => "keydown",
        }
    }
}

/// `MediaError` as reported by the resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaErrorDetail {
    pub code: u16,
    pub message: String,
}

impl MediaErrorDetail {
    pub fn describe(&self) -> &'static str {
        match self.code {
            1 => "loading was aborted",
            2 => "network error while loading audio",
            3 => "audio could not be decoded",
            4 => "audio source is not supported",
            _ => "unable to load audio source",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_have_descriptions() {
        let detail = |code| MediaErrorDetail {
            code,
            message: String::new(),
        };
        assert_eq!(detail(2).describe(), "network error while loading audio");
        assert_eq!(detail(4).describe(), "audio source is not supported");
        assert_eq!(detail(0).describe(), "unable to load audio source");
    }

    #[test]
    fn dom_names_are_distinct() {
        let mut names: Vec<_> = MediaEvent::ALL.iter().map(|e| e.dom_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MediaEvent::ALL.len());
    }
}

use crate::error::PlaybackError;
use crate::playback::fallback::SourceFallback;
use crate::playback::media::{
    Interaction, MediaEvent, MediaResource, StatusIndicator, HAVE_CURRENT_DATA,
};
use crate::playback::one_shot::OneShot;
use crate::playback::state::{PlaybackInput, PlaybackState, Readiness};
use dioxus::logger::tracing::{debug, error, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReadyAction {
    AttemptPlay,
}

/// Acquires background playback despite autoplay restrictions.
///
/// Every entry point that may request playback returns the pending play
/// decision, if any. The caller drives it and hands the outcome back to
/// [`PlaybackController::settle_play`].
pub struct PlaybackController<M: MediaResource, I: StatusIndicator> {
    media: M,
    indicator: I,
    state: PlaybackState,
    volume: f64,
    fallback: SourceFallback,
    ready_listeners: OneShot<Readiness, ReadyAction>,
    /// Set when a pause is requested or reported after the latest play
    /// request. A rejection of that request is then the pause aborting it.
    paused_since_request: bool,
}

impl<M: MediaResource, I: StatusIndicator> PlaybackController<M, I> {
    pub fn new(media: M, indicator: I, volume: f64, fallbacks: Vec<String>) -> Self {
        media.set_volume(volume);
        media.set_muted(false);
        Self {
            media,
            indicator,
            state: PlaybackState::default(),
            volume,
            fallback: SourceFallback::new(fallbacks),
            ready_listeners: OneShot::default(),
            paused_since_request: false,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[cfg(test)]
    pub fn media(&self) -> &M {
        &self.media
    }

    #[cfg(test)]
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    fn apply(&mut self, input: PlaybackInput) {
        let glyph = self.state.apply(input);
        self.indicator.show(glyph);
    }

    pub fn attempt_play(&mut self) -> Option<M::PlayFuture> {
        self.media.set_muted(false);
        self.media.set_volume(self.volume);
        self.paused_since_request = false;
        match self.media.request_play() {
            Some(pending) => Some(pending),
            None => {
                self.settle_play(Ok(()));
                None
            }
        }
    }

    /// Record the platform's decision on an earlier play request.
    pub fn settle_play(&mut self, outcome: Result<(), PlaybackError>) {
        match outcome {
            Ok(()) => {
                info!("background audio playing");
                self.apply(PlaybackInput::PlayAccepted);
            }
            Err(err) if self.paused_since_request && self.media.is_paused() => {
                debug!("play request aborted by pause: {err}");
                self.apply(PlaybackInput::PlayAborted);
            }
            Err(err) => {
                warn!("autoplay blocked, waiting for user interaction: {err}");
                self.apply(PlaybackInput::PlayRejected);
            }
        }
    }

    pub fn attempt_pause(&mut self) {
        self.media.pause();
        self.paused_since_request = true;
        self.apply(PlaybackInput::PauseRequested);
    }

    /// Manual control. Reads the resource's own paused flag and ignores the
    /// initialization guard.
    pub fn toggle(&mut self) -> Option<M::PlayFuture> {
        if self.media.is_paused() {
            self.attempt_play()
        } else {
            self.attempt_pause();
            None
        }
    }

    /// Start acquisition. Only the first call does anything.
    pub fn initialize_once(&mut self) -> Option<M::PlayFuture> {
        if !self.state.begin_initialization() {
            return None;
        }
        if self.media.ready_state() >= HAVE_CURRENT_DATA {
            self.attempt_play()
        } else {
            debug!("audio not ready yet, waiting for canplay");
            self.ready_listeners
                .subscribe(Readiness::CanPlay, ReadyAction::AttemptPlay);
            None
        }
    }

    pub fn on_interaction(&mut self, interaction: Interaction) -> Option<M::PlayFuture> {
        debug!("first {} received", interaction.dom_name());
        if !self.state.initialized() {
            return self.initialize_once();
        }
        if self.media.is_paused() {
            self.attempt_play()
        } else {
            None
        }
    }

    pub fn on_media_event(&mut self, event: MediaEvent) -> Option<M::PlayFuture> {
        match event {
            MediaEvent::Play => {
                self.apply(PlaybackInput::MediaPlaying);
                None
            }
            MediaEvent::Pause => {
                self.paused_since_request = true;
                self.apply(PlaybackInput::MediaPaused);
                None
            }
            MediaEvent::LoadStart => {
                debug!("loading audio");
                self.apply(PlaybackInput::LoadStarted);
                None
            }
            MediaEvent::Error => {
                self.switch_source();
                None
            }
            MediaEvent::Ready(readiness) => {
                debug!("audio {readiness:?}");
                let fired = self.ready_listeners.deliver(&readiness);
                if fired.contains(&ReadyAction::AttemptPlay)
                    || self
                        .state
                        .should_autostart(readiness, self.media.is_paused())
                {
                    self.attempt_play()
                } else {
                    None
                }
            }
        }
    }

    fn switch_source(&mut self) {
        let failed = self.media.source();
        match self.media.error_detail() {
            Some(detail) => error!(
                "audio error on {:?}: {} (code {}, {})",
                failed,
                detail.describe(),
                detail.code,
                detail.message
            ),
            None => error!("audio error on {failed:?}"),
        }

        match self.fallback.next_after_failure(failed.as_deref()) {
            Ok(next) => {
                info!("trying audio source {next}");
                self.media.reload_from(&next);
            }
            Err(err) => error!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::media::MediaErrorDetail;
    use crate::playback::state::Glyph;
    use futures_util::FutureExt;
    use std::cell::{Cell, RefCell};
    use std::future::{ready, Ready};

    #[derive(Default)]
    struct FakeMedia {
        paused: Cell<bool>,
        muted: Cell<bool>,
        volume: Cell<f64>,
        ready_state: Cell<u16>,
        src: RefCell<Option<String>>,
        play_requests: Cell<usize>,
        pauses: Cell<usize>,
        reloads: Cell<usize>,
        reject_play: Cell<bool>,
        no_promise: Cell<bool>,
        /// Play requests start playing and are rejected later, the way a
        /// pause aborts a pending request.
        abort_play: Cell<bool>,
    }

    impl FakeMedia {
        fn new(src: &str) -> Self {
            let media = FakeMedia::default();
            media.paused.set(true);
            media.muted.set(true);
            *media.src.borrow_mut() = Some(src.to_string());
            media
        }
    }

    impl MediaResource for FakeMedia {
        type PlayFuture = Ready<Result<(), PlaybackError>>;

        fn set_muted(&self, muted: bool) {
            self.muted.set(muted);
        }

        fn set_volume(&self, volume: f64) {
            self.volume.set(volume);
        }

        fn request_play(&self) -> Option<Self::PlayFuture> {
            self.play_requests.set(self.play_requests.get() + 1);
            if self.no_promise.get() {
                return None;
            }
            if self.abort_play.get() {
                self.paused.set(false);
                Some(ready(Err(PlaybackError::Rejected("AbortError".to_string()))))
            } else if self.reject_play.get() {
                Some(ready(Err(PlaybackError::Rejected(
                    "NotAllowedError".to_string(),
                ))))
            } else {
                self.paused.set(false);
                Some(ready(Ok(())))
            }
        }

        fn pause(&self) {
            self.pauses.set(self.pauses.get() + 1);
            self.paused.set(true);
        }

        fn is_paused(&self) -> bool {
            self.paused.get()
        }

        fn ready_state(&self) -> u16 {
            self.ready_state.get()
        }

        fn source(&self) -> Option<String> {
            self.src.borrow().clone()
        }

        fn reload_from(&self, src: &str) {
            self.reloads.set(self.reloads.get() + 1);
            *self.src.borrow_mut() = Some(src.to_string());
        }

        fn error_detail(&self) -> Option<MediaErrorDetail> {
            Some(MediaErrorDetail {
                code: 4,
                message: "MEDIA_ELEMENT_ERROR: Format error".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingIndicator {
        shown: Vec<Glyph>,
    }

    impl StatusIndicator for RecordingIndicator {
        fn show(&mut self, glyph: Glyph) {
            self.shown.push(glyph);
        }
    }

    impl RecordingIndicator {
        fn last(&self) -> Option<Glyph> {
            self.shown.last().copied()
        }
    }

    const CANDIDATES: [&str; 4] = [
        "./Daft Punk - Touch (Official Audio).mp3",
        "Daft Punk - Touch (Official Audio).mp3",
        "./Daft Punk - Touch.mp3",
        "Daft Punk - Touch.mp3",
    ];

    type Controller = PlaybackController<FakeMedia, RecordingIndicator>;

    fn controller(ready_state: u16) -> Controller {
        let media = FakeMedia::new("audio/touch.mp3");
        media.ready_state.set(ready_state);
        PlaybackController::new(
            media,
            RecordingIndicator::default(),
            0.7,
            CANDIDATES.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn drive(controller: &mut Controller, pending: Option<Ready<Result<(), PlaybackError>>>) {
        if let Some(pending) = pending {
            let outcome = pending
                .now_or_never()
                .expect("fake play futures are ready");
            controller.settle_play(outcome);
        }
    }

    #[test]
    fn construction_unmutes_and_sets_volume() {
        let controller = controller(0);
        assert!(!controller.media().muted.get());
        assert_eq!(controller.media().volume.get(), 0.7);
        assert_eq!(controller.state(), PlaybackState::default());
    }

    #[test]
    fn ready_resource_plays_on_initialization() {
        let mut controller = controller(HAVE_CURRENT_DATA);
        let pending = controller.initialize_once();
        assert!(pending.is_some());
        drive(&mut controller, pending);

        assert!(controller.state().is_playing());
        assert_eq!(controller.indicator().last(), Some(Glyph::SoundOn));
        assert_eq!(controller.media().play_requests.get(), 1);
    }

    #[test]
    fn repeated_initialization_requests_play_once() {
        let mut controller = controller(HAVE_CURRENT_DATA);
        controller.media().reject_play.set(true);
        for _ in 0..5 {
            let pending = controller.initialize_once();
            drive(&mut controller, pending);
        }
        assert_eq!(controller.media().play_requests.get(), 1);
    }

    #[test]
    fn unready_resource_waits_for_a_single_canplay() {
        let mut controller = controller(0);
        assert!(controller.initialize_once().is_none());
        assert!(controller.initialize_once().is_none());
        assert_eq!(controller.media().play_requests.get(), 0);

        let pending = controller.on_media_event(MediaEvent::Ready(Readiness::LoadedData));
        assert!(pending.is_none());

        controller.media().reject_play.set(true);
        let pending = controller.on_media_event(MediaEvent::Ready(Readiness::CanPlay));
        drive(&mut controller, pending);
        assert_eq!(controller.media().play_requests.get(), 1);

        let pending = controller.on_media_event(MediaEvent::Ready(Readiness::CanPlay));
        assert!(pending.is_none());
        assert_eq!(controller.media().play_requests.get(), 1);
    }

    #[test]
    fn readiness_autostarts_before_initialization() {
        let mut controller = controller(0);
        let pending = controller.on_media_event(MediaEvent::Ready(Readiness::LoadedData));
        drive(&mut controller, pending);
        assert!(controller.state().is_playing());

        // Already playing: canplay does not request again.
        let pending = controller.on_media_event(MediaEvent::Ready(Readiness::CanPlay));
        assert!(pending.is_none());
        assert_eq!(controller.media().play_requests.get(), 1);
    }

    #[test]
    fn rejected_autoplay_shows_sound_on_but_is_not_playing() {
        let mut controller = controller(HAVE_CURRENT_DATA);
        controller.media().reject_play.set(true);
        let pending = controller.initialize_once();
        drive(&mut controller, pending);

        assert!(!controller.state().is_playing());
        assert_eq!(controller.indicator().last(), Some(Glyph::SoundOn));
    }

    #[test]
    fn interaction_retries_after_rejection() {
        let mut controller = controller(HAVE_CURRENT_DATA);
        controller.media().reject_play.set(true);
        let pending = controller.initialize_once();
        drive(&mut controller, pending);

        controller.media().reject_play.set(false);
        let pending = controller.on_interaction(Interaction::Click);
        drive(&mut controller, pending);

        assert!(controller.state().is_playing());
        assert_eq!(controller.media().play_requests.get(), 2);

        // Playing now, so later interactions are ignored.
        assert!(controller.on_interaction(Interaction::Scroll).is_none());
        assert_eq!(controller.media().play_requests.get(), 2);
    }

    #[test]
    fn first_interaction_initializes() {
        let mut controller = controller(HAVE_CURRENT_DATA);
        let pending = controller.on_interaction(Interaction::KeyDown);
        drive(&mut controller, pending);
        assert!(controller.state().initialized());
        assert!(controller.state().is_playing());

        assert!(controller.initialize_once().is_none());
        assert_eq!(controller.media().play_requests.get(), 1);
    }

    #[test]
    fn interaction_before_readiness_waits_for_canplay() {
        let mut controller = controller(HAVE_CURRENT_DATA - 1);
        assert!(controller.on_interaction(Interaction::TouchStart).is_none());
        assert!(controller.state().initialized());
        assert_eq!(controller.media().play_requests.get(), 0);

        let pending = controller.on_media_event(MediaEvent::Ready(Readiness::CanPlay));
        assert!(pending.is_some());
        drive(&mut controller, pending);
        assert_eq!(controller.media().play_requests.get(), 1);
        assert!(controller.state().is_playing());
    }

    #[test]
    fn pause_during_pending_play_keeps_sound_off() {
        let mut controller = controller(HAVE_CURRENT_DATA);
        controller.media().abort_play.set(true);
        let pending = controller.toggle();
        assert!(pending.is_some());

        controller.attempt_pause();
        controller.on_media_event(MediaEvent::Pause);
        drive(&mut controller, pending);

        assert!(controller.media().is_paused());
        assert!(!controller.state().is_playing());
        assert_eq!(controller.indicator().last(), Some(Glyph::SoundOff));
    }

    #[test]
    fn rejection_after_new_request_stays_optimistic() {
        let mut controller = controller(HAVE_CURRENT_DATA);
        controller.attempt_pause();
        controller.media().reject_play.set(true);
        let pending = controller.toggle();
        drive(&mut controller, pending);
        assert_eq!(controller.indicator().last(), Some(Glyph::SoundOn));
    }

    #[test]
    fn toggle_bypasses_initialization_guard() {
        let mut controller = controller(HAVE_CURRENT_DATA);
        let pending = controller.initialize_once();
        drive(&mut controller, pending);

        assert!(controller.toggle().is_none());
        assert!(!controller.state().is_playing());
        assert_eq!(controller.indicator().last(), Some(Glyph::SoundOff));
        assert_eq!(controller.media().pauses.get(), 1);

        let pending = controller.toggle();
        drive(&mut controller, pending);
        assert!(controller.state().is_playing());
        assert_eq!(controller.media().play_requests.get(), 2);
    }

    #[test]
    fn toggle_reads_resource_not_cached_flag() {
        let mut controller = controller(HAVE_CURRENT_DATA);
        // Playing outside the controller's knowledge.
        controller.media().paused.set(false);
        assert!(!controller.state().is_playing());

        controller.toggle();
        assert_eq!(controller.media().pauses.get(), 1);
        assert_eq!(controller.media().play_requests.get(), 0);
    }

    #[test]
    fn missing_promise_counts_as_accepted() {
        let mut controller = controller(HAVE_CURRENT_DATA);
        controller.media().no_promise.set(true);
        assert!(controller.initialize_once().is_none());
        assert!(controller.state().is_playing());
        assert_eq!(controller.indicator().last(), Some(Glyph::SoundOn));
    }

    #[test]
    fn media_notifications_drive_indicator() {
        let mut controller = controller(0);
        controller.on_media_event(MediaEvent::LoadStart);
        assert_eq!(controller.indicator().last(), Some(Glyph::Loading));
        controller.on_media_event(MediaEvent::Play);
        assert_eq!(controller.indicator().last(), Some(Glyph::SoundOn));
        assert!(controller.state().is_playing());
        controller.on_media_event(MediaEvent::Pause);
        assert_eq!(controller.indicator().last(), Some(Glyph::SoundOff));
        assert!(!controller.state().is_playing());
    }

    #[test]
    fn load_errors_walk_candidates_then_stop() {
        let mut controller = controller(0);
        for expected in CANDIDATES {
            controller.on_media_event(MediaEvent::Error);
            assert_eq!(controller.media().source().as_deref(), Some(expected));
        }
        assert_eq!(controller.media().reloads.get(), 4);

        controller.on_media_event(MediaEvent::Error);
        assert_eq!(controller.media().reloads.get(), 4);
        assert_eq!(controller.media().source().as_deref(), Some(CANDIDATES[3]));
    }
}

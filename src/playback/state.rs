//! Pure playback state transitions.
//!
//! Nothing here touches the audio resource. The controller feeds named
//! inputs in and pushes the returned glyph to the indicator.

/// Indicator contents. Always a projection of the latest notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Glyph {
    Loading,
    SoundOn,
    #[default]
    SoundOff,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Loading => "⏳",
            Glyph::SoundOn => "🔊",
            Glyph::SoundOff => "🔇",
        }
    }
}

/// Inputs that change [`PlaybackState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackInput {
    /// The platform accepted a play request.
    PlayAccepted,
    /// The platform rejected a play request (autoplay policy).
    PlayRejected,
    /// A pause cut a pending play request short.
    PlayAborted,
    /// A pause was requested on the resource.
    PauseRequested,
    /// The resource reported `play`.
    MediaPlaying,
    /// The resource reported `pause`.
    MediaPaused,
    /// The resource reported `loadstart`.
    LoadStarted,
}

/// Readiness notifications, in the order a resource usually emits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Readiness {
    LoadedData,
    CanPlay,
    CanPlayThrough,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    is_playing: bool,
    initialized: bool,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// Flip the idempotence guard. Returns `true` only the first time.
    pub fn begin_initialization(&mut self) -> bool {
        !std::mem::replace(&mut self.initialized, true)
    }

    /// Apply one input and return the glyph the indicator should show.
    ///
    /// A rejected play still shows [`Glyph::SoundOn`]: a retry is expected
    /// on the next interaction, so the indicator shows intent.
    pub fn apply(&mut self, input: PlaybackInput) -> Glyph {
        match input {
            PlaybackInput::PlayAccepted | PlaybackInput::MediaPlaying => {
                self.is_playing = true;
                Glyph::SoundOn
            }
            PlaybackInput::PlayRejected => {
                self.is_playing = false;
                Glyph::SoundOn
            }
            PlaybackInput::PlayAborted
            | PlaybackInput::PauseRequested
            | PlaybackInput::MediaPaused => {
                self.is_playing = false;
                Glyph::SoundOff
            }
            PlaybackInput::LoadStarted => Glyph::Loading,
        }
    }

    /// Whether a readiness notification should start playback on its own.
    ///
    /// Only applies before initialization; afterwards the one-shot
    /// subscription registered by initialization owns that job.
    pub fn should_autostart(&self, readiness: Readiness, paused: bool) -> bool {
        if self.initialized {
            return false;
        }
        match readiness {
            Readiness::LoadedData => true,
            Readiness::CanPlay | Readiness::CanPlayThrough => paused,
        }
    }
}

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::{debug, warn};
#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "backdrop.page_settings";

/// A block of text rendered below the slideshow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    #[serde(default)]
    pub body: String,
    /// Rendered with the `.date-info` highlight when present.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub link: Option<SectionLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLink {
    pub label: String,
    pub href: String,
}

/// Page settings, overridable from local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub title: String,
    pub volume: f64,
    pub audio_src: String,
    pub audio_fallbacks: Vec<String>,
    pub images: Vec<String>,
    pub high_priority_images: usize,
    pub speed: f64,
    pub mobile_speed: f64,
    pub resize_debounce_ms: u32,
    pub load_retry_delay_ms: u32,
    pub particles: usize,
    pub mobile_particles: usize,
    pub mobile_breakpoint: f64,
    pub parallax_factor: f64,
    pub sections: Vec<Section>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "Touch".to_string(),
            volume: 0.7,
            audio_src: "audio/touch.mp3".to_string(),
            audio_fallbacks: vec![
                "./Daft Punk - Touch (Official Audio) ft. Paul Williams [0Gkhol2Q1og].mp3"
                    .to_string(),
                "Daft Punk - Touch (Official Audio) ft. Paul Williams [0Gkhol2Q1og].mp3"
                    .to_string(),
                "./Daft Punk - Touch.mp3".to_string(),
                "Daft Punk - Touch.mp3".to_string(),
            ],
            images: vec![
                "./imagen1.jpg".to_string(),
                "./imagen2.jpg".to_string(),
                "./imagen3.jpg".to_string(),
                "./imagen4.jpg".to_string(),
                "./imagen5.jpeg".to_string(),
                "./imagen6.jpeg".to_string(),
                "./imagen7.jpeg".to_string(),
                "./imagen8.jpeg".to_string(),
                "./imagen9.jpeg".to_string(),
            ],
            high_priority_images: 5,
            speed: 1.5,
            mobile_speed: 1.2,
            resize_debounce_ms: 250,
            load_retry_delay_ms: 500,
            particles: 30,
            mobile_particles: 15,
            mobile_breakpoint: 768.0,
            parallax_factor: 0.3,
            sections: vec![
                Section {
                    heading: "Welcome".to_string(),
                    body: "Turn the sound on and stay a while.".to_string(),
                    date: None,
                    link: None,
                },
                Section {
                    heading: "When".to_string(),
                    body: String::new(),
                    date: Some("14 February, 21:00".to_string()),
                    link: None,
                },
                Section {
                    heading: "Where".to_string(),
                    body: "Follow the map to find us.".to_string(),
                    date: None,
                    link: Some(SectionLink {
                        label: "Open map".to_string(),
                        href: "https://www.openstreetmap.org".to_string(),
                    }),
                },
            ],
        }
    }
}

impl PageSettings {
    /// Parse stored settings. Absent fields keep their defaults.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        let settings: PageSettings = serde_json::from_str(raw)?;
        settings.validated()
    }

    /// Normalize what can be normalized and reject what cannot.
    pub fn validated(mut self) -> Result<Self, SettingsError> {
        if !self.volume.is_finite() {
            return Err(SettingsError::Invalid(format!("volume {}", self.volume)));
        }
        self.volume = self.volume.clamp(0.0, 1.0);
        if self.images.is_empty() {
            return Err(SettingsError::Invalid(
                "at least one slideshow image is required".to_string(),
            ));
        }
        if self.audio_src.trim().is_empty() {
            return Err(SettingsError::Invalid("audio_src is empty".to_string()));
        }
        if !(self.speed.is_finite() && self.speed > 0.0)
            || !(self.mobile_speed.is_finite() && self.mobile_speed > 0.0)
        {
            return Err(SettingsError::Invalid(format!(
                "carousel speeds must be positive (got {} / {})",
                self.speed, self.mobile_speed
            )));
        }
        self.high_priority_images = self.high_priority_images.min(self.images.len());
        Ok(self)
    }

    /// Images in one logical carousel series.
    pub fn series_len(&self) -> usize {
        self.images.len()
    }

    pub fn carousel_speed(&self, mobile: bool) -> f64 {
        if mobile {
            self.mobile_speed
        } else {
            self.speed
        }
    }

    pub fn particle_count(&self, mobile: bool) -> usize {
        if mobile {
            self.mobile_particles
        } else {
            self.particles
        }
    }
}

/// Load settings from local storage, falling back to defaults.
#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> PageSettings {
    let raw = match LocalStorage::raw().get_item(SETTINGS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no stored page settings, using defaults");
            return PageSettings::default();
        }
        Err(err) => {
            warn!(
                "{}",
                SettingsError::Storage(format!("{err:?}"))
            );
            return PageSettings::default();
        }
    };

    match PageSettings::from_json(&raw) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("ignoring stored page settings: {err}");
            PageSettings::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> PageSettings {
    PageSettings::default()
}

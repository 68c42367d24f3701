//! Error types for the page.
//!
//! Nothing here is fatal: every error ends up logged at the component
//! boundary and the affected feature stays inactive.

use thiserror::Error;

/// Failures of the background audio acquisition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// The platform declined the play request (autoplay policy).
    #[error("playback rejected: {0}")]
    Rejected(String),

    /// Every candidate source has been tried and failed to load.
    #[error("no playable audio source left after {tried} attempts")]
    SourcesExhausted { tried: usize },
}

/// Failures while wiring browser elements and listeners.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    /// A required DOM node is absent or has an unexpected type.
    #[error("missing page element: {0}")]
    MissingElement(String),

    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PageError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

/// Failures while loading [`crate::settings::PageSettings`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// Stored settings could not be read or parsed.
    #[error("settings storage error: {0}")]
    Storage(String),

    /// Settings parsed but describe an unusable page.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Storage(err.to_string())
    }
}

//! The components module contains every piece of the page.

mod app;
mod audio_manager;
mod particles;
mod sections;
mod slideshow;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod page_effects;

pub use app::*;
pub use audio_manager::*;
pub use particles::*;
pub use sections::*;
pub use slideshow::*;

//! Decoration helpers around the two core loops: viewport class,
//! particles, image preloading and scroll effects.

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod motion;
mod particles;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod preload;
mod viewport;

pub use motion::*;
pub use particles::*;
pub use preload::*;
pub use viewport::*;

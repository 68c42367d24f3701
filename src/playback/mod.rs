//! Background audio acquisition: pure state, source fallback and the
//! controller that ties them to an audio resource.

mod controller;
mod fallback;
mod media;
mod one_shot;
mod state;

pub use controller::*;
pub use fallback::*;
pub use media::*;
pub use one_shot::*;
pub use state::*;

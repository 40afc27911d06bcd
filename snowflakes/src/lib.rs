//! A self-sustaining falling snow overlay.
//!
//! [`SnowEffect`] owns a small particle arena and is stepped once per display refresh by a host
//! implementing [`Host`], drawing onto anything implementing [`Canvas`].

mod canvas;
pub use canvas::*;

mod color;
pub use color::*;

mod easing;
pub use easing::*;

mod effect;
pub use effect::*;

mod particle;
pub use particle::*;

mod pool;
pub use pool::*;

mod random;
pub use random::*;

mod render;
pub use render::*;

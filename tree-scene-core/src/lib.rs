//! Pure pose-resolution core for the holiday-tree scene.
//!
//! Everything in this crate is a side-effect-free function over `bevy`
//! math types: deterministic anchor generation, the per-frame pose
//! resolver, the exponential pose interpolator, the scene-mode state
//! machine, and the CPU mirror of the snow shader's closed form. The
//! engine crate owns all rendering, input, and asset concerns.

pub mod camera;
pub mod field;
pub mod hash;
pub mod mode;
pub mod motion;
pub mod pose;
pub mod snow;

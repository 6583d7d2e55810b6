use bevy::math::Vec3;

/// Number of snow flakes in the fixed particle set.
pub const SNOW_COUNT: usize = 900;

/// Box the snow field occupies: x/z centred on the origin, y from 0 up.
pub const SNOW_EXTENT: Vec3 = Vec3::new(24.0, 14.0, 24.0);

/// Per-flake fall speed range, world units per second.
pub const SNOW_FALL_SPEED_MIN: f32 = 0.35;
pub const SNOW_FALL_SPEED_MAX: f32 = 1.1;

/// Sinusoidal wind displacement applied to falling flakes.
pub const SNOW_WIND_AMPLITUDE: f32 = 0.45;
pub const SNOW_WIND_FREQUENCY: f32 = 0.35;

/// Height of the opacity fade band at the top and bottom of the extent,
/// hiding the wrap point.
pub const SNOW_FADE_BAND: f32 = 1.5;

/// Per-flake quad size range.
pub const SNOW_FLAKE_SIZE_MIN: f32 = 0.035;
pub const SNOW_FLAKE_SIZE_MAX: f32 = 0.09;

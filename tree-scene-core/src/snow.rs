//! CPU mirror of the snow shader's closed form.
//!
//! A flake's state is a pure function of its static attributes and the
//! elapsed time: fall with wrap-around recycling, sinusoidal wind
//! keyed by the pre-wrap falling coordinate (so the sway never jumps
//! at the wrap), and an opacity fade near both vertical bounds to hide
//! the wrap point. The WGSL in the engine crate evaluates the same
//! form per vertex.

use bevy::math::Vec3;

use constants::snow::{SNOW_EXTENT, SNOW_FADE_BAND, SNOW_WIND_AMPLITUDE, SNOW_WIND_FREQUENCY};

use crate::field::SnowFlake;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnowParams {
    pub vertical_extent: f32,
    pub wind_amplitude: f32,
    pub wind_frequency: f32,
    pub fade_band: f32,
}

impl Default for SnowParams {
    fn default() -> Self {
        Self {
            vertical_extent: SNOW_EXTENT.y,
            wind_amplitude: SNOW_WIND_AMPLITUDE,
            wind_frequency: SNOW_WIND_FREQUENCY,
            fade_band: SNOW_FADE_BAND,
        }
    }
}

pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Evaluate one flake at `time`. Returns its wrapped position and
/// opacity.
pub fn flake_state(flake: &SnowFlake, time: f32, params: &SnowParams) -> (Vec3, f32) {
    // Pre-wrap falling coordinate; continuous for all time.
    let fall = flake.position.y - flake.speed * time;
    let wrapped = fall.rem_euclid(params.vertical_extent);

    let sway_x = (time * params.wind_frequency + flake.phase + fall * 0.35).sin()
        * params.wind_amplitude;
    let sway_z = (time * params.wind_frequency * 0.8 + flake.phase * 1.7 + fall * 0.21).cos()
        * params.wind_amplitude
        * 0.6;

    let fade_in = smoothstep(0.0, params.fade_band, wrapped);
    let fade_out = 1.0 - smoothstep(
        params.vertical_extent - params.fade_band,
        params.vertical_extent,
        wrapped,
    );

    (
        Vec3::new(flake.position.x + sway_x, wrapped, flake.position.z + sway_z),
        fade_in * fade_out,
    )
}

//! Frame-rate-independent pose interpolation.
//!
//! The same `(rate * delta).min(1.0)` exponential step everywhere:
//! lerp for position, shortest-arc slerp for rotation, lerp for scale.

use constants::motion::{SMOOTHING_FORMATION, SMOOTHING_TRACKING};

use crate::mode::EffectiveMode;
use crate::pose::Pose;

/// Smoothing rate for the current regime. Camera-locked layouts use
/// the snappy rate so items do not visibly lag the camera; the ambient
/// formation orbit stays languid.
pub fn smoothing_rate(mode: EffectiveMode, detail_active: bool) -> f32 {
    if detail_active || mode == EffectiveMode::Chaos {
        SMOOTHING_TRACKING
    } else {
        SMOOTHING_FORMATION
    }
}

/// Advance `current` toward `target` by one frame of `delta` seconds.
pub fn step_pose(current: &mut Pose, target: &Pose, rate: f32, delta: f32) {
    let t = (rate * delta).min(1.0);
    current.position = current.position.lerp(target.position, t);
    current.rotation = current.rotation.slerp(target.rotation, t);
    current.scale += (target.scale - current.scale) * t;
}

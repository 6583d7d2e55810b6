//! Per-frame target-pose resolution.
//!
//! `resolve` is the heart of the scene: a pure function from the
//! effective mode, one item's immutable layout, and the frame's camera
//! snapshot to a target pose. It never mutates anything, so it can run
//! for every item in a frame in any order.

use bevy::math::{Mat3, Quat, Vec3};
use std::f32::consts::TAU;

use constants::motion::{
    FOCUS_DISTANCE, FOCUS_HEIGHT_FRACTION, HOVER_SCALE_BOOST, RECEDE_DISTANCE, RECEDE_SHRINK,
};
use constants::scatter::{DRIFT_AMPLITUDE, DRIFT_SPEED};

use crate::camera::CameraPose;
use crate::field::ItemLayout;
use crate::hash::{hash_range, hash_signed};
use crate::mode::EffectiveMode;

/// A resolved or live pose. Scale is uniform for every decorative
/// category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

/// Orientation rule a category follows in formation mode. Every
/// category faces the camera in the scatter and recede branches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormationFacing {
    /// Face points outward from the tree axis at the item's height
    /// (polaroids, ornaments).
    Outward,
    /// Upright with a small deterministic per-item tilt (foliage).
    Upright { max_tilt: f32 },
    /// Continuous self-spin about the vertical axis (the star).
    Spin { speed: f32 },
}

/// Per-category resolver inputs that do not vary per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub facing: FormationFacing,
    /// Unscaled mesh height, used to fit the focused item to the
    /// vertical field of view.
    pub intrinsic_height: f32,
    /// Whether the item hangs slightly crooked outside of focus.
    pub crooked: bool,
}

/// Rotation that points the item's +Z face at `target`. Bevy quads
/// face +Z, so this is what "look at the camera" means for a card.
pub fn face_toward(position: Vec3, target: Vec3) -> Quat {
    let to_target = target - position;
    if to_target.length_squared() < 1e-8 {
        return Quat::IDENTITY;
    }
    let plus_z = to_target.normalize();
    let mut right = Vec3::Y.cross(plus_z);
    if right.length_squared() < 1e-8 {
        // Looking straight up or down.
        right = Vec3::X;
    } else {
        right = right.normalize();
    }
    let up = plus_z.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, plus_z))
}

/// Scale that makes a mesh of `intrinsic_height` fill `fraction` of
/// the vertical field of view at `distance`.
pub fn fit_to_fov(fov_y: f32, distance: f32, fraction: f32, intrinsic_height: f32) -> f32 {
    let visible_height = 2.0 * (fov_y * 0.5).tan() * distance;
    visible_height * fraction / intrinsic_height.max(1e-4)
}

fn crook(style: &ItemStyle, item: &ItemLayout) -> Quat {
    if style.crooked {
        Quat::from_rotation_z(item.roll)
    } else {
        Quat::IDENTITY
    }
}

fn drift(item: &ItemLayout, time: f32) -> Vec3 {
    Vec3::new(
        (time * DRIFT_SPEED + item.drift_phase.x).sin(),
        (time * DRIFT_SPEED * 1.31 + item.drift_phase.y).cos(),
        0.0,
    ) * DRIFT_AMPLITUDE
}

fn formation_rotation(item: &ItemLayout, style: &ItemStyle, position: Vec3, time: f32) -> Quat {
    match style.facing {
        FormationFacing::Outward => {
            let radial = Vec3::new(position.x, 0.0, position.z);
            let outward = if radial.length_squared() < 1e-6 {
                position + Vec3::Z
            } else {
                position + radial
            };
            face_toward(position, outward) * crook(style, item)
        }
        FormationFacing::Upright { max_tilt } => {
            let yaw = hash_range(item.id, 10, 0.0, TAU);
            let tilt = hash_signed(item.id, 11) * max_tilt;
            Quat::from_rotation_y(yaw) * Quat::from_rotation_x(tilt)
        }
        FormationFacing::Spin { speed } => Quat::from_rotation_y(time * speed),
    }
}

/// Resolve one item's target pose for this frame.
///
/// Branches in priority order: focused item pinned in front of the
/// camera, unfocused items receding while something is focused,
/// camera-relative scatter, and the default spiral formation orbit.
/// Positions are world-space; decorative roots are spawned parentless,
/// so the parent frame is the identity.
pub fn resolve(
    mode: EffectiveMode,
    is_selected: bool,
    detail_active: bool,
    hovered: bool,
    item: &ItemLayout,
    style: &ItemStyle,
    camera: &CameraPose,
    time: f32,
    rotation_speed: f32,
) -> Pose {
    if is_selected && detail_active {
        let position = camera.position + camera.forward() * FOCUS_DISTANCE;
        return Pose {
            position,
            rotation: face_toward(position, camera.position),
            scale: fit_to_fov(
                camera.fov_y,
                FOCUS_DISTANCE,
                FOCUS_HEIGHT_FRACTION,
                style.intrinsic_height,
            ),
        };
    }

    if detail_active {
        let position = camera.position
            + camera.forward() * RECEDE_DISTANCE
            + camera.right() * item.recede.x
            + camera.up() * item.recede.y;
        return Pose {
            position,
            rotation: face_toward(position, camera.position) * crook(style, item),
            scale: item.base_size * RECEDE_SHRINK,
        };
    }

    if mode == EffectiveMode::Chaos {
        let position = camera.camera_to_world(item.scatter) + drift(item, time);
        let scale = if hovered {
            item.base_size * HOVER_SCALE_BOOST
        } else {
            item.base_size
        };
        return Pose {
            position,
            rotation: face_toward(position, camera.position) * crook(style, item),
            scale,
        };
    }

    // Formation: the whole layout orbits the tree axis rigidly.
    let position = Quat::from_rotation_y(time * rotation_speed) * item.primary;
    let scale = if hovered {
        item.base_size * HOVER_SCALE_BOOST
    } else {
        item.base_size
    };
    Pose {
        position,
        rotation: formation_rotation(item, style, position, time),
        scale,
    }
}

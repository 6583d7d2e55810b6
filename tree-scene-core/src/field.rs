//! Deterministic anchor-field generation.
//!
//! Each decorative item gets three immutable anchors at creation time:
//! a formation position on or inside the tree cone, a camera-space
//! scatter offset, and a recede offset used while another item is
//! focused. Anchors are keyed purely by item index, so regenerating a
//! field with the same count and parameters reproduces it exactly.

use bevy::math::{Vec2, Vec3};
use std::f32::consts::TAU;

use constants::scatter::{
    KEEP_CLEAR_RADIUS, RECEDE_LATERAL_SPREAD, RECEDE_VERTICAL_SPREAD,
    SCATTER_ASSUMED_ASPECT, SCATTER_ASSUMED_FOV, SCATTER_DISTANCE_MAX, SCATTER_DISTANCE_MIN,
    SCATTER_FRAME_INSET,
};
use constants::snow::{SNOW_FALL_SPEED_MAX, SNOW_FALL_SPEED_MIN, SNOW_FLAKE_SIZE_MAX,
    SNOW_FLAKE_SIZE_MIN};
use constants::tree::{
    SPIRAL_ANGULAR_STEP, SPIRAL_Y_MAX, SPIRAL_Y_MIN, STAR_APEX_Y, TREE_BASE_RADIUS, TREE_HEIGHT,
    TREE_RADIUS_OFFSET,
};
use constants::motion::POLAROID_MAX_ROLL;

use crate::hash::{hash_id, hash_range, hash_signed};

/// Spatial parameters of the tree silhouette the formation anchors
/// follow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    pub max_radius: f32,
    pub tree_height: f32,
    pub radius_offset: f32,
    pub y_min: f32,
    pub y_max: f32,
    pub angular_step: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            max_radius: TREE_BASE_RADIUS,
            tree_height: TREE_HEIGHT,
            radius_offset: TREE_RADIUS_OFFSET,
            y_min: SPIRAL_Y_MIN,
            y_max: SPIRAL_Y_MAX,
            angular_step: SPIRAL_ANGULAR_STEP,
        }
    }
}

impl FieldParams {
    /// Degenerate extents yield an empty field instead of failing the
    /// whole scene.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.max_radius.is_finite()
            && self.tree_height.is_finite()
            && self.radius_offset.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
            && self.angular_step.is_finite();
        !finite || self.max_radius <= 0.0 || self.tree_height <= 0.0 || self.y_max < self.y_min
    }

    /// Cone radius at a given height, linearly shrinking toward the
    /// apex to match the foliage silhouette.
    pub fn radius_at(&self, y: f32) -> f32 {
        self.max_radius * (1.0 - y / self.tree_height).max(0.0) + self.radius_offset
    }
}

/// How a category places its formation anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// On the cone surface along a fixed-step spiral (polaroids,
    /// ornaments).
    Spiral,
    /// Inside the cone volume with a bottom-heavy distribution
    /// (foliage tufts).
    ConeFill,
    /// At the apex (the star).
    Apex,
}

/// Immutable per-item layout record produced at field-generation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    pub id: u32,
    /// Formation anchor, world space around the tree axis.
    pub primary: Vec3,
    /// Scatter anchor, camera space (-z forward).
    pub scatter: Vec3,
    /// Recede offset along camera right/up while another item is
    /// focused.
    pub recede: Vec2,
    /// Deterministic size jitter around 1.0.
    pub base_size: f32,
    /// Independent sine/cosine phases for the idle drift.
    pub drift_phase: Vec2,
    /// Crooked-hang roll in radians; only some categories apply it.
    pub roll: f32,
}

/// Spiral formation anchor for item `index` of `count`.
pub fn spiral_anchor(index: usize, count: usize, params: &FieldParams) -> Vec3 {
    let fraction = index as f32 / count.max(1) as f32;
    let y = params.y_min + fraction * (params.y_max - params.y_min);
    let radius = params.radius_at(y);
    let theta = index as f32 * params.angular_step;
    Vec3::new(radius * theta.cos(), y, radius * theta.sin())
}

/// Cone-volume formation anchor, bottom-heavy so the silhouette stays
/// dense near the ground where the cone is widest.
pub fn cone_fill_anchor(id: u32, params: &FieldParams) -> Vec3 {
    let height_fraction = 1.0 - hash_id(id, 20).sqrt();
    let y = height_fraction * params.tree_height;
    let radius = params.radius_at(y) * hash_id(id, 21).sqrt();
    let theta = hash_range(id, 22, 0.0, TAU);
    Vec3::new(radius * theta.cos(), y, radius * theta.sin())
}

/// Camera-space scatter anchor. The visible extent at the sampled
/// distance is derived from a fixed assumed field of view, and only
/// the inner fraction of it is used so items stay clear of the frame
/// edges.
pub fn scatter_anchor(id: u32) -> Vec3 {
    let distance = hash_range(id, 1, SCATTER_DISTANCE_MIN, SCATTER_DISTANCE_MAX);
    let half_height = distance * (SCATTER_ASSUMED_FOV * 0.5).tan();
    let half_width = half_height * SCATTER_ASSUMED_ASPECT;
    Vec3::new(
        hash_signed(id, 2) * half_width * SCATTER_FRAME_INSET,
        hash_signed(id, 3) * half_height * SCATTER_FRAME_INSET,
        -distance,
    )
}

/// Recede offset in the camera's right/up plane. Offsets that land
/// inside the keep-clear radius around the camera axis are pushed out
/// to its boundary along their own direction, so background items
/// never sit behind the focused one.
pub fn recede_anchor(id: u32) -> Vec2 {
    let offset = Vec2::new(
        hash_signed(id, 4) * RECEDE_LATERAL_SPREAD,
        hash_signed(id, 5) * RECEDE_VERTICAL_SPREAD,
    );
    let len = offset.length();
    if len >= KEEP_CLEAR_RADIUS {
        return offset;
    }
    if len < 1e-4 {
        // Dead centre: no direction to preserve, pick one.
        return Vec2::new(KEEP_CLEAR_RADIUS, 0.0);
    }
    offset * (KEEP_CLEAR_RADIUS / len)
}

fn item_layout(id: u32, primary: Vec3) -> ItemLayout {
    ItemLayout {
        id,
        primary,
        scatter: scatter_anchor(id),
        recede: recede_anchor(id),
        base_size: hash_range(id, 6, 0.85, 1.15),
        drift_phase: Vec2::new(hash_range(id, 7, 0.0, TAU), hash_range(id, 8, 0.0, TAU)),
        roll: hash_signed(id, 9) * POLAROID_MAX_ROLL,
    }
}

/// Generate the full anchor field for one category. Produces exactly
/// `count` layouts, or none when the extents are degenerate.
pub fn generate_field(count: usize, kind: LayoutKind, params: &FieldParams) -> Vec<ItemLayout> {
    if params.is_degenerate() {
        return Vec::new();
    }
    (0..count)
        .map(|i| {
            let id = i as u32;
            let primary = match kind {
                LayoutKind::Spiral => spiral_anchor(i, count, params),
                LayoutKind::ConeFill => cone_fill_anchor(id, params),
                LayoutKind::Apex => Vec3::new(0.0, STAR_APEX_Y, 0.0),
            };
            item_layout(id, primary)
        })
        .collect()
}

/// Static per-flake attributes of the snow field. Evolution is the
/// closed form in [`crate::snow`]; nothing here changes after
/// generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnowFlake {
    pub position: Vec3,
    pub speed: f32,
    pub phase: f32,
    pub size: f32,
}

/// Random-box-distributed snow flakes: x/z centred on the origin,
/// y in [0, extent.y). Degenerate extents yield an empty field.
pub fn generate_snow_field(count: usize, extent: Vec3) -> Vec<SnowFlake> {
    let finite = extent.x.is_finite() && extent.y.is_finite() && extent.z.is_finite();
    if !finite || extent.x <= 0.0 || extent.y <= 0.0 || extent.z <= 0.0 {
        return Vec::new();
    }
    (0..count)
        .map(|i| {
            let id = i as u32;
            SnowFlake {
                position: Vec3::new(
                    hash_signed(id, 30) * extent.x * 0.5,
                    hash_id(id, 31) * extent.y,
                    hash_signed(id, 32) * extent.z * 0.5,
                ),
                speed: hash_range(id, 33, SNOW_FALL_SPEED_MIN, SNOW_FALL_SPEED_MAX),
                phase: hash_range(id, 34, 0.0, TAU),
                size: hash_range(id, 35, SNOW_FLAKE_SIZE_MIN, SNOW_FLAKE_SIZE_MAX),
            }
        })
        .collect()
}

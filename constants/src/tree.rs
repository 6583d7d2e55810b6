/// Overall height of the tree cone in world units, apex excluded.
pub const TREE_HEIGHT: f32 = 10.0;

/// Cone radius at ground level.
pub const TREE_BASE_RADIUS: f32 = 3.4;

/// Extra radial clearance so spiral items sit just outside the foliage surface.
pub const TREE_RADIUS_OFFSET: f32 = 0.25;

/// Fixed angular step between successive spiral items, in radians.
/// Irrational-like so consecutive items never line up vertically.
pub const SPIRAL_ANGULAR_STEP: f32 = 2.5;

/// Vertical range the spiral covers.
pub const SPIRAL_Y_MIN: f32 = 0.6;
pub const SPIRAL_Y_MAX: f32 = 8.8;

/// Height of the star above the ground plane.
pub const STAR_APEX_Y: f32 = 10.4;

/// Formation orbit speed shared by every item, in radians per second.
pub const DEFAULT_ROTATION_SPEED: f32 = 0.15;

/// Self-spin speed of the star in formation, in radians per second.
pub const STAR_SPIN_SPEED: f32 = 0.6;

/// Fixed decorative counts.
pub const FOLIAGE_COUNT: usize = 220;
pub const ORNAMENT_COUNT: usize = 64;

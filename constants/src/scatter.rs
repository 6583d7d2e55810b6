/// Vertical field of view assumed when generating scatter anchors,
/// in radians (~50 degrees). Anchors are generated once, so they use a
/// fixed assumption rather than the live projection.
pub const SCATTER_ASSUMED_FOV: f32 = 0.8727;

/// Width/height ratio assumed for the same purpose.
pub const SCATTER_ASSUMED_ASPECT: f32 = 1.6;

/// Camera-forward distance range scatter anchors are sampled from.
pub const SCATTER_DISTANCE_MIN: f32 = 6.0;
pub const SCATTER_DISTANCE_MAX: f32 = 14.0;

/// Scatter anchors use this fraction of the visible extent so items
/// stay inset from the frame edges.
pub const SCATTER_FRAME_INSET: f32 = 0.8;

/// Lateral/vertical spread of recede anchors around the camera axis.
pub const RECEDE_LATERAL_SPREAD: f32 = 14.0;
pub const RECEDE_VERTICAL_SPREAD: f32 = 9.0;

/// Minimum lateral distance a recede anchor keeps from the camera axis
/// so background items never overlap the focused one.
pub const KEEP_CLEAR_RADIUS: f32 = 4.0;

/// Idle drift of scattered items, so the field never looks frozen.
pub const DRIFT_AMPLITUDE: f32 = 0.18;
pub const DRIFT_SPEED: f32 = 0.7;

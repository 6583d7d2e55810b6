/// Distance in front of the camera at which a focused item is pinned.
pub const FOCUS_DISTANCE: f32 = 5.0;

/// Fraction of the vertical field of view a focused item should fill.
pub const FOCUS_HEIGHT_FRACTION: f32 = 0.7;

/// Distance in front of the camera at which unselected items recede
/// while something is focused.
pub const RECEDE_DISTANCE: f32 = 25.0;

/// Uniform shrink applied to receding items.
pub const RECEDE_SHRINK: f32 = 0.5;

/// Exponential smoothing rates, per second. Camera-locked layouts need
/// the snappy rate so items track the camera without visible lag.
pub const SMOOTHING_FORMATION: f32 = 2.0;
pub const SMOOTHING_TRACKING: f32 = 8.0;

/// Scale boost applied to a hovered, unfocused photo card.
pub const HOVER_SCALE_BOOST: f32 = 1.08;

/// Maximum crooked-hang roll of a photo card, in radians (either sign).
pub const POLAROID_MAX_ROLL: f32 = 0.12;

/// Maximum tilt of a foliage tuft away from vertical, in radians.
pub const FOLIAGE_MAX_TILT: f32 = 0.25;

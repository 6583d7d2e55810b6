// Anchor-field generation: counts, determinism, and spatial bounds.

use bevy::math::Vec3;
use constants::scatter::{
    KEEP_CLEAR_RADIUS, SCATTER_ASSUMED_ASPECT, SCATTER_ASSUMED_FOV, SCATTER_DISTANCE_MAX,
    SCATTER_DISTANCE_MIN, SCATTER_FRAME_INSET,
};
use tree_scene_core::field::{
    FieldParams, LayoutKind, generate_field, generate_snow_field, spiral_anchor,
};

#[test]
fn field_produces_exactly_count_anchors() {
    let params = FieldParams::default();
    for count in [0usize, 1, 3, 17, 200] {
        let field = generate_field(count, LayoutKind::Spiral, &params);
        assert_eq!(field.len(), count, "expected {count} anchors");
    }
}

#[test]
fn zero_count_yields_empty_field() {
    let field = generate_field(0, LayoutKind::ConeFill, &FieldParams::default());
    assert!(field.is_empty());
}

#[test]
fn degenerate_extents_yield_empty_field() {
    let mut params = FieldParams::default();
    params.tree_height = 0.0;
    assert!(generate_field(10, LayoutKind::Spiral, &params).is_empty());

    let mut params = FieldParams::default();
    params.max_radius = f32::NAN;
    assert!(generate_field(10, LayoutKind::Spiral, &params).is_empty());

    let mut params = FieldParams::default();
    params.y_min = 5.0;
    params.y_max = 1.0;
    assert!(generate_field(10, LayoutKind::Spiral, &params).is_empty());
}

#[test]
fn regeneration_is_deterministic() {
    let params = FieldParams::default();
    for kind in [LayoutKind::Spiral, LayoutKind::ConeFill, LayoutKind::Apex] {
        let a = generate_field(40, kind, &params);
        let b = generate_field(40, kind, &params);
        assert_eq!(a, b, "same inputs must reproduce the same field");
    }
}

#[test]
fn spiral_radius_shrinks_with_height() {
    let params = FieldParams::default();
    let count = 50;
    let mut last_radius = f32::INFINITY;
    for i in 0..count {
        let anchor = spiral_anchor(i, count, &params);
        let radius = Vec3::new(anchor.x, 0.0, anchor.z).length();
        assert!(
            radius <= last_radius + 1e-4,
            "radius must not grow with height: item {i} has {radius} after {last_radius}"
        );
        last_radius = radius;
    }
}

#[test]
fn spiral_heights_span_configured_range() {
    let params = FieldParams::default();
    let count = 30;
    for i in 0..count {
        let y = spiral_anchor(i, count, &params).y;
        assert!(
            y >= params.y_min - 1e-4 && y <= params.y_max + 1e-4,
            "item {i} height {y} outside [{}, {}]",
            params.y_min,
            params.y_max
        );
    }
}

#[test]
fn scatter_anchors_stay_inside_inset_frustum() {
    let field = generate_field(300, LayoutKind::Spiral, &FieldParams::default());
    for item in &field {
        let distance = -item.scatter.z;
        assert!(
            distance >= SCATTER_DISTANCE_MIN - 1e-4 && distance <= SCATTER_DISTANCE_MAX + 1e-4,
            "scatter distance {distance} out of range"
        );
        let half_height = distance * (SCATTER_ASSUMED_FOV * 0.5).tan();
        let half_width = half_height * SCATTER_ASSUMED_ASPECT;
        assert!(
            item.scatter.x.abs() <= half_width * SCATTER_FRAME_INSET + 1e-4,
            "scatter x {} exceeds inset half-width {half_width}",
            item.scatter.x
        );
        assert!(
            item.scatter.y.abs() <= half_height * SCATTER_FRAME_INSET + 1e-4,
            "scatter y {} exceeds inset half-height {half_height}",
            item.scatter.y
        );
    }
}

#[test]
fn recede_anchors_respect_keep_clear_radius() {
    let field = generate_field(300, LayoutKind::Spiral, &FieldParams::default());
    for item in &field {
        assert!(
            item.recede.length() >= KEEP_CLEAR_RADIUS - 1e-3,
            "recede anchor {:?} inside keep-clear radius",
            item.recede
        );
    }
}

#[test]
fn cone_fill_is_bottom_heavy() {
    let params = FieldParams::default();
    let field = generate_field(500, LayoutKind::ConeFill, &params);
    let below_half = field
        .iter()
        .filter(|item| item.primary.y < params.tree_height * 0.5)
        .count();
    assert!(
        below_half * 2 > field.len(),
        "only {below_half} of {} anchors in the bottom half",
        field.len()
    );
}

#[test]
fn snow_field_counts_and_bounds() {
    let extent = Vec3::new(10.0, 8.0, 10.0);
    let flakes = generate_snow_field(120, extent);
    assert_eq!(flakes.len(), 120);
    for flake in &flakes {
        assert!(flake.position.x.abs() <= extent.x * 0.5 + 1e-4);
        assert!(flake.position.y >= 0.0 && flake.position.y <= extent.y + 1e-4);
        assert!(flake.position.z.abs() <= extent.z * 0.5 + 1e-4);
        assert!(flake.speed > 0.0 && flake.size > 0.0);
    }
}

#[test]
fn snow_field_rejects_degenerate_extent() {
    assert!(generate_snow_field(100, Vec3::new(0.0, 8.0, 10.0)).is_empty());
    assert!(generate_snow_field(100, Vec3::new(10.0, f32::INFINITY, 10.0)).is_empty());
}

// Snow closed form: wrap-around recycling, wind continuity, and the
// boundary fade.

use bevy::math::Vec3;
use tree_scene_core::field::SnowFlake;
use tree_scene_core::snow::{SnowParams, flake_state, smoothstep};

fn test_flake() -> SnowFlake {
    SnowFlake {
        position: Vec3::new(1.5, 3.0, -2.0),
        speed: 0.8,
        phase: 2.1,
        size: 0.05,
    }
}

#[test]
fn flakes_wrap_back_into_the_extent() {
    let params = SnowParams::default();
    let flake = test_flake();
    // Enough time that the unwrapped y is far below zero.
    let time = 100.0;
    let unwrapped = flake.position.y - flake.speed * time;
    assert!(unwrapped < 0.0, "test premise: flake has fallen past the floor");

    let (position, _) = flake_state(&flake, time, &params);
    assert!(
        position.y >= 0.0 && position.y < params.vertical_extent,
        "wrapped y {} outside extent",
        position.y
    );
    let expected = unwrapped.rem_euclid(params.vertical_extent);
    assert!((position.y - expected).abs() < 1e-3);
}

#[test]
fn horizontal_sway_is_continuous_across_the_wrap() {
    let params = SnowParams::default();
    let flake = test_flake();
    // Time at which the falling coordinate crosses zero.
    let wrap_time = flake.position.y / flake.speed;
    let (before, _) = flake_state(&flake, wrap_time - 1e-3, &params);
    let (after, _) = flake_state(&flake, wrap_time + 1e-3, &params);
    assert!(
        (before.x - after.x).abs() < 1e-2 && (before.z - after.z).abs() < 1e-2,
        "horizontal position jumped across the wrap: {before:?} -> {after:?}"
    );
}

#[test]
fn opacity_fades_at_both_bounds() {
    let params = SnowParams::default();
    let flake = test_flake();
    // Sweep time; opacity must vanish whenever the flake sits on a
    // bound and be full mid-extent.
    let mut saw_full = false;
    for i in 0..2000 {
        let time = i as f32 * 0.05;
        let (position, opacity) = flake_state(&flake, time, &params);
        assert!((0.0..=1.0).contains(&opacity), "opacity {opacity} out of range");
        if position.y < 0.05 || position.y > params.vertical_extent - 0.05 {
            assert!(opacity < 0.05, "opacity {opacity} visible at bound y={}", position.y);
        }
        let mid = params.vertical_extent * 0.5;
        if (position.y - mid).abs() < params.vertical_extent * 0.5 - params.fade_band {
            assert!(opacity > 0.99, "opacity {opacity} dim mid-extent at y={}", position.y);
            saw_full = true;
        }
    }
    assert!(saw_full, "sweep never sampled the fully opaque band");
}

#[test]
fn state_is_a_pure_function_of_time() {
    let params = SnowParams::default();
    let flake = test_flake();
    let a = flake_state(&flake, 42.42, &params);
    let b = flake_state(&flake, 42.42, &params);
    assert_eq!(a, b);
}

#[test]
fn smoothstep_matches_shader_semantics() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    // Monotonic inside the band.
    let mut last = 0.0;
    for i in 0..=20 {
        let v = smoothstep(0.0, 1.0, i as f32 / 20.0);
        assert!(v >= last);
        last = v;
    }
}

// Pose-resolver branch behaviour: purity, formation orbit, detail
// focus/recede, and camera-tracking scatter.

use bevy::math::{Quat, Vec3};
use constants::motion::{FOCUS_DISTANCE, FOCUS_HEIGHT_FRACTION, RECEDE_DISTANCE, RECEDE_SHRINK};
use tree_scene_core::camera::CameraPose;
use tree_scene_core::field::{FieldParams, LayoutKind, generate_field, spiral_anchor};
use tree_scene_core::mode::EffectiveMode;
use tree_scene_core::pose::{FormationFacing, ItemStyle, face_toward, fit_to_fov, resolve};

fn card_style() -> ItemStyle {
    ItemStyle {
        facing: FormationFacing::Outward,
        intrinsic_height: 1.2,
        crooked: true,
    }
}

fn test_camera() -> CameraPose {
    CameraPose {
        position: Vec3::new(2.0, 5.0, 12.0),
        rotation: Quat::from_rotation_y(0.4) * Quat::from_rotation_x(-0.2),
        fov_y: 0.9,
    }
}

#[test]
fn resolver_is_pure() {
    let field = generate_field(5, LayoutKind::Spiral, &FieldParams::default());
    let camera = test_camera();
    let style = card_style();
    for item in &field {
        let a = resolve(
            EffectiveMode::Chaos, false, false, true, item, &style, &camera, 3.7, 0.15,
        );
        let b = resolve(
            EffectiveMode::Chaos, false, false, true, item, &style, &camera, 3.7, 0.15,
        );
        assert_eq!(a, b, "identical inputs must resolve identically");
    }
}

#[test]
fn formation_positions_match_spiral_at_time_zero() {
    let params = FieldParams::default();
    let field = generate_field(3, LayoutKind::Spiral, &params);
    let camera = test_camera();
    let style = card_style();
    for (i, item) in field.iter().enumerate() {
        let pose = resolve(
            EffectiveMode::Formation, false, false, false, item, &style, &camera, 0.0, 0.15,
        );
        let expected = spiral_anchor(i, 3, &params);
        assert!(
            pose.position.distance(expected) < 1e-4,
            "item {i}: {:?} != spiral anchor {expected:?}",
            pose.position
        );
    }
}

#[test]
fn formation_orbits_rigidly() {
    let params = FieldParams::default();
    let field = generate_field(3, LayoutKind::Spiral, &params);
    let camera = test_camera();
    let style = card_style();
    let speed = 0.15;
    for time in [0.5f32, 2.0, 9.3] {
        let orbit = Quat::from_rotation_y(time * speed);
        for item in &field {
            let pose = resolve(
                EffectiveMode::Formation, false, false, false, item, &style, &camera, time, speed,
            );
            let expected = orbit * item.primary;
            assert!(
                pose.position.distance(expected) < 1e-3,
                "item {} at t={time}: {:?} != {expected:?}",
                item.id,
                pose.position
            );
        }
    }
}

#[test]
fn focused_item_is_pinned_in_front_of_camera() {
    let field = generate_field(3, LayoutKind::Spiral, &FieldParams::default());
    let camera = test_camera();
    let style = card_style();
    let pose = resolve(
        EffectiveMode::Chaos, true, true, false, &field[1], &style, &camera, 4.0, 0.15,
    );

    let expected = camera.position + camera.forward() * FOCUS_DISTANCE;
    assert!(pose.position.distance(expected) < 1e-4);

    // On-screen height fills the target fraction of the view.
    let expected_scale = fit_to_fov(
        camera.fov_y,
        FOCUS_DISTANCE,
        FOCUS_HEIGHT_FRACTION,
        style.intrinsic_height,
    );
    assert!((pose.scale - expected_scale).abs() < 1e-4);

    // Face points back at the camera.
    let face = pose.rotation * Vec3::Z;
    let to_camera = (camera.position - pose.position).normalize();
    assert!(face.dot(to_camera) > 0.999, "focused face must point at the camera");
}

#[test]
fn unfocused_items_recede_behind_the_focused_one() {
    let field = generate_field(3, LayoutKind::Spiral, &FieldParams::default());
    let camera = test_camera();
    let style = card_style();
    for item in [&field[0], &field[2]] {
        let pose = resolve(
            EffectiveMode::Chaos, false, true, false, item, &style, &camera, 4.0, 0.15,
        );
        let expected = camera.position
            + camera.forward() * RECEDE_DISTANCE
            + camera.right() * item.recede.x
            + camera.up() * item.recede.y;
        assert!(
            pose.position.distance(expected) < 1e-3,
            "item {} recede position wrong",
            item.id
        );
        assert!((pose.scale - item.base_size * RECEDE_SHRINK).abs() < 1e-4);
        let forward_depth = (pose.position - camera.position).dot(camera.forward());
        assert!(
            forward_depth > FOCUS_DISTANCE,
            "receding item must sit behind the focus plane"
        );
    }
}

#[test]
fn scatter_positions_track_camera_translation() {
    let field = generate_field(4, LayoutKind::Spiral, &FieldParams::default());
    let style = card_style();
    let camera_a = test_camera();
    let mut camera_b = camera_a;
    let delta = Vec3::new(3.0, -1.0, 2.5);
    camera_b.position += delta;

    for item in &field {
        let a = resolve(
            EffectiveMode::Chaos, false, false, false, item, &style, &camera_a, 1.0, 0.15,
        );
        let b = resolve(
            EffectiveMode::Chaos, false, false, false, item, &style, &camera_b, 1.0, 0.15,
        );
        // Same time, so the drift term cancels and the difference is
        // exactly the camera translation.
        assert!(
            (b.position - a.position).distance(delta) < 1e-3,
            "scatter anchor must ride with the camera"
        );
    }
}

#[test]
fn face_toward_points_plus_z_at_target() {
    let cases = [
        (Vec3::ZERO, Vec3::new(3.0, 1.0, -2.0)),
        (Vec3::new(5.0, -2.0, 1.0), Vec3::new(-4.0, 6.0, 3.0)),
        (Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 9.0, 0.0)), // straight up
    ];
    for (from, to) in cases {
        let rotation = face_toward(from, to);
        let face = rotation * Vec3::Z;
        let dir = (to - from).normalize();
        assert!(
            face.dot(dir) > 0.999,
            "face {face:?} should align with {dir:?}"
        );
    }
    // Coincident points degrade to identity rather than NaN.
    assert_eq!(face_toward(Vec3::ONE, Vec3::ONE), Quat::IDENTITY);
}

#[test]
fn star_spins_about_vertical_axis() {
    let field = generate_field(1, LayoutKind::Apex, &FieldParams::default());
    let camera = test_camera();
    let style = ItemStyle {
        facing: FormationFacing::Spin { speed: 0.6 },
        intrinsic_height: 1.0,
        crooked: false,
    };
    let t = 2.5;
    let pose = resolve(
        EffectiveMode::Formation, false, false, false, &field[0], &style, &camera, t, 0.0,
    );
    let expected = Quat::from_rotation_y(t * 0.6);
    assert!(pose.rotation.angle_between(expected) < 1e-4);
}

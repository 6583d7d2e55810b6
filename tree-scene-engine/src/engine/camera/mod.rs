//! Orbit camera and the per-frame camera snapshot.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use constants::tree::TREE_HEIGHT;
use tree_scene_core::camera::CameraPose;

/// Target orbit state; the actual camera transform eases toward it.
#[derive(Resource)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::new(0.0, TREE_HEIGHT * 0.45, 0.0),
            yaw: 0.0,
            pitch: -0.25,
            distance: 16.0,
        }
    }
}

/// Snapshot of the camera transform read by every resolver this
/// frame. Written once, after the controller has run.
#[derive(Resource, Default)]
pub struct CameraSnapshot(pub CameraPose);

/// Right-drag to orbit, wheel to dolly. Eased the same way the target
/// pose interpolator works, so camera motion and item motion share one
/// feel.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        orbit.yaw -= mouse_delta.x * 0.0035;
        orbit.pitch -= mouse_delta.y * 0.0030;
        orbit.pitch = orbit.pitch.clamp(-1.4, 1.4);
    }

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        let dolly = (orbit.distance * 0.12).clamp(0.2, 4.0);
        orbit.distance = (orbit.distance - scroll_accum * dolly).clamp(4.0, 60.0);
    }

    let rotation = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
    let target_pos = orbit.target + rotation * (Vec3::Z * orbit.distance);
    let target_rot = rotation;

    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_speed);
}

/// Capture the camera transform into the read-only snapshot. Runs
/// after the controller and before any resolver, so all items in a
/// frame see one coherent camera.
pub fn snapshot_camera(
    mut snapshot: ResMut<CameraSnapshot>,
    camera_query: Query<(&Transform, &Projection), With<Camera3d>>,
) {
    let Ok((transform, projection)) = camera_query.single() else {
        return;
    };
    let fov_y = match projection {
        Projection::Perspective(perspective) => perspective.fov,
        _ => snapshot.0.fov_y,
    };
    snapshot.0 = CameraPose {
        position: transform.translation,
        rotation: transform.rotation,
        fov_y,
    };
}

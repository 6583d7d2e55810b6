//! The per-frame resolve-and-interpolate pass.

use bevy::prelude::*;

use tree_scene_core::motion::{smoothing_rate, step_pose};
use tree_scene_core::pose::{Pose, resolve};

use crate::engine::camera::CameraSnapshot;
use crate::engine::scene::{DecorItem, Hovered, PhotoCard};
use crate::engine::state::{ModeState, SceneSettings};

/// Resolve every item's target pose against the frame's camera
/// snapshot and ease its live transform toward it. Items are
/// independent; iteration order does not matter.
pub fn drive_item_poses(
    time: Res<Time>,
    camera: Res<CameraSnapshot>,
    mode: Res<ModeState>,
    settings: Res<SceneSettings>,
    mut items: Query<(&DecorItem, Option<&PhotoCard>, Has<Hovered>, &mut Transform)>,
) {
    let effective = mode.0.effective();
    let detail = mode.0.detail_active();
    let rate = smoothing_rate(effective, detail);
    let elapsed = time.elapsed_secs();
    let delta = time.delta_secs();

    for (item, card, hovered, mut transform) in &mut items {
        let selected = match (card, mode.0.selected()) {
            (Some(card), Some(focused)) => card.index as u32 == focused,
            _ => false,
        };

        let target = resolve(
            effective,
            selected,
            detail,
            hovered,
            &item.layout,
            &item.style,
            &camera.0,
            elapsed,
            settings.rotation_speed,
        );

        let mut live = Pose {
            position: transform.translation,
            rotation: transform.rotation,
            scale: transform.scale.x,
        };
        step_pose(&mut live, &target, rate, delta);

        transform.translation = live.position;
        transform.rotation = live.rotation;
        transform.scale = Vec3::splat(live.scale);
    }
}

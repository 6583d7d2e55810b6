//! Pointer picking over the photo cards: hover feedback and
//! click-to-focus. Nearest hit wins, which stands in for event
//! propagation stop.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::interaction::ray::ray_obb_distance;
use crate::engine::scene::photos::{CARD_DEPTH, CARD_HEIGHT, CARD_WIDTH};
use crate::engine::scene::{Hovered, PhotoCard};
use crate::engine::state::{ModeState, SceneCommand};

pub fn pointer_pick(
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    cards: Query<(Entity, &GlobalTransform, &PhotoCard)>,
    hovered: Query<Entity, With<Hovered>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mode: Res<ModeState>,
    mut commands: Commands,
    mut scene_commands: EventWriter<SceneCommand>,
) {
    let clear_hover = |commands: &mut Commands, keep: Option<Entity>| {
        for entity in &hovered {
            if keep != Some(entity) {
                commands.entity(entity).remove::<Hovered>();
            }
        }
    };

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        clear_hover(&mut commands, None);
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        clear_hover(&mut commands, None);
        return;
    };

    let half_extents = Vec3::new(CARD_WIDTH * 0.5, CARD_HEIGHT * 0.5, CARD_DEPTH * 0.5);
    let mut nearest: Option<(Entity, usize, f32)> = None;
    for (entity, transform, card) in &cards {
        if let Some(t) = ray_obb_distance(ray.origin, *ray.direction, transform, half_extents) {
            if nearest.is_none_or(|(_, _, best)| t < best) {
                nearest = Some((entity, card.index, t));
            }
        }
    }

    clear_hover(&mut commands, nearest.map(|(entity, _, _)| entity));
    if let Some((entity, _, _)) = nearest {
        commands.entity(entity).insert(Hovered);
    }

    if mouse.just_pressed(MouseButton::Left) {
        if mode.0.detail_active() {
            // Any click while focused dismisses the detail view.
            scene_commands.write(SceneCommand::ClearFocus);
        } else if let Some((_, index, _)) = nearest {
            scene_commands.write(SceneCommand::FocusPhoto(index));
        }
    }
}

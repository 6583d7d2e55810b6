//! Keyboard bindings for the same commands the RPC bridge exposes.
//! Mostly a native convenience; the web control panel drives the
//! bridge instead.

use bevy::prelude::*;

use crate::engine::state::{SceneCommand, SceneSettings};

const ROTATION_SPEED_STEP: f32 = 0.05;

pub fn keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<SceneSettings>,
    mut scene_commands: EventWriter<SceneCommand>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        scene_commands.write(SceneCommand::ToggleScatter);
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        scene_commands.write(SceneCommand::ClearFocus);
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        scene_commands.write(SceneCommand::SetRotationSpeed(
            settings.rotation_speed + ROTATION_SPEED_STEP,
        ));
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        scene_commands.write(SceneCommand::SetRotationSpeed(
            (settings.rotation_speed - ROTATION_SPEED_STEP).max(0.0),
        ));
    }

    const DIGITS: [KeyCode; 9] = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
    ];
    for (i, key) in DIGITS.iter().enumerate() {
        if keyboard.just_pressed(*key) {
            scene_commands.write(SceneCommand::FocusPhoto(i));
        }
    }
}

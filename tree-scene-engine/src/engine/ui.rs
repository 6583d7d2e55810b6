//! Native status overlay: FPS and the current scene state.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use tree_scene_core::mode::BaseMode;

use crate::engine::state::{ModeState, PhotoSet};

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct StatusText;

pub fn spawn_ui(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.3, 0.3)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new("formation"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                StatusText,
            ));
        });
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}

pub fn status_text_update_system(
    mode: Res<ModeState>,
    photos: Res<PhotoSet>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    if !mode.is_changed() && !photos.is_changed() {
        return;
    }
    for mut text in &mut query {
        let base = match mode.0.base() {
            BaseMode::Formation => "formation",
            BaseMode::Chaos => "chaos",
        };
        text.0 = match mode.0.selected() {
            Some(index) => format!("{base} | photo {index} focused | {} photos", photos.sources.len()),
            None => format!("{base} | {} photos", photos.sources.len()),
        };
    }
}

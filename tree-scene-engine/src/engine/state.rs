//! Scene-wide mutable state and the command funnel.
//!
//! Interaction surfaces (RPC bridge, keyboard shortcuts, picking)
//! never mutate the mode directly; they emit `SceneCommand` events and
//! `apply_scene_commands` is the single writer. Events emitted during
//! a frame are consumed at the top of the next one, before any
//! resolver runs, so no resolver ever sees a torn mode.

use bevy::prelude::*;

use constants::tree::DEFAULT_ROTATION_SPEED;
use tree_scene_core::mode::{BaseMode, SceneMode};

use crate::rpc::web_rpc::WebRpcInterface;

/// The mode state machine, wrapped as a resource.
#[derive(Resource, Default)]
pub struct ModeState(pub SceneMode);

/// Runtime-settable tunables arriving from the control panel.
#[derive(Resource)]
pub struct SceneSettings {
    /// Formation orbit speed, radians per second.
    pub rotation_speed: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            rotation_speed: DEFAULT_ROTATION_SPEED,
        }
    }
}

/// The current photo list. `dirty` requests a wholesale rebuild of the
/// polaroid items.
#[derive(Resource, Default)]
pub struct PhotoSet {
    pub sources: Vec<String>,
    pub dirty: bool,
}

/// Mode and content mutations requested by interaction handlers.
#[derive(Event, Debug, Clone)]
pub enum SceneCommand {
    SetPhotos(Vec<String>),
    SetScatter(bool),
    ToggleScatter,
    SetRotationSpeed(f32),
    FocusPhoto(usize),
    ClearFocus,
}

/// Apply queued commands atomically before this frame's resolution
/// pass. Rejected transitions are UI races, not faults: log and move
/// on.
pub fn apply_scene_commands(
    mut events: EventReader<SceneCommand>,
    mut mode: ResMut<ModeState>,
    mut settings: ResMut<SceneSettings>,
    mut photos: ResMut<PhotoSet>,
    mut rpc: ResMut<WebRpcInterface>,
) {
    let mut state_changed = false;

    for command in events.read() {
        match command {
            SceneCommand::SetPhotos(sources) => {
                // A focus pinned to an item from the old list would go
                // stale; drop it as part of the swap.
                if mode.0.clear_selection() {
                    state_changed = true;
                }
                info!("photo set replaced: {} sources", sources.len());
                photos.sources = sources.clone();
                photos.dirty = true;
            }
            SceneCommand::SetScatter(enabled) => {
                let base = if *enabled {
                    BaseMode::Chaos
                } else {
                    BaseMode::Formation
                };
                if mode.0.set_base(base) {
                    state_changed = true;
                } else {
                    warn!("scatter change rejected while a photo is focused");
                }
            }
            SceneCommand::ToggleScatter => {
                if mode.0.toggle_chaos() {
                    state_changed = true;
                } else {
                    warn!("scatter toggle rejected while a photo is focused");
                }
            }
            SceneCommand::SetRotationSpeed(speed) => {
                settings.rotation_speed = speed.max(0.0);
            }
            SceneCommand::FocusPhoto(index) => {
                if mode.0.select(*index as u32, photos.sources.len()) {
                    state_changed = true;
                    let source = photos.sources[*index].clone();
                    rpc.send_notification(
                        "photo_selected",
                        serde_json::json!({ "index": index, "source": source }),
                    );
                } else {
                    warn!("focus request for photo {index} rejected");
                }
            }
            SceneCommand::ClearFocus => {
                if mode.0.clear_selection() {
                    state_changed = true;
                }
            }
        }
    }

    if state_changed {
        let base = match mode.0.base() {
            BaseMode::Formation => "formation",
            BaseMode::Chaos => "chaos",
        };
        info!(
            "scene state: base={base} focused={:?}",
            mode.0.selected()
        );
        rpc.send_notification(
            "scene_state_changed",
            serde_json::json!({
                "base_mode": base,
                "detail": mode.0.detail_active(),
                "focused": mode.0.selected(),
            }),
        );
    }
}

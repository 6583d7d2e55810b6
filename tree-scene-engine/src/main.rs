use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_common_assets::json::JsonAssetPlugin;

mod engine;
mod rpc;

use engine::assets::photo_manifest::{ManifestLoader, PhotoManifest, load_photo_manifest};
use engine::camera::{CameraSnapshot, OrbitCamera, camera_controller, snapshot_camera};
use engine::interaction::picking::pointer_pick;
use engine::interaction::shortcuts::keyboard_shortcuts;
use engine::scene::animate::drive_item_poses;
use engine::scene::composer::spawn_decorations;
use engine::scene::photos::{check_photo_textures, rebuild_photo_items};
use engine::scene::snow::{SnowMaterial, spawn_snow, update_snow_uniform};
use engine::state::{ModeState, PhotoSet, SceneCommand, SceneSettings, apply_scene_commands};
use engine::ui::{fps_text_update_system, spawn_ui, status_text_update_system};
use rpc::web_rpc::WebRpcPlugin;

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MaterialPlugin::<SnowMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(JsonAssetPlugin::<PhotoManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin);

    app.init_resource::<ModeState>()
        .init_resource::<SceneSettings>()
        .init_resource::<PhotoSet>()
        .init_resource::<ManifestLoader>()
        .init_resource::<OrbitCamera>()
        .init_resource::<CameraSnapshot>()
        .add_event::<SceneCommand>()
        .add_systems(Startup, (setup, spawn_decorations, spawn_snow))
        .add_systems(
            Update,
            // One frame, in order: content intake, mode application,
            // camera, snapshot, interaction, pose resolution, snow
            // uniform, overlay. Commands emitted by interaction are
            // consumed by the apply step of the next frame.
            (
                load_photo_manifest,
                apply_scene_commands,
                rebuild_photo_items,
                camera_controller,
                snapshot_camera,
                pointer_pick,
                keyboard_shortcuts,
                drive_item_poses,
                update_snow_uniform,
                check_photo_textures,
                fps_text_update_system,
                status_text_update_system,
            )
                .chain(),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "tree-scene".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

fn setup(mut commands: Commands) {
    println!("=== HOLIDAY TREE SCENE ===");

    spawn_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_ui(&mut commands);
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 6.0, 16.0).looking_at(Vec3::new(0.0, 4.5, 0.0), Vec3::Y),
    ));
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.7, 0.75, 0.95),
        brightness: 120.0,
        ..default()
    });
}

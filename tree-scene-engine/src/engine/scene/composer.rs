//! Fixed-count decorative categories: foliage, ornaments, the star.
//! Photo cards are content-driven and live in [`super::photos`].

use bevy::prelude::*;

use constants::motion::FOLIAGE_MAX_TILT;
use constants::tree::{FOLIAGE_COUNT, ORNAMENT_COUNT, STAR_SPIN_SPEED};
use tree_scene_core::field::{FieldParams, LayoutKind, generate_field};
use tree_scene_core::hash::hash_id;
use tree_scene_core::pose::{FormationFacing, ItemStyle};

use crate::engine::scene::DecorItem;

const FOLIAGE_TUFT_HEIGHT: f32 = 0.7;
const ORNAMENT_RADIUS: f32 = 0.16;
const STAR_RADIUS: f32 = 0.45;

/// Spawn the fixed decorative categories once at startup. Counts and
/// extents never change for these, so their fields are generated
/// exactly once.
pub fn spawn_decorations(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let params = FieldParams::default();

    spawn_foliage(&mut commands, &mut meshes, &mut materials, &params);
    spawn_ornaments(&mut commands, &mut meshes, &mut materials, &params);
    spawn_star(&mut commands, &mut meshes, &mut materials, &params);

    info!(
        "decorations spawned: {} foliage, {} ornaments, 1 star",
        FOLIAGE_COUNT, ORNAMENT_COUNT
    );
}

fn spawn_foliage(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    params: &FieldParams,
) {
    let field = generate_field(FOLIAGE_COUNT, LayoutKind::ConeFill, params);
    if field.is_empty() {
        warn!("foliage field came back empty, nothing to spawn");
        return;
    }

    let mesh = meshes.add(Cone::new(FOLIAGE_TUFT_HEIGHT * 0.55, FOLIAGE_TUFT_HEIGHT));
    // A few shared shades instead of one material per tuft.
    let shades: Vec<Handle<StandardMaterial>> = [0.28, 0.33, 0.38]
        .iter()
        .map(|l| {
            materials.add(StandardMaterial {
                base_color: Color::hsl(135.0, 0.55, *l),
                perceptual_roughness: 0.9,
                ..default()
            })
        })
        .collect();

    for item in field {
        let material = shades[item.id as usize % shades.len()].clone();
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(item.primary),
            DecorItem {
                layout: item,
                style: ItemStyle {
                    facing: FormationFacing::Upright {
                        max_tilt: FOLIAGE_MAX_TILT,
                    },
                    intrinsic_height: FOLIAGE_TUFT_HEIGHT,
                    crooked: false,
                },
            },
        ));
    }
}

fn spawn_ornaments(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    params: &FieldParams,
) {
    let field = generate_field(ORNAMENT_COUNT, LayoutKind::Spiral, params);
    if field.is_empty() {
        warn!("ornament field came back empty, nothing to spawn");
        return;
    }

    let mesh = meshes.add(Sphere::new(ORNAMENT_RADIUS));
    for item in field {
        // Deterministic hue per bauble.
        let hue = hash_id(item.id, 40) * 360.0;
        let material = materials.add(StandardMaterial {
            base_color: Color::hsl(hue, 0.8, 0.5),
            perceptual_roughness: 0.2,
            metallic: 0.6,
            ..default()
        });
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(item.primary),
            DecorItem {
                layout: item,
                style: ItemStyle {
                    facing: FormationFacing::Outward,
                    intrinsic_height: ORNAMENT_RADIUS * 2.0,
                    crooked: false,
                },
            },
        ));
    }
}

fn spawn_star(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    params: &FieldParams,
) {
    let field = generate_field(1, LayoutKind::Apex, params);
    let Some(item) = field.into_iter().next() else {
        warn!("apex field came back empty, no star");
        return;
    };

    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.85, 0.3),
        emissive: LinearRgba::rgb(2.0, 1.5, 0.4),
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(STAR_RADIUS))),
        MeshMaterial3d(material),
        Transform::from_translation(item.primary),
        DecorItem {
            layout: item,
            style: ItemStyle {
                facing: FormationFacing::Spin {
                    speed: STAR_SPIN_SPEED,
                },
                intrinsic_height: STAR_RADIUS * 2.0,
                crooked: false,
            },
        },
    ));
}

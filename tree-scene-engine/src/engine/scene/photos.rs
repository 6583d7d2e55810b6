//! Photo-card lifecycle: wholesale rebuild when the photo list
//! changes, asynchronous texture resolution, and per-card fallback on
//! load failure.

use bevy::asset::LoadState;
use bevy::prelude::*;

use tree_scene_core::field::{FieldParams, LayoutKind, generate_field};
use tree_scene_core::hash::hash_id;
use tree_scene_core::pose::{FormationFacing, ItemStyle};

use crate::engine::scene::{DecorItem, PhotoCard};
use crate::engine::state::PhotoSet;

pub const CARD_WIDTH: f32 = 1.0;
pub const CARD_HEIGHT: f32 = 1.2;
/// Picking slab thickness; cards are flat but a ray needs volume.
pub const CARD_DEPTH: f32 = 0.06;

/// Square photo surface inset into the white frame, upper part of the
/// card like a real polaroid print.
const PHOTO_SIZE: f32 = CARD_WIDTH * 0.86;
const PHOTO_Y_OFFSET: f32 = (CARD_HEIGHT - PHOTO_SIZE) * 0.5 - 0.07;

/// Tracks one card's pending texture so a failure can be swapped for
/// the fallback tint. A rebuild despawns these wholesale, which is
/// also what discards superseded loads: a late arrival has no surface
/// left to attach to.
#[derive(Component)]
pub struct PhotoSurface {
    pub index: usize,
    pub image: Handle<Image>,
    pub material: Handle<StandardMaterial>,
    pub settled: bool,
}

/// Replace the whole card set when the photo list changed. Anchors are
/// regenerated from scratch; there is no incremental add/remove.
pub fn rebuild_photo_items(
    mut commands: Commands,
    mut photos: ResMut<PhotoSet>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    existing: Query<Entity, With<PhotoCard>>,
) {
    if !photos.dirty {
        return;
    }
    photos.dirty = false;

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let field = generate_field(photos.sources.len(), LayoutKind::Spiral, &FieldParams::default());
    if field.is_empty() {
        info!("photo set empty, no cards spawned");
        return;
    }

    let frame_mesh = meshes.add(Rectangle::new(CARD_WIDTH, CARD_HEIGHT));
    let photo_mesh = meshes.add(Rectangle::new(PHOTO_SIZE, PHOTO_SIZE));
    let frame_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.96, 0.95, 0.92),
        unlit: true,
        ..default()
    });

    for item in field {
        let index = item.id as usize;
        let source = photos.sources[index].clone();
        let image: Handle<Image> = asset_server.load(&source);

        // Placeholder grey until the texture resolves; the base colour
        // is multiplied out once the texture attaches.
        let photo_material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.6, 0.6, 0.62),
            base_color_texture: Some(image.clone()),
            unlit: true,
            ..default()
        });

        commands
            .spawn((
                Transform::from_translation(item.primary),
                Visibility::default(),
                DecorItem {
                    layout: item,
                    style: ItemStyle {
                        facing: FormationFacing::Outward,
                        intrinsic_height: CARD_HEIGHT,
                        crooked: true,
                    },
                },
                PhotoCard {
                    index,
                    source: source.clone(),
                },
            ))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(frame_mesh.clone()),
                    MeshMaterial3d(frame_material.clone()),
                    Transform::IDENTITY,
                ));
                parent.spawn((
                    Mesh3d(photo_mesh.clone()),
                    MeshMaterial3d(photo_material.clone()),
                    Transform::from_xyz(0.0, PHOTO_Y_OFFSET, 0.01),
                    PhotoSurface {
                        index,
                        image,
                        material: photo_material,
                        settled: false,
                    },
                ));
            });
    }

    info!("spawned {} photo cards", photos.sources.len());
}

/// Poll pending photo textures. Loaded surfaces get their placeholder
/// tint cleared; failed ones fall back to a deterministic tint for
/// that card only. Pose resolution is unaffected either way.
pub fn check_photo_textures(
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut surfaces: Query<&mut PhotoSurface>,
) {
    for mut surface in &mut surfaces {
        if surface.settled {
            continue;
        }
        match asset_server.get_load_state(surface.image.id()) {
            Some(LoadState::Loaded) => {
                if let Some(material) = materials.get_mut(&surface.material) {
                    material.base_color = Color::WHITE;
                }
                surface.settled = true;
            }
            Some(LoadState::Failed(_)) => {
                warn!("photo {} failed to load, using fallback card", surface.index);
                if let Some(material) = materials.get_mut(&surface.material) {
                    material.base_color_texture = None;
                    let hue = hash_id(surface.index as u32, 50) * 360.0;
                    material.base_color = Color::hsl(hue, 0.35, 0.55);
                }
                surface.settled = true;
            }
            _ => {}
        }
    }
}

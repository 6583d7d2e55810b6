//! Shader-resolved snow field.
//!
//! One mesh of camera-facing quads, four vertices per flake, with the
//! per-flake parameters packed into a custom vertex attribute. The
//! WGSL evaluates the same closed form as `tree_scene_core::snow`, so
//! nothing on the CPU touches the flakes after spawn except the time
//! uniform.

use bevy::pbr::{Material, MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::mesh::{Indices, MeshVertexAttribute, MeshVertexBufferLayoutRef, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, SpecializedMeshPipelineError, VertexFormat,
};
use bevy::render::view::NoFrustumCulling;

use constants::snow::{
    SNOW_COUNT, SNOW_EXTENT, SNOW_FADE_BAND, SNOW_WIND_AMPLITUDE, SNOW_WIND_FREQUENCY,
};
use tree_scene_core::field::generate_snow_field;

/// Per-flake (speed, phase, size, seed) packed per vertex.
pub const ATTRIBUTE_FLAKE: MeshVertexAttribute =
    MeshVertexAttribute::new("Snow_Flake", 988540917, VertexFormat::Float32x4);

const SNOW_ALPHA: f32 = 0.9;

#[derive(Component)]
pub struct SnowLayer;

/// Snow quad material. `params` carries the uniform block the closed
/// form needs:
/// `params[0] = (time, vertical_extent, wind_amplitude, wind_frequency)`
/// `params[1] = (fade_band, max_alpha, 0, 0)`
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct SnowMaterial {
    #[uniform(0)]
    pub params: [Vec4; 2],
}

impl Material for SnowMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/snow.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/snow.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(1),
            ATTRIBUTE_FLAKE.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        Ok(())
    }
}

/// Build the flake-quad mesh: four identical positions per flake, the
/// UV picks the corner and the vertex shader billboards it.
fn build_snow_mesh(count: usize, extent: Vec3) -> Option<Mesh> {
    let flakes = generate_snow_field(count, extent);
    if flakes.is_empty() {
        return None;
    }

    let vertex_count = flakes.len() * 4;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);
    let mut flake_data = Vec::with_capacity(vertex_count);
    let mut indices = Vec::with_capacity(flakes.len() * 6);

    for (i, flake) in flakes.iter().enumerate() {
        let seed = i as f32;
        for corner in [[0.0f32, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]] {
            positions.push(flake.position.to_array());
            uvs.push(corner);
            flake_data.push([flake.speed, flake.phase, flake.size, seed]);
        }
        let base = (i * 4) as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_attribute(ATTRIBUTE_FLAKE, flake_data);
    mesh.insert_indices(Indices::U32(indices));
    Some(mesh)
}

pub fn spawn_snow(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<SnowMaterial>>,
) {
    let Some(mesh) = build_snow_mesh(SNOW_COUNT, SNOW_EXTENT) else {
        warn!("snow field degenerate, skipping");
        return;
    };

    let material = SnowMaterial {
        params: [
            Vec4::new(0.0, SNOW_EXTENT.y, SNOW_WIND_AMPLITUDE, SNOW_WIND_FREQUENCY),
            Vec4::new(SNOW_FADE_BAND, SNOW_ALPHA, 0.0, 0.0),
        ],
    };

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(material)),
        Transform::IDENTITY,
        NoFrustumCulling,
        SnowLayer,
    ));

    info!("snow field spawned: {} flakes", SNOW_COUNT);
}

/// Push the elapsed time into the snow uniform once per frame; the
/// shader derives everything else.
pub fn update_snow_uniform(time: Res<Time>, mut materials: ResMut<Assets<SnowMaterial>>) {
    for (_, material) in materials.iter_mut() {
        material.params[0].x = time.elapsed_secs();
    }
}

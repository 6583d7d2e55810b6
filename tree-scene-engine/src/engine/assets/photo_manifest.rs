//! JSON photo manifest: the default content source on startup. The
//! RPC `set_photos` method feeds the same rebuild path and supersedes
//! whatever the manifest provided.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::state::SceneCommand;

const MANIFEST_PATH: &str = "photos.json";

#[derive(Serialize, Deserialize, Asset, TypePath, Debug, Clone)]
pub struct PhotoManifest {
    pub photos: Vec<String>,
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<PhotoManifest>>,
    loaded: bool,
}

/// Kick off the manifest load on the first frame, then hand the photo
/// list to the command funnel once the asset resolves.
pub fn load_photo_manifest(
    mut loader: ResMut<ManifestLoader>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<PhotoManifest>>,
    mut scene_commands: EventWriter<SceneCommand>,
) {
    if loader.handle.is_none() {
        info!("loading photo manifest from: {MANIFEST_PATH}");
        loader.handle = Some(asset_server.load(MANIFEST_PATH));
        return;
    }

    if !loader.loaded {
        if let Some(ref handle) = loader.handle {
            if let Some(manifest) = manifests.get(handle) {
                info!("photo manifest loaded: {} entries", manifest.photos.len());
                scene_commands.write(SceneCommand::SetPhotos(manifest.photos.clone()));
                loader.loaded = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_deserialises_photo_list() {
        let json = r#"{ "photos": ["photos/01.png", "photos/02.png"] }"#;
        let manifest: PhotoManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.photos.len(), 2);
        assert_eq!(manifest.photos[0], "photos/01.png");
    }

    #[test]
    fn empty_manifest_is_valid() {
        let manifest: PhotoManifest = serde_json::from_str(r#"{ "photos": [] }"#).unwrap();
        assert!(manifest.photos.is_empty());
    }
}

pub mod animate;
pub mod composer;
pub mod photos;
pub mod snow;

use bevy::prelude::*;

use tree_scene_core::field::ItemLayout;
use tree_scene_core::pose::ItemStyle;

/// One decorative instance: its immutable layout record plus the
/// category's resolver style. The entity's `Transform` is the live
/// pose, owned by the interpolator system.
#[derive(Component)]
pub struct DecorItem {
    pub layout: ItemLayout,
    pub style: ItemStyle,
}

/// Marker + payload for the clickable photo cards.
#[derive(Component)]
pub struct PhotoCard {
    pub index: usize,
    pub source: String,
}

/// Pointer-over marker maintained by the picking system.
#[derive(Component)]
pub struct Hovered;

//! Render domain: draws the tile grid and the player from simulation state.
//!
//! Rendering only reads the grid and player; the one write is clearing the
//! recently-damaged flag once the flicker window ends.

mod components;
mod systems;


pub use components::{
    DamageFlicker, FlickerFrame, TileSprite, flicker_visible, tile_center, tile_color,
};

use bevy::prelude::*;

use crate::render::systems::{
    attach_player_sprite, camera_follow, respawn_tile_sprites, sync_player_transform,
    sync_tile_sprites, update_damage_flicker,
};

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            (
                respawn_tile_sprites,
                sync_tile_sprites,
                attach_player_sprite,
                sync_player_transform,
                update_damage_flicker,
                camera_follow,
            )
                .chain(),
        );
    }
}

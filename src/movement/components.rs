//! Movement domain: the player's position and locomotion state.

use bevy::prelude::*;

use crate::content::{Offset, PlayerDefaults};

/// The player-controlled entity.
///
/// `position` is the lower-left origin of the sprite in world units. Every
/// collision and contact sample is taken at a fixed offset from it.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub size: Vec2,
    /// World units per second, raised by lemons until the level ends
    pub speed: f32,
    pub has_key: bool,
}

impl Player {
    pub fn new(position: Vec2, defaults: &PlayerDefaults) -> Self {
        Self {
            position,
            size: Vec2::new(defaults.width, defaults.height),
            speed: defaults.speed,
            has_key: false,
        }
    }

    /// Move to a new level's entry and drop everything earned in the last one
    pub fn reset_for_level(&mut self, position: Vec2, defaults: &PlayerDefaults) {
        self.position = position;
        self.speed = defaults.speed;
        self.has_key = false;
    }

    /// World point at `offset` from the origin
    pub fn sample(&self, offset: Offset) -> Vec2 {
        self.position + offset.vec2()
    }
}

/// World origin that puts the player on the given tile
pub fn tile_origin(tile: IVec2, tile_size: f32) -> Vec2 {
    tile.as_vec2() * tile_size
}

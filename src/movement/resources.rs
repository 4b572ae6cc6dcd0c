//! Movement domain: per-frame input.

use bevy::prelude::*;

/// Input sampled once per frame
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct MovementInput {
    /// -1, 0 or 1 on each axis
    pub axis: Vec2,
    /// Melee held this frame
    pub attack: bool,
}

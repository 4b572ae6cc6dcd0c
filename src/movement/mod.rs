//! Movement domain: player locomotion constrained by the tile grid.

mod collision;
mod components;
mod resources;
mod systems;


pub use collision::{CollisionResolver, edge_probe, try_move, world_to_tile};
pub use components::{Player, tile_origin};
pub use resources::MovementInput;

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::movement::systems::{apply_movement, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(Update, read_input.in_set(SimulationSet::Input))
            .add_systems(Update, apply_movement.in_set(SimulationSet::Movement));
    }
}

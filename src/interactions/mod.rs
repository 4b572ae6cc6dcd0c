//! Interactions domain: what happens when the player reaches a pickup, an enemy, or the exit.

mod resolver;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use resolver::{collect_pickup, exit_probe, sweep_enemies, try_open_exit};
pub use resources::AttackState;

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::interactions::systems::resolve_interactions;

pub struct InteractionsPlugin;

impl Plugin for InteractionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttackState>()
            .add_systems(Update, resolve_interactions.in_set(SimulationSet::Interactions));
    }
}

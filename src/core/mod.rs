//! Core domain: game states, frame ordering, shared resources, and events.

mod events;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{DamageSource, LevelRequest, MazeEvent};
pub use resources::{GameRng, LevelClock, RunConfig};
pub use state::{GameState, SimulationSet};

use bevy::prelude::*;

use crate::core::systems::{log_maze_events, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let run_config = RunConfig::default();
        info!("Starting maze run with seed: {}", run_config.seed);

        app.init_state::<GameState>()
            .insert_resource(GameRng::from_seed(run_config.seed))
            .insert_resource(run_config)
            .init_resource::<LevelClock>()
            .add_message::<MazeEvent>()
            .add_message::<LevelRequest>()
            .configure_sets(
                Update,
                (
                    SimulationSet::Input,
                    SimulationSet::Movement,
                    SimulationSet::Interactions,
                    SimulationSet::Contacts,
                    SimulationSet::Enemies,
                    SimulationSet::Lifecycle,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(Update, log_maze_events.after(SimulationSet::Lifecycle));
    }
}

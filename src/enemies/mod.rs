//! Enemies domain: enemy tiles wandering the grid on a fixed interval.

mod stepper;
mod systems;

#[cfg(test)]
mod tests;

pub use stepper::{EnemyStepper, step_enemies};

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::enemies::systems::step_enemies_on_interval;

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyStepper>()
            .add_systems(Update, step_enemies_on_interval.in_set(SimulationSet::Enemies));
    }
}

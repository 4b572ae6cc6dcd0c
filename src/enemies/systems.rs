//! Enemies domain: driving the stepper from the frame loop.

use bevy::prelude::*;

use crate::core::GameRng;
use crate::enemies::EnemyStepper;
use crate::grid::TileGrid;

pub(crate) fn step_enemies_on_interval(
    time: Res<Time<Real>>,
    mut stepper: ResMut<EnemyStepper>,
    mut grid: ResMut<TileGrid>,
    mut rng: ResMut<GameRng>,
) {
    let now = time.elapsed();
    // Only borrow the grid mutably on steps so its change ticks stay meaningful
    if !stepper.is_due(now) {
        return;
    }

    if let Some(moved) = stepper.tick(now, &mut grid, &mut rng.0) {
        debug!("[ENEMIES] {} of {} enemies moved", moved, grid.enemy_count());
    }
}

//! Enemies domain: timed random walk of enemy tiles.

use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;

use crate::content::GameplayDefaults;
use crate::grid::{Direction, TileGrid, TileKind};

/// Moves every enemy tile at most once per interval of wall-clock time.
///
/// The very first check after a reset is always due.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EnemyStepper {
    interval: Duration,
    last_step: Option<Duration>,
}

impl EnemyStepper {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_step: None,
        }
    }

    pub fn is_due(&self, now: Duration) -> bool {
        self.last_step
            .is_none_or(|last| now.saturating_sub(last) >= self.interval)
    }

    /// Step all enemies if the interval has elapsed.
    /// Returns how many enemies moved, or `None` when it was not time yet.
    pub fn tick<R: Rng>(
        &mut self,
        now: Duration,
        grid: &mut TileGrid,
        rng: &mut R,
    ) -> Option<usize> {
        if !self.is_due(now) {
            return None;
        }
        self.last_step = Some(now);
        Some(step_enemies(grid, || Direction::ALL[rng.random_range(0..4)]))
    }

    pub fn reset(&mut self) {
        self.last_step = None;
    }
}

impl FromWorld for EnemyStepper {
    fn from_world(world: &mut World) -> Self {
        let interval_ms = world
            .get_resource::<GameplayDefaults>()
            .map(|defaults| defaults.enemies.step_interval_ms)
            .unwrap_or(250);
        Self::new(Duration::from_millis(interval_ms))
    }
}

/// One pass over the grid in scan order. Each enemy found picks a direction
/// and moves there only onto in-bounds floor.
///
/// The grid is mutated during the scan, so an enemy that moves forward in
/// scan order is visited again in the same pass.
pub fn step_enemies(grid: &mut TileGrid, mut pick: impl FnMut() -> Direction) -> usize {
    let mut moved = 0;

    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let pos = IVec2::new(x, y);
            if !grid.is(pos, TileKind::Enemy) {
                continue;
            }

            let target = pos + pick().offset();
            if grid.is(target, TileKind::Floor) {
                grid.set_tile(pos, TileKind::Floor);
                grid.set_tile(target, TileKind::Enemy);
                moved += 1;
            }
        }
    }

    moved
}

//! Levels domain: randomized heart and lemon placement.

use bevy::prelude::*;
use rand::Rng;

use crate::grid::{TileGrid, TileKind};

/// Result of one placement roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The pickup was already placed this level
    AlreadyPlaced,
    /// The roll failed; try again next frame
    Skipped,
    Placed(IVec2),
    /// The grid has no floor left; the pickup is given up for this level
    NoFloor,
}

/// Clamp a configured chance into `0.0..=1.0`, treating NaN as never
fn sanitize_chance(chance: f64) -> f64 {
    if chance.is_nan() {
        0.0
    } else {
        chance.clamp(0.0, 1.0)
    }
}

/// Turn one floor cell into `kind`.
///
/// Samples up to `attempts` random cells, then falls back to the first floor
/// cell in scan order. Returns `None` when the grid has no floor at all.
pub fn place_pickup<R: Rng>(
    grid: &mut TileGrid,
    kind: TileKind,
    attempts: u32,
    rng: &mut R,
) -> Option<IVec2> {
    let sampled = if grid.is_empty() {
        None
    } else {
        (0..attempts)
            .map(|_| {
                IVec2::new(
                    rng.random_range(0..grid.width()),
                    rng.random_range(0..grid.height()),
                )
            })
            .find(|&pos| grid.is(pos, TileKind::Floor))
    };

    let pos = sampled.or_else(|| grid.find_first(TileKind::Floor))?;
    grid.set_tile(pos, kind);
    Some(pos)
}

/// Roll for a pending pickup and place it on success.
///
/// `placed` is set once the pickup is placed or found impossible, so each
/// pickup appears at most once per level.
pub fn roll_pickup<R: Rng>(
    placed: &mut bool,
    chance: f64,
    grid: &mut TileGrid,
    kind: TileKind,
    attempts: u32,
    rng: &mut R,
) -> PlacementOutcome {
    if *placed {
        return PlacementOutcome::AlreadyPlaced;
    }
    let roll: f64 = rng.random_range(0.0..1.0);
    if roll >= sanitize_chance(chance) {
        return PlacementOutcome::Skipped;
    }

    *placed = true;
    match place_pickup(grid, kind, attempts, rng) {
        Some(pos) => PlacementOutcome::Placed(pos),
        None => PlacementOutcome::NoFloor,
    }
}

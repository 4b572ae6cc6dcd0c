//! Movement domain: mapping world positions onto the tile grid.

use bevy::prelude::*;

use crate::content::{CollisionInsets, EdgeProbes};
use crate::grid::{Direction, TileGrid, TileKind};
use crate::movement::Player;

/// Tile holding a world point.
///
/// Division truncates toward zero, so points up to one tile left of or below
/// the grid still land on row/column 0.
pub fn world_to_tile(point: Vec2, tile_size: f32) -> IVec2 {
    IVec2::new((point.x / tile_size) as i32, (point.y / tile_size) as i32)
}

/// Read-only view of the grid for blocking and contact checks
pub struct CollisionResolver<'a> {
    grid: &'a TileGrid,
    tile_size: f32,
    insets: &'a CollisionInsets,
}

impl<'a> CollisionResolver<'a> {
    pub fn new(grid: &'a TileGrid, tile_size: f32, insets: &'a CollisionInsets) -> Self {
        Self {
            grid,
            tile_size,
            insets,
        }
    }

    pub fn tile_at(&self, point: Vec2) -> IVec2 {
        world_to_tile(point, self.tile_size)
    }

    /// Tile kind under a world point, `None` off the grid
    pub fn kind_at(&self, point: Vec2) -> Option<TileKind> {
        self.grid.get(self.tile_at(point))
    }

    /// Longest single step that still samples every tile column or row crossed
    pub fn max_step(&self) -> f32 {
        self.tile_size / 2.0
    }

    pub fn is_within_bounds(&self, point: Vec2) -> bool {
        self.grid.within_bounds(self.tile_at(point))
    }

    /// Tiles under the four collision box corners for an origin
    pub fn corners(&self, origin: Vec2) -> [IVec2; 4] {
        let CollisionInsets {
            left,
            right,
            bottom,
            top,
        } = *self.insets;
        [
            self.tile_at(origin + Vec2::new(left, bottom)),
            self.tile_at(origin + Vec2::new(right, bottom)),
            self.tile_at(origin + Vec2::new(left, top)),
            self.tile_at(origin + Vec2::new(right, top)),
        ]
    }

    /// Whether the collision box at `origin` touches a blocking or off-grid tile
    pub fn is_blocked(&self, origin: Vec2) -> bool {
        self.corners(origin)
            .into_iter()
            .any(|tile| self.grid.get(tile).is_none_or(TileKind::blocks_movement))
    }
}

/// Offset of the map-edge probe for a step in `direction`
pub fn edge_probe(direction: Direction, probes: &EdgeProbes) -> Vec2 {
    match direction {
        Direction::Left => Vec2::new(-probes.left, 0.0),
        Direction::Right => Vec2::new(probes.right, 0.0),
        Direction::Up => Vec2::new(0.0, probes.up),
        Direction::Down => Vec2::new(0.0, -probes.down),
    }
}

/// Step the player by `amount` world units, stopping at the first obstacle.
///
/// The move is split into sub-steps of at most half a tile so a long frame
/// cannot carry the collision box across a one-tile wall. Each sub-step's
/// destination box must not touch a blocking tile, and the edge probe,
/// measured from the position before that sub-step, must stay on the grid.
/// Returns whether the player moved at all.
pub fn try_move(
    player: &mut Player,
    direction: Direction,
    amount: f32,
    resolver: &CollisionResolver,
    probes: &EdgeProbes,
) -> bool {
    let max_step = match resolver.max_step() {
        step if step > 0.0 => step,
        _ => amount,
    };
    let unit = direction.offset().as_vec2();
    let mut remaining = amount;
    let mut moved = false;

    while remaining > 0.0 {
        let step = remaining.min(max_step);
        let destination = player.position + unit * step;
        let probe = player.position + edge_probe(direction, probes);

        if resolver.is_blocked(destination) || !resolver.is_within_bounds(probe) {
            break;
        }

        player.position = destination;
        remaining -= step;
        moved = true;
    }

    moved
}

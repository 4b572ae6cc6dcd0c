//! Grid domain: tile kinds, level layout parsing, and the tile grid resource.

mod layout;
mod tile;
mod tile_grid;


pub use layout::{LayoutError, LevelLayout, MAX_GRID_EXTENT};
pub use tile::{Direction, TileKind};
pub use tile_grid::TileGrid;

use bevy::prelude::*;

pub struct GridPlugin;

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TileGrid>();
    }
}

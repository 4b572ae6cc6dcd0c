//! Grid domain: the tile grid resource for the current level.

use bevy::prelude::*;

use crate::core::MazeEvent;
use crate::grid::layout::{LayoutError, LevelLayout};
use crate::grid::tile::TileKind;

/// Tile types of the current level.
///
/// Cells are stored x-major: every `y` of column 0, then column 1, and so on.
/// All scans (entry lookup, enemy stepping) walk that same order.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct TileGrid {
    width: i32,
    height: i32,
    cells: Vec<TileKind>,
}

impl TileGrid {
    /// A grid of the given size filled with floor
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![TileKind::Floor; (width * height) as usize],
        }
    }

    pub fn from_layout(layout: &LevelLayout) -> Self {
        let extents = layout.extents();
        let mut grid = Self::new(extents.x, extents.y);
        for &(pos, kind) in layout.entries() {
            grid.set_tile(pos, kind);
        }
        grid
    }

    /// Replace the whole grid with the given layout
    pub fn load(&mut self, layout: &LevelLayout) {
        *self = Self::from_layout(layout);
    }

    /// Parse and load raw level text. On error the grid is left untouched.
    pub fn load_source(&mut self, source: &str) -> Result<(), LayoutError> {
        let layout = LevelLayout::parse(source)?;
        self.load(&layout);
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn within_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    fn index(&self, pos: IVec2) -> Option<usize> {
        self.within_bounds(pos)
            .then(|| (pos.x * self.height + pos.y) as usize)
    }

    /// Tile at `pos`, or `None` outside the grid
    pub fn get(&self, pos: IVec2) -> Option<TileKind> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub fn is(&self, pos: IVec2, kind: TileKind) -> bool {
        self.get(pos) == Some(kind)
    }

    /// Unconditional overwrite. Returns false when `pos` is outside the grid.
    pub fn set_tile(&mut self, pos: IVec2, kind: TileKind) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = kind;
                true
            }
            None => false,
        }
    }

    /// Every cell position in scan order
    pub fn positions(&self) -> impl Iterator<Item = IVec2> + use<> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| IVec2::new(x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (IVec2, TileKind)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    pub fn find_first(&self, kind: TileKind) -> Option<IVec2> {
        self.iter()
            .find(|&(_, tile)| tile == kind)
            .map(|(pos, _)| pos)
    }

    /// First entry tile in scan order. A level without one cannot be played.
    pub fn find_entry(&self) -> Option<IVec2> {
        self.find_first(TileKind::Entry)
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.cells.iter().filter(|&&tile| tile == kind).count()
    }

    pub fn enemy_count(&self) -> usize {
        self.count(TileKind::Enemy)
    }

    pub fn remove_key(&mut self, pos: IVec2) -> Option<MazeEvent> {
        self.consume(pos, TileKind::Key)
    }

    pub fn remove_heart(&mut self, pos: IVec2) -> Option<MazeEvent> {
        self.consume(pos, TileKind::Heart)
    }

    pub fn remove_lemon(&mut self, pos: IVec2) -> Option<MazeEvent> {
        self.consume(pos, TileKind::Lemon)
    }

    pub fn remove_exit(&mut self, pos: IVec2) -> Option<MazeEvent> {
        self.consume(pos, TileKind::Exit)
    }

    /// Clears the cell whatever it holds
    pub fn remove_enemy(&mut self, pos: IVec2) -> Option<MazeEvent> {
        self.set_tile(pos, TileKind::Floor)
            .then_some(MazeEvent::EnemyDefeated)
    }

    /// Turn `pos` into floor if it currently holds `expected`
    fn consume(&mut self, pos: IVec2, expected: TileKind) -> Option<MazeEvent> {
        if !self.is(pos, expected) {
            return None;
        }
        self.set_tile(pos, TileKind::Floor);
        expected.removal_event()
    }
}

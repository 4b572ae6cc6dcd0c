//! Grid domain: tile kinds, their level-file codes, and grid directions.

use bevy::prelude::*;

use crate::core::MazeEvent;

/// Role of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileKind {
    #[default]
    Floor,
    Wall,
    Entry,
    Exit,
    Trap,
    Enemy,
    Key,
    Heart,
    Lemon,
}

impl TileKind {
    pub const ALL: [TileKind; 9] = [
        TileKind::Floor,
        TileKind::Wall,
        TileKind::Entry,
        TileKind::Exit,
        TileKind::Trap,
        TileKind::Enemy,
        TileKind::Key,
        TileKind::Heart,
        TileKind::Lemon,
    ];

    /// Integer code used in level files
    pub fn code(self) -> i32 {
        match self {
            TileKind::Floor => -1,
            TileKind::Wall => 0,
            TileKind::Entry => 1,
            TileKind::Exit => 2,
            TileKind::Trap => 3,
            TileKind::Enemy => 4,
            TileKind::Key => 5,
            TileKind::Heart => 6,
            TileKind::Lemon => 7,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Tiles the player's collision box may never overlap.
    /// The exit only opens through the key check in the interaction pass.
    pub fn blocks_movement(self) -> bool {
        matches!(self, TileKind::Wall | TileKind::Exit)
    }

    /// Event signalled when a tile of this kind is consumed from the grid
    pub fn removal_event(self) -> Option<MazeEvent> {
        match self {
            TileKind::Key => Some(MazeEvent::KeyPickedUp),
            TileKind::Heart => Some(MazeEvent::HeartPickedUp),
            TileKind::Lemon => Some(MazeEvent::LemonPickedUp),
            TileKind::Exit => Some(MazeEvent::ExitOpened),
            TileKind::Enemy => Some(MazeEvent::EnemyDefeated),
            TileKind::Floor | TileKind::Wall | TileKind::Entry | TileKind::Trap => None,
        }
    }
}

/// Cardinal step on the grid. World and grid y both grow upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::Y,
            Direction::Down => IVec2::NEG_Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

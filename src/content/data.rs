//! Data definitions for gameplay tuning and the level catalog, deserialized from RON.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// A 2D offset in world units, relative to the player's origin
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

// ============================================================================
// Gameplay Defaults
// ============================================================================

/// Global gameplay tuning loaded from gameplay.ron
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayDefaults {
    /// Edge length of one tile in world units
    pub tile_size: f32,
    pub player: PlayerDefaults,
    pub collision: CollisionInsets,
    pub edge_probes: EdgeProbes,
    pub contact: ContactDefaults,
    pub enemies: EnemyDefaults,
    pub pickups: PickupDefaults,
    pub level: LevelDefaults,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            tile_size: 64.0,
            player: PlayerDefaults::default(),
            collision: CollisionInsets::default(),
            edge_probes: EdgeProbes::default(),
            contact: ContactDefaults::default(),
            enemies: EnemyDefaults::default(),
            pickups: PickupDefaults::default(),
            level: LevelDefaults::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerDefaults {
    pub width: f32,
    pub height: f32,
    /// World units per second before any lemon bonus
    pub speed: f32,
    pub starting_lives: i32,
    /// Hearts never raise lives above this
    pub max_lives: i32,
}

impl Default for PlayerDefaults {
    fn default() -> Self {
        Self {
            width: 64.0,
            height: 128.0,
            speed: 375.0,
            starting_lives: 5,
            max_lives: 5,
        }
    }
}

/// Collision box edges measured from the player's origin.
/// The box is narrower than the sprite on purpose.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CollisionInsets {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Default for CollisionInsets {
    fn default() -> Self {
        Self {
            left: 6.0,
            right: 50.0,
            bottom: 20.0,
            top: 40.0,
        }
    }
}

/// How far ahead of the origin the map-edge containment probe looks per direction
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EdgeProbes {
    pub left: f32,
    pub right: f32,
    pub up: f32,
    pub down: f32,
}

impl Default for EdgeProbes {
    fn default() -> Self {
        Self {
            left: 60.0,
            right: 40.0,
            up: 0.0,
            down: 40.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactDefaults {
    pub trap_probe: Offset,
    pub enemy_probe: Offset,
    /// Sample point for keys, hearts, lemons, and the melee sweep
    pub pickup_probe: Offset,
    pub trap_cooldown: f32,
    pub enemy_cooldown: f32,
    pub damage: i32,
}

impl Default for ContactDefaults {
    fn default() -> Self {
        Self {
            trap_probe: Offset::new(40.0, 40.0),
            enemy_probe: Offset::new(20.0, 20.0),
            pickup_probe: Offset::new(12.0, 12.0),
            trap_cooldown: 1.0,
            enemy_cooldown: 1.0,
            damage: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnemyDefaults {
    /// Wall-clock milliseconds between enemy steps
    pub step_interval_ms: u64,
}

impl Default for EnemyDefaults {
    fn default() -> Self {
        Self {
            step_interval_ms: 250,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PickupDefaults {
    /// Chance per update that a pending heart gets placed
    pub heart_chance: f64,
    /// Chance per update that a pending lemon gets placed
    pub lemon_chance: f64,
    pub heart_heal: i32,
    pub lemon_speed_multiplier: f32,
    /// Random cell samples before falling back to a scan for floor
    pub placement_attempts: u32,
}

impl Default for PickupDefaults {
    fn default() -> Self {
        Self {
            heart_chance: 0.5,
            lemon_chance: 0.1,
            heart_heal: 1,
            lemon_speed_multiplier: 1.5,
            placement_attempts: 64,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LevelDefaults {
    /// Seconds between opening the exit and leaving the level
    pub exit_delay: f32,
    pub damage_flicker_duration: f32,
    pub damage_flicker_period: f32,
}

impl Default for LevelDefaults {
    fn default() -> Self {
        Self {
            exit_delay: 1.0,
            damage_flicker_duration: 1.0,
            damage_flicker_period: 0.1,
        }
    }
}

// ============================================================================
// Level Catalog
// ============================================================================

/// Axis-aligned world rectangle that shifts the point used for the exit lookup.
/// Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ExitZone {
    pub min: Offset,
    pub max: Offset,
    pub shift: Offset,
}

impl ExitZone {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub number: u32,
    /// Map file, relative to the assets directory
    pub map: String,
    #[serde(default)]
    pub exit_zones: Vec<ExitZone>,
}

/// Ordered list of playable levels loaded from levels.ron
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
pub struct LevelCatalog {
    pub levels: Vec<LevelDef>,
}

impl LevelCatalog {
    pub fn get(&self, number: u32) -> Option<&LevelDef> {
        self.levels.iter().find(|level| level.number == number)
    }

    pub fn first_level(&self) -> Option<u32> {
        self.levels.iter().map(|level| level.number).min()
    }

    pub fn last_level(&self) -> u32 {
        self.levels
            .iter()
            .map(|level| level.number)
            .max()
            .unwrap_or(1)
    }
}

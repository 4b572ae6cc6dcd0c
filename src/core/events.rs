//! Core domain: gameplay events for collaborators and level requests.

use std::path::PathBuf;

use bevy::ecs::message::Message;

/// What dealt damage to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    Trap,
    Enemy,
}

/// Discrete gameplay event emitted by the simulation.
///
/// Audio and HUD layers subscribe to these; the simulation only guarantees
/// the state change that produced the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeEvent {
    KeyPickedUp,
    HeartPickedUp,
    LemonPickedUp,
    ExitOpened,
    EnemyDefeated,
    AttackSwing,
    DamageTaken { source: DamageSource, lives: i32 },
    GameOver,
    LevelUp { level: u32 },
    Victory,
}

impl Message for MazeEvent {}

/// Request handled by the level loader at the end of a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelRequest {
    /// Load a catalog level, keeping the player's lives
    Advance { level: u32 },
    /// Start over from the first catalog level with a fresh player
    Restart,
    /// Load the current catalog level again with a fresh player
    ReloadCurrent,
    /// Load an external level file with a fresh player
    Reload { path: PathBuf },
}

impl Message for LevelRequest {}

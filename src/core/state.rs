//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content loaded, waiting for the first level
    #[default]
    Boot,
    /// A level is running (including the exit grace period)
    Playing,
    GameOver,
    Victory,
}

/// Ordered stages of one simulated frame
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum SimulationSet {
    Input,
    Movement,
    Interactions,
    Contacts,
    Enemies,
    Lifecycle,
}

//! Levels domain: the per-level session and its phase machine.

use bevy::prelude::*;

/// Where the current level stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelPhase {
    #[default]
    Playing,
    /// The exit is open and the grace timer is running
    Exiting,
    /// Sticky until a restart or reload
    GameOver,
    Victory,
}

/// What the session wants once the exit grace has run out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTransition {
    Advance { next_level: u32 },
    Victory,
}

/// Progress through the current level.
///
/// Replaces a global level counter: everything that resets per level lives
/// here and is re-armed by `enter_level`.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LevelSession {
    pub level: u32,
    /// Number of the final catalog level
    pub last_level: u32,
    pub phase: LevelPhase,
    /// Seconds spent in `Exiting`
    pub exit_elapsed: f32,
    pub keys_collected: u32,
    pub heart_placed: bool,
    pub lemon_placed: bool,
}

impl Default for LevelSession {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl LevelSession {
    pub fn new(level: u32, last_level: u32) -> Self {
        Self {
            level,
            last_level,
            phase: LevelPhase::Playing,
            exit_elapsed: 0.0,
            keys_collected: 0,
            heart_placed: false,
            lemon_placed: false,
        }
    }

    /// Start `level` from scratch with both pickups pending
    pub fn enter_level(&mut self, level: u32) {
        *self = Self::new(level, self.last_level);
    }

    pub fn is_exiting(&self) -> bool {
        self.phase == LevelPhase::Exiting
    }

    pub fn collect_key(&mut self) {
        self.keys_collected += 1;
    }

    /// Open the exit. Only a playing session can start exiting.
    pub fn begin_exit(&mut self) -> bool {
        if self.phase != LevelPhase::Playing {
            return false;
        }
        self.phase = LevelPhase::Exiting;
        self.exit_elapsed = 0.0;
        self.keys_collected = 0;
        true
    }

    /// Advance the exit grace timer.
    ///
    /// On `Advance` the timer restarts, so a level that fails to load is
    /// retried after another full delay instead of every frame.
    pub fn tick(&mut self, dt: f32, exit_delay: f32) -> Option<LevelTransition> {
        if self.phase != LevelPhase::Exiting {
            return None;
        }

        self.exit_elapsed += dt;
        if self.exit_elapsed < exit_delay {
            return None;
        }

        if self.level < self.last_level {
            self.exit_elapsed = 0.0;
            Some(LevelTransition::Advance {
                next_level: self.level + 1,
            })
        } else {
            self.phase = LevelPhase::Victory;
            Some(LevelTransition::Victory)
        }
    }

    /// Move to `GameOver`. Returns false if the session was already there.
    pub fn game_over(&mut self) -> bool {
        if self.phase == LevelPhase::GameOver {
            return false;
        }
        self.phase = LevelPhase::GameOver;
        true
    }
}

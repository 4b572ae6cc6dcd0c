//! Combat domain: player lives and contact cooldowns.

use bevy::prelude::*;

/// Result of applying damage to `Vitals`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Lives were lost and some remain
    Hurt { remaining: i32 },
    /// This hit took the last life
    Depleted,
    /// Nothing was left to take; the hit only repeats the game over
    AlreadyDepleted,
}

impl DamageOutcome {
    pub fn is_game_over(self) -> bool {
        matches!(self, DamageOutcome::Depleted | DamageOutcome::AlreadyDepleted)
    }
}

/// Lives of the player entity
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Vitals {
    pub lives: i32,
    pub max_lives: i32,
    /// Set by every hit, cleared by the damage flicker once it finishes
    pub damaged: bool,
}

impl Vitals {
    pub fn new(lives: i32, max_lives: i32) -> Self {
        Self {
            lives,
            max_lives,
            damaged: false,
        }
    }

    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if self.lives <= 0 {
            return DamageOutcome::AlreadyDepleted;
        }

        self.lives = (self.lives - amount).max(0);
        self.damaged = true;

        if self.lives == 0 {
            DamageOutcome::Depleted
        } else {
            DamageOutcome::Hurt {
                remaining: self.lives,
            }
        }
    }

    /// Unconditional add. Callers check `can_heal` to respect the cap.
    pub fn heal(&mut self, amount: i32) {
        self.lives += amount;
    }

    pub fn can_heal(&self) -> bool {
        self.lives < self.max_lives
    }

    pub fn is_depleted(&self) -> bool {
        self.lives < 1
    }
}

/// Seconds until trap and enemy contact can hurt again
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct ContactCooldowns {
    pub trap: f32,
    pub enemy: f32,
}

impl ContactCooldowns {
    pub fn tick(&mut self, dt: f32) {
        if self.trap > 0.0 {
            self.trap -= dt;
        }
        if self.enemy > 0.0 {
            self.enemy -= dt;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

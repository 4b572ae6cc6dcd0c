//! Interactions domain: attack edge tracking.

use bevy::prelude::*;

/// Remembers whether attack was held last frame so a swing fires once per press
#[derive(Resource, Debug, Default)]
pub struct AttackState {
    was_attacking: bool,
}

impl AttackState {
    /// Feed this frame's attack flag; true on the frame the press starts
    pub fn press(&mut self, attacking: bool) -> bool {
        let started = attacking && !self.was_attacking;
        self.was_attacking = attacking;
        started
    }
}

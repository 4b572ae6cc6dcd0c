//! Combat domain: lives, cooldown-gated contact damage from traps and enemies.

mod components;
mod contact;
mod systems;


pub use components::{ContactCooldowns, DamageOutcome, Vitals};
pub use contact::tick_contacts;

use bevy::prelude::*;

use crate::combat::systems::apply_contact_damage;
use crate::core::SimulationSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_contact_damage.in_set(SimulationSet::Contacts));
    }
}

//! Combat domain: trap and enemy contact damage.

use crate::combat::{ContactCooldowns, DamageOutcome, Vitals};
use crate::content::ContactDefaults;
use crate::core::{DamageSource, MazeEvent};
use crate::grid::TileKind;
use crate::movement::{CollisionResolver, Player};

/// Advance both cooldowns by `dt`, then apply trap and enemy contact.
///
/// A trap hurts whenever its cooldown has run out. Enemy contact works the
/// same while it lasts, but stepping off the enemy zeroes the enemy cooldown,
/// so touching an enemy again hurts at once.
pub fn tick_contacts(
    dt: f32,
    player: &Player,
    vitals: &mut Vitals,
    cooldowns: &mut ContactCooldowns,
    resolver: &CollisionResolver,
    tuning: &ContactDefaults,
) -> Vec<MazeEvent> {
    cooldowns.tick(dt);
    let mut events = Vec::new();

    let on_trap = resolver.kind_at(player.sample(tuning.trap_probe)) == Some(TileKind::Trap);
    if on_trap && cooldowns.trap <= 0.0 {
        hit(vitals, tuning.damage, DamageSource::Trap, &mut events);
        cooldowns.trap = tuning.trap_cooldown;
    }

    let on_enemy = resolver.kind_at(player.sample(tuning.enemy_probe)) == Some(TileKind::Enemy);
    if on_enemy {
        if cooldowns.enemy <= 0.0 {
            hit(vitals, tuning.damage, DamageSource::Enemy, &mut events);
            cooldowns.enemy = tuning.enemy_cooldown;
        }
    } else {
        cooldowns.enemy = 0.0;
    }

    events
}

fn hit(vitals: &mut Vitals, damage: i32, source: DamageSource, events: &mut Vec<MazeEvent>) {
    let outcome = vitals.take_damage(damage);
    if outcome != DamageOutcome::AlreadyDepleted {
        events.push(MazeEvent::DamageTaken {
            source,
            lives: vitals.lives,
        });
    }
    if outcome.is_game_over() {
        events.push(MazeEvent::GameOver);
    }
}

//! Combat domain: per-frame contact damage.

use bevy::prelude::*;

use crate::combat::{ContactCooldowns, Vitals, tick_contacts};
use crate::content::GameplayDefaults;
use crate::core::MazeEvent;
use crate::grid::TileGrid;
use crate::movement::{CollisionResolver, Player};

pub(crate) fn apply_contact_damage(
    time: Res<Time>,
    grid: Res<TileGrid>,
    defaults: Res<GameplayDefaults>,
    mut query: Query<(&Player, &mut Vitals, &mut ContactCooldowns)>,
    mut events: MessageWriter<MazeEvent>,
) {
    let Ok((player, mut vitals, mut cooldowns)) = query.single_mut() else {
        return;
    };

    let resolver = CollisionResolver::new(&grid, defaults.tile_size, &defaults.collision);
    let hits = tick_contacts(
        time.delta_secs(),
        player,
        &mut vitals,
        &mut cooldowns,
        &resolver,
        &defaults.contact,
    );

    for event in hits {
        if let MazeEvent::DamageTaken { source, lives } = event {
            info!("[COMBAT] {:?} hit the player, {} lives left", source, lives);
        }
        events.write(event);
    }
}

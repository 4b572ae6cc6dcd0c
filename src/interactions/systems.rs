//! Interactions domain: per-frame pickup, melee, and exit resolution.

use bevy::prelude::*;

use crate::combat::Vitals;
use crate::content::GameplayDefaults;
use crate::core::MazeEvent;
use crate::grid::TileGrid;
use crate::interactions::{AttackState, collect_pickup, exit_probe, sweep_enemies, try_open_exit};
use crate::levels::{ActiveLevel, LevelSession};
use crate::movement::{MovementInput, Player, world_to_tile};

pub(crate) fn resolve_interactions(
    input: Res<MovementInput>,
    defaults: Res<GameplayDefaults>,
    active: Res<ActiveLevel>,
    mut grid: ResMut<TileGrid>,
    mut session: ResMut<LevelSession>,
    mut attack: ResMut<AttackState>,
    mut query: Query<(&mut Player, &mut Vitals)>,
    mut events: MessageWriter<MazeEvent>,
) {
    let Ok((mut player, mut vitals)) = query.single_mut() else {
        return;
    };

    let tile_size = defaults.tile_size;
    let pickup_tile = world_to_tile(player.sample(defaults.contact.pickup_probe), tile_size);

    if let Some(event) = collect_pickup(
        pickup_tile,
        &mut grid,
        &mut player,
        &mut vitals,
        &mut session,
        &defaults.pickups,
    ) {
        info!("[PICKUP] {:?} at {}", event, pickup_tile);
        events.write(event);
    }

    if attack.press(input.attack) {
        events.write(MazeEvent::AttackSwing);
    }
    if input.attack {
        let defeated = sweep_enemies(&mut grid, pickup_tile);
        if !defeated.is_empty() {
            info!("[COMBAT] Swing defeated {} enemies", defeated.len());
        }
        for event in defeated {
            events.write(event);
        }
    }

    let exit_tile = world_to_tile(exit_probe(player.position, &active.exit_zones), tile_size);
    if let Some(event) = try_open_exit(exit_tile, &mut grid, &player, &mut session) {
        info!("[TRANSITION] Exit opened on level {}", session.level);
        events.write(event);
    }
}

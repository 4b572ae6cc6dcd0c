//! Interactions domain: pickups, melee, and the exit check.

use bevy::prelude::*;

use crate::combat::Vitals;
use crate::content::{ExitZone, PickupDefaults};
use crate::core::MazeEvent;
use crate::grid::{TileGrid, TileKind};
use crate::levels::LevelSession;
use crate::movement::Player;

/// Consume whatever pickup sits on `tile` and apply its effect.
///
/// A heart is always consumed but only heals below the life cap.
pub fn collect_pickup(
    tile: IVec2,
    grid: &mut TileGrid,
    player: &mut Player,
    vitals: &mut Vitals,
    session: &mut LevelSession,
    tuning: &PickupDefaults,
) -> Option<MazeEvent> {
    match grid.get(tile)? {
        TileKind::Key => {
            player.has_key = true;
            session.collect_key();
            grid.remove_key(tile)
        }
        TileKind::Heart => {
            if vitals.can_heal() {
                vitals.heal(tuning.heart_heal.min(vitals.max_lives - vitals.lives));
            }
            grid.remove_heart(tile)
        }
        TileKind::Lemon => {
            player.speed *= tuning.lemon_speed_multiplier;
            grid.remove_lemon(tile)
        }
        _ => None,
    }
}

/// Remove every enemy in the 3x3 block centred on `center`
pub fn sweep_enemies(grid: &mut TileGrid, center: IVec2) -> Vec<MazeEvent> {
    let mut defeated = Vec::new();
    for dx in -1..=1 {
        for dy in -1..=1 {
            let pos = center + IVec2::new(dx, dy);
            if grid.is(pos, TileKind::Enemy) {
                defeated.extend(grid.remove_enemy(pos));
            }
        }
    }
    defeated
}

/// Point tested against the exit tile: the player's origin, shifted by the
/// first zone containing it
pub fn exit_probe(position: Vec2, zones: &[ExitZone]) -> Vec2 {
    zones
        .iter()
        .find(|zone| zone.contains(position))
        .map_or(position, |zone| position + zone.shift.vec2())
}

/// Open the exit at `tile` if the player carries a key.
/// Opening removes the exit tile and starts the session's exit grace.
pub fn try_open_exit(
    tile: IVec2,
    grid: &mut TileGrid,
    player: &Player,
    session: &mut LevelSession,
) -> Option<MazeEvent> {
    if !player.has_key || !grid.is(tile, TileKind::Exit) || !session.begin_exit() {
        return None;
    }
    grid.remove_exit(tile)
}

//! Render domain: tile sprites, the player sprite, and camera follow.

use bevy::prelude::*;

use crate::combat::Vitals;
use crate::content::GameplayDefaults;
use crate::grid::TileGrid;
use crate::levels::ActiveLevel;
use crate::movement::Player;
use crate::render::{DamageFlicker, TileSprite, tile_center, tile_color};

const TILE_Z: f32 = 0.0;
const PLAYER_Z: f32 = 10.0;
const PLAYER_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);

/// Rebuild the tile sprites whenever a level is (re)loaded
pub(crate) fn respawn_tile_sprites(
    mut commands: Commands,
    active: Res<ActiveLevel>,
    defaults: Res<GameplayDefaults>,
    grid: Res<TileGrid>,
    existing: Query<Entity, With<TileSprite>>,
) {
    if !active.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let tile_size = defaults.tile_size;
    for (pos, kind) in grid.iter() {
        commands.spawn((
            TileSprite { pos, kind },
            Sprite {
                color: tile_color(kind),
                custom_size: Some(Vec2::splat(tile_size)),
                ..default()
            },
            Transform::from_translation(tile_center(pos, tile_size).extend(TILE_Z)),
        ));
    }
    debug!(
        "[RENDER] Spawned {} tile sprites for level {}",
        grid.width() * grid.height(),
        active.number
    );
}

/// Recolor cells whose kind changed since the last frame
pub(crate) fn sync_tile_sprites(
    grid: Res<TileGrid>,
    mut tiles: Query<(&mut TileSprite, &mut Sprite)>,
) {
    for (mut tile, mut sprite) in &mut tiles {
        let Some(kind) = grid.get(tile.pos) else {
            continue;
        };
        if kind != tile.kind {
            tile.kind = kind;
            sprite.color = tile_color(kind);
        }
    }
}

pub(crate) fn attach_player_sprite(
    mut commands: Commands,
    players: Query<(Entity, &Player), Added<Player>>,
) {
    for (entity, player) in &players {
        commands.entity(entity).insert((
            Sprite {
                color: PLAYER_COLOR,
                custom_size: Some(player.size),
                ..default()
            },
            Transform::from_translation(player_center(player).extend(PLAYER_Z)),
            Visibility::default(),
            DamageFlicker::default(),
        ));
    }
}

fn player_center(player: &Player) -> Vec2 {
    player.position + player.size / 2.0
}

pub(crate) fn sync_player_transform(mut players: Query<(&Player, &mut Transform)>) {
    for (player, mut transform) in &mut players {
        let center = player_center(player);
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}

/// Blink the player while recently damaged, then clear the flag
pub(crate) fn update_damage_flicker(
    time: Res<Time>,
    defaults: Res<GameplayDefaults>,
    mut players: Query<(&mut Vitals, &mut DamageFlicker, &mut Visibility), With<Player>>,
) {
    let level = &defaults.level;
    for (mut vitals, mut flicker, mut visibility) in &mut players {
        if !vitals.damaged {
            if flicker.elapsed > 0.0 {
                flicker.reset();
            }
            *visibility = Visibility::Inherited;
            continue;
        }

        let frame = flicker.advance(
            time.delta_secs(),
            level.damage_flicker_duration,
            level.damage_flicker_period,
        );
        *visibility = if frame.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if frame.finished {
            vitals.damaged = false;
        }
    }
}

pub(crate) fn camera_follow(
    players: Query<&Player>,
    mut cameras: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let (Ok(player), Ok(mut camera)) = (players.single(), cameras.single_mut()) else {
        return;
    };
    let center = player_center(player);
    camera.translation.x = center.x;
    camera.translation.y = center.y;
}

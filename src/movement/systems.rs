//! Movement domain: input sampling and grid-constrained locomotion.

use bevy::prelude::*;

use crate::content::GameplayDefaults;
use crate::grid::{Direction, TileGrid};
use crate::movement::{CollisionResolver, MovementInput, Player, try_move};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.attack = keyboard.pressed(KeyCode::KeyZ) || keyboard.pressed(KeyCode::Space);
}

/// Direction requested on one axis, if any
fn axis_direction(value: f32, negative: Direction, positive: Direction) -> Option<Direction> {
    if value < 0.0 {
        Some(negative)
    } else if value > 0.0 {
        Some(positive)
    } else {
        None
    }
}

/// Apply the frame's movement request, horizontal first so the player slides
/// along walls instead of sticking to them.
pub(crate) fn apply_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    grid: Res<TileGrid>,
    defaults: Res<GameplayDefaults>,
    mut query: Query<&mut Player>,
) {
    let Ok(mut player) = query.single_mut() else {
        return;
    };

    let amount = player.speed * time.delta_secs();
    if amount <= 0.0 {
        return;
    }

    let resolver = CollisionResolver::new(&grid, defaults.tile_size, &defaults.collision);
    let steps = [
        axis_direction(input.axis.x, Direction::Left, Direction::Right),
        axis_direction(input.axis.y, Direction::Down, Direction::Up),
    ];

    for direction in steps.into_iter().flatten() {
        try_move(
            &mut player,
            direction,
            amount,
            &resolver,
            &defaults.edge_probes,
        );
    }
}

//! Enemies domain: tests for the interval gate and the stepping pass.

use std::time::Duration;

use bevy::prelude::IVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::grid::{Direction, TileGrid, TileKind};

fn enemies(grid: &TileGrid) -> Vec<IVec2> {
    grid.iter()
        .filter(|&(_, kind)| kind == TileKind::Enemy)
        .map(|(pos, _)| pos)
        .collect()
}

// -----------------------------------------------------------------------------
// Interval tests
// -----------------------------------------------------------------------------

#[test]
fn test_first_tick_steps_immediately() {
    let stepper = EnemyStepper::new(Duration::from_millis(250));
    assert!(stepper.is_due(Duration::ZERO));
    assert!(stepper.is_due(Duration::from_secs(100)));
}

#[test]
fn test_steps_at_most_once_per_interval() {
    let mut stepper = EnemyStepper::new(Duration::from_millis(250));
    let mut grid = TileGrid::new(3, 3);
    grid.set_tile(IVec2::new(1, 1), TileKind::Enemy);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    assert!(stepper.tick(Duration::from_millis(1000), &mut grid, &mut rng).is_some());
    assert!(stepper.tick(Duration::from_millis(1100), &mut grid, &mut rng).is_none());
    assert!(stepper.tick(Duration::from_millis(1249), &mut grid, &mut rng).is_none());
    assert!(stepper.tick(Duration::from_millis(1250), &mut grid, &mut rng).is_some());

    stepper.reset();
    assert!(stepper.is_due(Duration::from_millis(1251)));
}

// -----------------------------------------------------------------------------
// Stepping tests
// -----------------------------------------------------------------------------

#[test]
fn test_enemy_never_leaves_onto_non_floor() {
    let mut grid = TileGrid::new(3, 3);
    grid.set_tile(IVec2::new(1, 1), TileKind::Enemy);
    grid.set_tile(IVec2::new(1, 2), TileKind::Wall);
    grid.set_tile(IVec2::new(1, 0), TileKind::Trap);
    grid.set_tile(IVec2::new(0, 1), TileKind::Key);
    grid.set_tile(IVec2::new(2, 1), TileKind::Exit);
    let before = grid.clone();

    for direction in Direction::ALL {
        assert_eq!(step_enemies(&mut grid, || direction), 0);
    }
    assert_eq!(grid, before);
}

#[test]
fn test_enemy_stays_inside_grid() {
    let mut grid = TileGrid::new(1, 1);
    grid.set_tile(IVec2::ZERO, TileKind::Enemy);

    for direction in Direction::ALL {
        assert_eq!(step_enemies(&mut grid, || direction), 0);
    }
    assert_eq!(grid.get(IVec2::ZERO), Some(TileKind::Enemy));
}

#[test]
fn test_enemy_moving_ahead_in_scan_order_is_visited_again() {
    let mut grid = TileGrid::new(1, 3);
    grid.set_tile(IVec2::new(0, 0), TileKind::Enemy);

    let moved = step_enemies(&mut grid, || Direction::Up);

    assert_eq!(moved, 2);
    assert_eq!(enemies(&grid), vec![IVec2::new(0, 2)]);
}

#[test]
fn test_enemy_can_enter_cell_vacated_this_pass() {
    let mut grid = TileGrid::new(3, 1);
    grid.set_tile(IVec2::new(1, 0), TileKind::Enemy);
    grid.set_tile(IVec2::new(2, 0), TileKind::Enemy);

    let moved = step_enemies(&mut grid, || Direction::Left);

    assert_eq!(moved, 2);
    assert_eq!(enemies(&grid), vec![IVec2::new(0, 0), IVec2::new(1, 0)]);
}

#[test]
fn test_random_steps_only_swap_enemy_and_floor() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut grid = TileGrid::new(8, 8);
    for pos in grid.positions().collect::<Vec<_>>() {
        let kind = TileKind::ALL[rng.random_range(0..TileKind::ALL.len())];
        grid.set_tile(pos, kind);
    }
    let enemy_count = grid.enemy_count();
    let mut stepper = EnemyStepper::new(Duration::from_millis(250));

    for step in 0..200u64 {
        let before = grid.clone();
        stepper.tick(Duration::from_millis(step * 250), &mut grid, &mut rng);

        assert_eq!(grid.enemy_count(), enemy_count);
        for (pos, kind) in grid.iter() {
            let old = before.get(pos);
            if old != Some(kind) {
                // Only floor and enemy cells ever change
                assert!(matches!(old, Some(TileKind::Floor | TileKind::Enemy)));
                assert!(matches!(kind, TileKind::Floor | TileKind::Enemy));
            }
        }
    }
}

//! Interactions domain: tests for pickups, melee sweeps, and the exit check.

use std::path::Path;

use bevy::prelude::{IVec2, Vec2};

use super::*;
use crate::combat::Vitals;
use crate::content::{ExitZone, GameplayDefaults, LevelCatalog, Offset, parse_ron};
use crate::core::MazeEvent;
use crate::grid::{TileGrid, TileKind};
use crate::levels::{ASSETS_DIR, LevelPhase, LevelSession, read_catalog_level};
use crate::movement::{CollisionResolver, Player, world_to_tile};

struct Scene {
    grid: TileGrid,
    player: Player,
    vitals: Vitals,
    session: LevelSession,
    defaults: GameplayDefaults,
}

fn scene(entries: &[(i32, i32, TileKind)]) -> Scene {
    let defaults = GameplayDefaults::default();
    let mut grid = TileGrid::new(6, 6);
    for &(x, y, kind) in entries {
        grid.set_tile(IVec2::new(x, y), kind);
    }
    Scene {
        grid,
        player: Player::new(Vec2::new(64.0, 64.0), &defaults.player),
        vitals: Vitals::new(5, 5),
        session: LevelSession::new(1, 5),
        defaults,
    }
}

impl Scene {
    fn collect(&mut self, tile: IVec2) -> Option<MazeEvent> {
        collect_pickup(
            tile,
            &mut self.grid,
            &mut self.player,
            &mut self.vitals,
            &mut self.session,
            &self.defaults.pickups,
        )
    }
}

// -----------------------------------------------------------------------------
// Pickup tests
// -----------------------------------------------------------------------------

#[test]
fn test_key_pickup() {
    let mut scene = scene(&[(1, 1, TileKind::Key)]);

    assert_eq!(scene.collect(IVec2::new(1, 1)), Some(MazeEvent::KeyPickedUp));
    assert!(scene.player.has_key);
    assert_eq!(scene.session.keys_collected, 1);
    assert_eq!(scene.grid.get(IVec2::new(1, 1)), Some(TileKind::Floor));
}

#[test]
fn test_heart_heals_below_cap() {
    let mut scene = scene(&[(1, 1, TileKind::Heart)]);
    scene.vitals.lives = 3;

    assert_eq!(scene.collect(IVec2::new(1, 1)), Some(MazeEvent::HeartPickedUp));
    assert_eq!(scene.vitals.lives, 4);
}

#[test]
fn test_heart_at_cap_is_consumed_without_healing() {
    let mut scene = scene(&[(1, 1, TileKind::Heart)]);

    assert_eq!(scene.collect(IVec2::new(1, 1)), Some(MazeEvent::HeartPickedUp));
    assert_eq!(scene.vitals.lives, 5);
    assert_eq!(scene.grid.get(IVec2::new(1, 1)), Some(TileKind::Floor));
}

#[test]
fn test_lemons_stack() {
    let mut scene = scene(&[(1, 1, TileKind::Lemon), (2, 1, TileKind::Lemon)]);

    scene.collect(IVec2::new(1, 1));
    scene.collect(IVec2::new(2, 1));

    assert!((scene.player.speed - 375.0 * 1.5 * 1.5).abs() < 1e-3);
}

#[test]
fn test_non_pickup_tiles_are_left_alone() {
    let mut scene = scene(&[(1, 1, TileKind::Trap), (2, 1, TileKind::Exit)]);
    let before = scene.grid.clone();

    assert_eq!(scene.collect(IVec2::new(1, 1)), None);
    assert_eq!(scene.collect(IVec2::new(2, 1)), None);
    assert_eq!(scene.collect(IVec2::new(0, 0)), None);
    assert_eq!(scene.collect(IVec2::new(-3, 9)), None);
    assert_eq!(scene.grid, before);
}

// -----------------------------------------------------------------------------
// Melee tests
// -----------------------------------------------------------------------------

#[test]
fn test_sweep_clears_three_by_three() {
    let mut grid = TileGrid::new(6, 6);
    for pos in [IVec2::new(1, 1), IVec2::new(2, 2), IVec2::new(3, 3), IVec2::new(4, 4)] {
        grid.set_tile(pos, TileKind::Enemy);
    }
    grid.set_tile(IVec2::new(1, 3), TileKind::Wall);

    let defeated = sweep_enemies(&mut grid, IVec2::new(2, 2));

    assert_eq!(defeated, vec![MazeEvent::EnemyDefeated; 3]);
    assert_eq!(grid.enemy_count(), 1);
    assert_eq!(grid.get(IVec2::new(4, 4)), Some(TileKind::Enemy));
    assert_eq!(grid.get(IVec2::new(1, 3)), Some(TileKind::Wall));
}

#[test]
fn test_sweep_at_grid_corner() {
    let mut grid = TileGrid::new(2, 2);
    grid.set_tile(IVec2::new(0, 0), TileKind::Enemy);

    assert_eq!(sweep_enemies(&mut grid, IVec2::ZERO).len(), 1);
}

#[test]
fn test_attack_swing_fires_on_press_only() {
    let mut attack = AttackState::default();

    assert!(attack.press(true));
    assert!(!attack.press(true));
    assert!(!attack.press(false));
    assert!(attack.press(true));
}

// -----------------------------------------------------------------------------
// Exit tests
// -----------------------------------------------------------------------------

#[test]
fn test_exit_requires_key() {
    let mut scene = scene(&[(1, 1, TileKind::Exit)]);
    let exit = IVec2::new(1, 1);

    assert_eq!(
        try_open_exit(exit, &mut scene.grid, &scene.player, &mut scene.session),
        None
    );
    assert_eq!(scene.grid.get(exit), Some(TileKind::Exit));
    assert_eq!(scene.session.phase, LevelPhase::Playing);

    scene.player.has_key = true;
    scene.session.collect_key();
    assert_eq!(
        try_open_exit(exit, &mut scene.grid, &scene.player, &mut scene.session),
        Some(MazeEvent::ExitOpened)
    );
    assert_eq!(scene.grid.get(exit), Some(TileKind::Floor));
    assert_eq!(scene.session.phase, LevelPhase::Exiting);
    assert_eq!(scene.session.keys_collected, 0);
}

#[test]
fn test_exit_ignores_non_exit_tiles() {
    let mut scene = scene(&[]);
    scene.player.has_key = true;

    assert_eq!(
        try_open_exit(IVec2::new(1, 1), &mut scene.grid, &scene.player, &mut scene.session),
        None
    );
    assert_eq!(scene.session.phase, LevelPhase::Playing);
}

#[test]
fn test_first_matching_exit_zone_wins() {
    let zones = [
        ExitZone {
            min: Offset::new(2400.0, 550.0),
            max: Offset::new(2500.0, 600.0),
            shift: Offset::new(64.0, 0.0),
        },
        ExitZone {
            min: Offset::new(0.0, 1250.0),
            max: Offset::new(100.0, 1300.0),
            shift: Offset::new(0.0, 64.0),
        },
        ExitZone {
            min: Offset::new(0.0, 0.0),
            max: Offset::new(5000.0, 5000.0),
            shift: Offset::new(-1.0, -1.0),
        },
    ];

    assert_eq!(
        exit_probe(Vec2::new(2450.0, 575.0), &zones),
        Vec2::new(2514.0, 575.0)
    );
    assert_eq!(
        exit_probe(Vec2::new(50.0, 1260.0), &zones),
        Vec2::new(50.0, 1324.0)
    );
    assert_eq!(exit_probe(Vec2::new(10.0, 10.0), &zones), Vec2::new(9.0, 9.0));
    assert_eq!(
        exit_probe(Vec2::new(-5.0, 10.0), &zones),
        Vec2::new(-5.0, 10.0)
    );
    assert_eq!(exit_probe(Vec2::new(7.0, 7.0), &[]), Vec2::new(7.0, 7.0));
}

#[test]
fn test_shipped_exit_zone_reaches_exit_from_corridor() {
    let defaults = GameplayDefaults::default();
    let catalog: LevelCatalog =
        parse_ron("levels.ron", include_str!("../../assets/data/levels.ron")).unwrap();
    let level = read_catalog_level(&catalog, 1, Path::new(ASSETS_DIR)).unwrap();

    // Pressed against the east wall, level with the exit
    let position = Vec2::new(650.0, 200.0);
    let resolver = CollisionResolver::new(&level.grid, defaults.tile_size, &defaults.collision);
    assert!(!resolver.is_blocked(position));
    assert_eq!(world_to_tile(position, defaults.tile_size), IVec2::new(10, 3));

    let probe = exit_probe(position, &level.exit_zones);
    assert_eq!(
        level.grid.get(world_to_tile(probe, defaults.tile_size)),
        Some(TileKind::Exit)
    );
}

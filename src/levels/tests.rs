//! Levels domain: tests for the session phases, pickup placement, and level loading.

use std::path::{Path, PathBuf};

use bevy::prelude::{Entity, IVec2, Vec2};
use bevy::window::FileDragAndDrop;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::combat::{ContactCooldowns, Vitals};
use crate::content::{GameplayDefaults, LevelCatalog, default_catalog, parse_ron};
use crate::core::LevelRequest;
use crate::grid::{TileGrid, TileKind};
use crate::movement::Player;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(99)
}

fn shipped_catalog() -> LevelCatalog {
    parse_ron("levels.ron", include_str!("../../assets/data/levels.ron")).unwrap()
}

// -----------------------------------------------------------------------------
// LevelSession tests
// -----------------------------------------------------------------------------

#[test]
fn test_begin_exit_resets_keys() {
    let mut session = LevelSession::new(1, 5);
    session.collect_key();
    session.collect_key();

    assert!(session.begin_exit());
    assert!(session.is_exiting());
    assert_eq!(session.keys_collected, 0);

    // Already exiting
    assert!(!session.begin_exit());
}

#[test]
fn test_exit_grace_then_advance() {
    let mut session = LevelSession::new(2, 5);
    assert_eq!(session.tick(5.0, 1.0), None);

    session.begin_exit();
    assert_eq!(session.tick(0.5, 1.0), None);
    assert_eq!(
        session.tick(0.5, 1.0),
        Some(LevelTransition::Advance { next_level: 3 })
    );
    // The timer restarts so a failed load is retried after another delay
    assert_eq!(session.exit_elapsed, 0.0);
    assert_eq!(session.tick(0.2, 1.0), None);
}

#[test]
fn test_exit_from_last_level_is_victory() {
    let mut session = LevelSession::new(5, 5);
    session.begin_exit();

    assert_eq!(session.tick(1.0, 1.0), Some(LevelTransition::Victory));
    assert_eq!(session.phase, LevelPhase::Victory);
    assert_eq!(session.tick(1.0, 1.0), None);
}

#[test]
fn test_game_over_is_sticky() {
    let mut session = LevelSession::new(1, 5);

    assert!(session.game_over());
    assert!(!session.game_over());
    assert!(!session.begin_exit());
    assert_eq!(session.phase, LevelPhase::GameOver);
}

#[test]
fn test_enter_level_rearms_pickups() {
    let mut session = LevelSession::new(1, 5);
    session.heart_placed = true;
    session.lemon_placed = true;
    session.collect_key();
    session.game_over();

    session.enter_level(2);

    assert_eq!(session, LevelSession::new(2, 5));
}

// -----------------------------------------------------------------------------
// Placement tests
// -----------------------------------------------------------------------------

fn one_floor_grid() -> TileGrid {
    let mut grid = TileGrid::new(3, 3);
    for pos in grid.positions().collect::<Vec<_>>() {
        grid.set_tile(pos, TileKind::Wall);
    }
    grid.set_tile(IVec2::new(2, 1), TileKind::Floor);
    grid
}

#[test]
fn test_heart_lands_on_the_only_floor_cell() {
    let mut grid = one_floor_grid();

    let pos = place_pickup(&mut grid, TileKind::Heart, 64, &mut rng());

    assert_eq!(pos, Some(IVec2::new(2, 1)));
    assert_eq!(grid.get(IVec2::new(2, 1)), Some(TileKind::Heart));
    assert_eq!(grid.count(TileKind::Wall), 8);
}

#[test]
fn test_placement_falls_back_to_scan() {
    let mut grid = one_floor_grid();

    // No random samples at all
    let pos = place_pickup(&mut grid, TileKind::Lemon, 0, &mut rng());
    assert_eq!(pos, Some(IVec2::new(2, 1)));
}

#[test]
fn test_placement_without_floor_gives_up() {
    let mut grid = one_floor_grid();
    grid.set_tile(IVec2::new(2, 1), TileKind::Trap);
    let before = grid.clone();
    let mut placed = false;

    let outcome = roll_pickup(&mut placed, 1.0, &mut grid, TileKind::Heart, 64, &mut rng());

    assert_eq!(outcome, PlacementOutcome::NoFloor);
    assert!(placed);
    assert_eq!(grid, before);
    assert_eq!(place_pickup(&mut TileGrid::default(), TileKind::Heart, 64, &mut rng()), None);
}

#[test]
fn test_roll_respects_chance_and_flag() {
    let mut grid = TileGrid::new(4, 4);
    let mut rng = rng();
    let mut placed = false;

    assert_eq!(
        roll_pickup(&mut placed, 0.0, &mut grid, TileKind::Heart, 64, &mut rng),
        PlacementOutcome::Skipped
    );
    assert_eq!(
        roll_pickup(&mut placed, f64::NAN, &mut grid, TileKind::Heart, 64, &mut rng),
        PlacementOutcome::Skipped
    );
    assert!(!placed);

    let outcome = roll_pickup(&mut placed, 7.0, &mut grid, TileKind::Heart, 64, &mut rng);
    assert!(matches!(outcome, PlacementOutcome::Placed(_)));
    assert!(placed);
    assert_eq!(grid.count(TileKind::Heart), 1);

    assert_eq!(
        roll_pickup(&mut placed, 1.0, &mut grid, TileKind::Heart, 64, &mut rng),
        PlacementOutcome::AlreadyPlaced
    );
    assert_eq!(grid.count(TileKind::Heart), 1);
}

// -----------------------------------------------------------------------------
// Loading tests
// -----------------------------------------------------------------------------

#[test]
fn test_build_level_finds_entry() {
    let level = build_level(
        4,
        Path::new("maps/test.properties"),
        r#"{"0,0": 1, "5,5": 2, "2,2": 3}"#,
        Vec::new(),
    )
    .unwrap();

    assert_eq!(level.number, 4);
    assert_eq!(level.entry, IVec2::new(0, 0));
    assert_eq!(level.grid.size(), IVec2::new(6, 6));
}

#[test]
fn test_missing_entry_is_its_own_error() {
    let err = build_level(1, Path::new("no-entry.properties"), "0,0=0\n3,3=2", Vec::new())
        .unwrap_err();
    assert!(matches!(err, LevelLoadError::MissingEntry { .. }));
    assert_eq!(err.to_string(), "level file no-entry.properties has no entry tile");
}

#[test]
fn test_malformed_level_reports_layout_error() {
    let err = build_level(1, Path::new("bad.properties"), "0,0=1\nzz", Vec::new()).unwrap_err();
    assert!(matches!(err, LevelLoadError::Layout { .. }));
}

#[test]
fn test_unreadable_and_unknown_levels() {
    let err = read_level(1, Path::new("missing/level.properties"), Vec::new()).unwrap_err();
    assert!(matches!(err, LevelLoadError::Io { .. }));

    let err = read_catalog_level(&default_catalog(), 42, Path::new(ASSETS_DIR)).unwrap_err();
    assert!(matches!(err, LevelLoadError::UnknownLevel(42)));
}

#[test]
fn test_level_number_from_file_name() {
    assert_eq!(level_number_from_path(Path::new("maps/level-3.properties")), Some(3));
    assert_eq!(level_number_from_path(Path::new("level12b4.txt")), Some(124));
    assert_eq!(level_number_from_path(Path::new("/tmp/2024/maze.properties")), None);
    assert_eq!(level_number_from_path(Path::new("")), None);
}

#[test]
fn test_shipped_levels_are_playable() {
    let catalog = shipped_catalog();

    for def in &catalog.levels {
        let level = read_catalog_level(&catalog, def.number, Path::new(ASSETS_DIR)).unwrap();
        assert_eq!(level.grid.count(TileKind::Exit), 1, "level {}", def.number);
        assert_eq!(level.grid.count(TileKind::Key), 1, "level {}", def.number);
        assert_eq!(level.exit_zones, def.exit_zones);
    }
}

#[test]
fn test_requests_pick_level_and_mode() {
    let catalog = shipped_catalog();
    let active = ActiveLevel::default();
    let root = Path::new(ASSETS_DIR);

    let (result, mode) =
        load_requested_level(&LevelRequest::Advance { level: 3 }, &catalog, &active, 2, root);
    assert_eq!(result.unwrap().number, 3);
    assert_eq!(mode, LoadMode::Continue);

    let (result, mode) = load_requested_level(&LevelRequest::Restart, &catalog, &active, 4, root);
    assert_eq!(result.unwrap().number, 1);
    assert_eq!(mode, LoadMode::Fresh);

    let (result, mode) =
        load_requested_level(&LevelRequest::ReloadCurrent, &catalog, &active, 4, root);
    assert_eq!(result.unwrap().number, 4);
    assert_eq!(mode, LoadMode::Fresh);

    let reload = LevelRequest::Reload {
        path: PathBuf::from("assets/maps/level-2.properties"),
    };
    let (result, mode) = load_requested_level(&reload, &catalog, &active, 5, root);
    let level = result.unwrap();
    assert_eq!(level.number, 2);
    assert_eq!(level.exit_zones.len(), 1);
    assert_eq!(mode, LoadMode::Fresh);
}

#[test]
fn test_dropped_file_becomes_reload_request() {
    let path = PathBuf::from("/home/player/mazes/level-4.properties");
    let dropped = FileDragAndDrop::DroppedFile {
        window: Entity::PLACEHOLDER,
        path_buf: path.clone(),
    };
    let hovered = FileDragAndDrop::HoveredFile {
        window: Entity::PLACEHOLDER,
        path_buf: path.clone(),
    };

    assert_eq!(
        dropped_level_request(&dropped),
        Some(LevelRequest::Reload { path })
    );
    assert_eq!(dropped_level_request(&hovered), None);
}

#[test]
fn test_reload_after_terminal_phase_starts_fresh_at_file_level() {
    let catalog = shipped_catalog();
    let active = ActiveLevel::default();
    let reload = LevelRequest::Reload {
        path: PathBuf::from("assets/maps/level-4.properties"),
    };

    let mut game_over = LevelSession::new(2, 5);
    game_over.game_over();
    let mut victory = LevelSession::new(5, 5);
    victory.begin_exit();
    victory.tick(1.0, 1.0);
    assert_eq!(victory.phase, LevelPhase::Victory);

    for mut session in [game_over, victory] {
        let (result, mode) =
            load_requested_level(&reload, &catalog, &active, session.level, Path::new(ASSETS_DIR));
        let level = result.unwrap();
        assert_eq!(level.number, 4);
        assert_eq!(mode, LoadMode::Fresh);

        session.enter_level(level.number);
        assert_eq!(session.phase, LevelPhase::Playing);
        assert_eq!(session.level, 4);
    }
}

// -----------------------------------------------------------------------------
// Carry-over tests
// -----------------------------------------------------------------------------

struct Carried {
    player: Player,
    vitals: Vitals,
    cooldowns: ContactCooldowns,
}

/// A player two hits from the end, mid-flicker, holding a key and a lemon
fn worn_player() -> Carried {
    let defaults = GameplayDefaults::default();
    let mut player = Player::new(Vec2::new(300.0, 300.0), &defaults.player);
    player.has_key = true;
    player.speed *= 1.5;
    let mut vitals = Vitals::new(5, 5);
    vitals.lives = 2;
    vitals.damaged = true;
    Carried {
        player,
        vitals,
        cooldowns: ContactCooldowns {
            trap: 0.7,
            enemy: 0.4,
        },
    }
}

fn load_into(mode: LoadMode, carried: &mut Carried) {
    let defaults = GameplayDefaults::default();
    apply_load(
        mode,
        &mut carried.player,
        &mut carried.vitals,
        &mut carried.cooldowns,
        Vec2::new(64.0, 64.0),
        &defaults.player,
    );
}

#[test]
fn test_advance_keeps_lives_and_resets_the_rest() {
    let mut carried = worn_player();

    load_into(LoadMode::Continue, &mut carried);

    assert_eq!(carried.vitals.lives, 2);
    assert_eq!(carried.vitals.max_lives, 5);
    assert!(!carried.vitals.damaged);
    assert_eq!(carried.cooldowns.trap, 0.0);
    assert_eq!(carried.cooldowns.enemy, 0.0);
    assert_eq!(carried.player.position, Vec2::new(64.0, 64.0));
    assert!(!carried.player.has_key);
    assert_eq!(carried.player.speed, 375.0);
}

#[test]
fn test_fresh_load_restores_full_lives() {
    let mut carried = worn_player();
    carried.vitals.lives = 0;

    load_into(LoadMode::Fresh, &mut carried);

    assert_eq!(carried.vitals.lives, 5);
    assert!(!carried.vitals.damaged);
    assert_eq!(carried.cooldowns.trap, 0.0);
    assert!(!carried.player.has_key);
}

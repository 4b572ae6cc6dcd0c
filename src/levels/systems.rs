//! Levels domain: loading, pickup placement, exit timing, and state sync.

use std::path::Path;

use bevy::prelude::*;
use bevy::window::FileDragAndDrop;

use crate::combat::{ContactCooldowns, Vitals};
use crate::content::{GameplayDefaults, LevelCatalog};
use crate::core::{GameRng, GameState, LevelClock, LevelRequest, MazeEvent};
use crate::enemies::EnemyStepper;
use crate::grid::{TileGrid, TileKind};
use crate::levels::{
    ASSETS_DIR, ActiveLevel, LevelPhase, LevelSession, LevelStatus, LevelTransition, LoadMode,
    PlacementOutcome, StartupLevel, apply_load, dropped_level_request, load_requested_level,
    roll_pickup,
};
use crate::movement::{Player, tile_origin};

pub(crate) fn request_first_level(
    startup: Res<StartupLevel>,
    mut requests: MessageWriter<LevelRequest>,
) {
    match &startup.0 {
        Some(path) => {
            info!("[LEVEL] Starting from external level {}", path.display());
            requests.write(LevelRequest::Reload { path: path.clone() });
        }
        None => {
            requests.write(LevelRequest::Restart);
        }
    }
}

/// Load any level file dropped onto the window, whatever the game state
pub(crate) fn reload_dropped_level(
    mut drops: MessageReader<FileDragAndDrop>,
    mut requests: MessageWriter<LevelRequest>,
) {
    for request in drops.read().filter_map(dropped_level_request) {
        if let LevelRequest::Reload { path } = &request {
            info!("[LEVEL] Reloading from dropped file {}", path.display());
        }
        requests.write(request);
    }
}

/// Roll for the heart and the lemon while they are still pending
pub(crate) fn place_pending_pickups(
    defaults: Res<GameplayDefaults>,
    mut session: ResMut<LevelSession>,
    mut grid: ResMut<TileGrid>,
    mut rng: ResMut<GameRng>,
) {
    if session.heart_placed && session.lemon_placed {
        return;
    }

    let pickups = &defaults.pickups;
    let session = &mut *session;
    let pending = [
        (&mut session.heart_placed, pickups.heart_chance, TileKind::Heart),
        (&mut session.lemon_placed, pickups.lemon_chance, TileKind::Lemon),
    ];

    for (placed, chance, kind) in pending {
        match roll_pickup(
            placed,
            chance,
            &mut grid,
            kind,
            pickups.placement_attempts,
            &mut rng.0,
        ) {
            PlacementOutcome::Placed(pos) => info!("[LEVEL] Placed {:?} at {}", kind, pos),
            PlacementOutcome::NoFloor => {
                warn!("[LEVEL] No floor left for {:?}, skipping it this level", kind)
            }
            PlacementOutcome::AlreadyPlaced | PlacementOutcome::Skipped => {}
        }
    }
}

/// Run the exit grace timer and catch depleted lives
pub(crate) fn advance_level_session(
    time: Res<Time>,
    defaults: Res<GameplayDefaults>,
    mut session: ResMut<LevelSession>,
    mut clock: ResMut<LevelClock>,
    vitals: Query<&Vitals>,
    mut requests: MessageWriter<LevelRequest>,
    mut events: MessageWriter<MazeEvent>,
) {
    let dt = time.delta_secs();
    clock.tick(dt);

    if vitals.iter().any(Vitals::is_depleted) && session.game_over() {
        warn!("[TRANSITION] Out of lives on level {}", session.level);
        return;
    }

    match session.tick(dt, defaults.level.exit_delay) {
        Some(LevelTransition::Advance { next_level }) => {
            info!("[TRANSITION] Level {} cleared, loading {}", session.level, next_level);
            requests.write(LevelRequest::Advance { level: next_level });
        }
        Some(LevelTransition::Victory) => {
            info!("[TRANSITION] Final level {} cleared", session.level);
            events.write(MazeEvent::Victory);
        }
        None => {}
    }
}

/// Mirror terminal session phases into the app state
pub(crate) fn sync_game_state(
    session: Res<LevelSession>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    match session.phase {
        LevelPhase::GameOver => next_state.set(GameState::GameOver),
        LevelPhase::Victory => next_state.set(GameState::Victory),
        LevelPhase::Playing | LevelPhase::Exiting => {}
    }
}

pub(crate) fn restart_on_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: MessageWriter<LevelRequest>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) || keyboard.just_pressed(KeyCode::Enter) {
        info!("[TRANSITION] Restart requested");
        requests.write(LevelRequest::Restart);
    }
}

/// Load the most recent level request of the frame.
/// A failed load leaves the current level untouched.
pub(crate) fn process_level_requests(
    mut commands: Commands,
    mut requests: MessageReader<LevelRequest>,
    catalog: Res<LevelCatalog>,
    defaults: Res<GameplayDefaults>,
    mut grid: ResMut<TileGrid>,
    mut session: ResMut<LevelSession>,
    mut active: ResMut<ActiveLevel>,
    mut status: ResMut<LevelStatus>,
    mut stepper: ResMut<EnemyStepper>,
    mut clock: ResMut<LevelClock>,
    mut players: Query<(&mut Player, &mut Vitals, &mut ContactCooldowns)>,
    mut next_state: ResMut<NextState<GameState>>,
    mut events: MessageWriter<MazeEvent>,
) {
    let Some(request) = requests.read().last() else {
        return;
    };

    let (result, mode) = load_requested_level(
        request,
        &catalog,
        &active,
        session.level,
        Path::new(ASSETS_DIR),
    );

    let level = match result {
        Ok(level) => level,
        Err(err) => {
            error!("[LEVEL] {}", err);
            status.last_error = Some(err.to_string());
            return;
        }
    };

    let origin = tile_origin(level.entry, defaults.tile_size);
    let player_defaults = &defaults.player;
    match players.single_mut() {
        Ok((mut player, mut vitals, mut cooldowns)) => apply_load(
            mode,
            &mut player,
            &mut vitals,
            &mut cooldowns,
            origin,
            player_defaults,
        ),
        Err(_) => {
            commands.spawn((
                Name::new("Player"),
                Player::new(origin, player_defaults),
                Vitals::new(player_defaults.starting_lives, player_defaults.max_lives),
                ContactCooldowns::default(),
            ));
        }
    }

    info!(
        "[LEVEL] Loaded level {} from {} ({}x{}, {} enemies, entry at {})",
        level.number,
        level.path.display(),
        level.grid.width(),
        level.grid.height(),
        level.grid.enemy_count(),
        level.entry
    );

    *grid = level.grid;
    session.last_level = catalog.last_level().max(level.number);
    session.enter_level(level.number);
    *active = ActiveLevel {
        number: level.number,
        path: Some(level.path),
        exit_zones: level.exit_zones,
    };
    status.last_error = None;
    stepper.reset();
    clock.reset();

    if mode == LoadMode::Continue {
        events.write(MazeEvent::LevelUp {
            level: level.number,
        });
    }
    next_state.set(GameState::Playing);
}

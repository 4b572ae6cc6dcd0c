//! Debug domain: hotkey handling and the info overlay.

use bevy::prelude::*;

use crate::combat::Vitals;
use crate::content::GameplayDefaults;
use crate::core::{GameState, LevelRequest, RunConfig};
use crate::debug::ui::{DebugInfoOverlay, DebugStatusMessage, spawn_debug_info_overlay};
use crate::debug::{DebugAction, DebugState};
use crate::grid::TileGrid;
use crate::levels::LevelSession;
use crate::movement::{Player, world_to_tile};

pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut players: Query<(&mut Player, &mut Vitals)>,
    mut requests: MessageWriter<LevelRequest>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    for action in DebugAction::ALL {
        if !keyboard.just_pressed(action.hotkey()) {
            continue;
        }

        let message = match action {
            DebugAction::GrantKey => match players.single_mut() {
                Ok((mut player, _)) => {
                    player.has_key = true;
                    "Key granted".to_string()
                }
                Err(_) => "No player to give a key to".to_string(),
            },
            DebugAction::ReloadLevel => {
                requests.write(LevelRequest::ReloadCurrent);
                "Reloading level".to_string()
            }
            DebugAction::RestoreLives => match players.single_mut() {
                Ok((_, mut vitals)) => {
                    vitals.lives = vitals.max_lives;
                    format!("Lives restored to {}", vitals.max_lives)
                }
                Err(_) => "No player to heal".to_string(),
            },
            DebugAction::ToggleInfo => {
                debug_state.show_info = !debug_state.show_info;
                if debug_state.show_info {
                    spawn_debug_info_overlay(&mut commands);
                    "Debug info ON".to_string()
                } else {
                    for entity in &existing_overlay {
                        commands.entity(entity).despawn();
                    }
                    "Debug info OFF".to_string()
                }
            }
        };

        info!("[DEBUG] {}", message);
        debug_state.set_message(message, 2.0);
    }
}

/// Update status message timer and mirror it into the status text
pub(crate) fn update_status_message(
    time: Res<Time>,
    mut debug_state: ResMut<DebugState>,
    mut query: Query<&mut Text, With<DebugStatusMessage>>,
) {
    debug_state.tick_message(time.delta_secs());

    let message = debug_state
        .status_message
        .as_ref()
        .map(|(message, _)| message.as_str())
        .unwrap_or("");
    for mut text in &mut query {
        if text.as_str() != message {
            **text = message.to_string();
        }
    }
}

/// Update the debug info overlay with current player state
pub(crate) fn update_debug_info_overlay(
    defaults: Res<GameplayDefaults>,
    run_config: Res<RunConfig>,
    state: Res<State<GameState>>,
    session: Res<LevelSession>,
    grid: Res<TileGrid>,
    player_query: Query<(&Player, &Vitals)>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let (Ok((player, vitals)), Ok(mut text)) = (player_query.single(), overlay_query.single_mut())
    else {
        return;
    };

    let tile = world_to_tile(player.position, defaults.tile_size);
    **text = format!(
        "Pos: ({:.0}, {:.0}) tile {}\nLives: {}/{}  Key: {}\nSpeed: {:.0}\nEnemies: {}\nSeed: {}\nState: {:?} / {:?}",
        player.position.x,
        player.position.y,
        tile,
        vitals.lives,
        vitals.max_lives,
        player.has_key,
        player.speed,
        grid.enemy_count(),
        run_config.seed,
        state.get(),
        session.phase
    );
}

//! Levels domain: level loading, the per-level session, pickup placement, and transitions.

mod lifecycle;
mod loading;
mod placement;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use lifecycle::{LevelPhase, LevelSession, LevelTransition};
pub use loading::{
    ASSETS_DIR, LevelLoadError, LoadMode, LoadedLevel, apply_load, build_level,
    dropped_level_request, level_number_from_path, load_requested_level, read_catalog_level,
    read_level,
};
pub use placement::{PlacementOutcome, place_pickup, roll_pickup};
pub use resources::{ActiveLevel, LevelStatus, StartupLevel};

pub(crate) use systems::process_level_requests;

use std::path::PathBuf;

use bevy::prelude::*;

use crate::content::LevelCatalog;
use crate::core::{GameState, SimulationSet};
use crate::levels::systems::{
    advance_level_session, place_pending_pickups, reload_dropped_level, request_first_level,
    restart_on_key, sync_game_state,
};

pub struct LevelsPlugin;

impl Plugin for LevelsPlugin {
    fn build(&self, app: &mut App) {
        let last_level = app
            .world()
            .get_resource::<LevelCatalog>()
            .map(LevelCatalog::last_level)
            .unwrap_or(1);
        let startup = StartupLevel(std::env::args().nth(1).map(PathBuf::from));

        app.insert_resource(LevelSession::new(1, last_level))
            .insert_resource(startup)
            .init_resource::<ActiveLevel>()
            .init_resource::<LevelStatus>()
            .add_systems(Startup, request_first_level)
            .add_systems(
                Update,
                (place_pending_pickups, advance_level_session, sync_game_state)
                    .chain()
                    .in_set(SimulationSet::Lifecycle),
            )
            .add_systems(Update, reload_dropped_level)
            .add_systems(
                Update,
                restart_on_key
                    .run_if(in_state(GameState::GameOver).or(in_state(GameState::Victory))),
            )
            .add_systems(
                Update,
                process_level_requests
                    .after(SimulationSet::Lifecycle)
                    .after(restart_on_key)
                    .after(reload_dropped_level),
            );
    }
}

//! UI domain: in-run HUD elements and the end-of-run screens.

mod end_screen;
mod hud_level;
mod hud_player;


pub use end_screen::end_screen_copy;
pub use hud_level::format_elapsed;
pub use hud_player::life_slot_filled;

use bevy::prelude::*;

use crate::core::GameState;
use crate::levels::process_level_requests;
use crate::ui::end_screen::{despawn_end_screen, handle_restart_button, spawn_end_screen};
use crate::ui::hud_level::{
    spawn_level_hud, update_elapsed_overlay, update_level_hud, update_load_error,
};
use crate::ui::hud_player::{spawn_player_hud, update_player_hud};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_player_hud, spawn_level_hud))
            .add_systems(
                Update,
                (
                    update_player_hud,
                    update_level_hud,
                    update_elapsed_overlay,
                    update_load_error,
                ),
            )
            .add_systems(
                Update,
                handle_restart_button
                    .before(process_level_requests)
                    .run_if(in_state(GameState::GameOver).or(in_state(GameState::Victory))),
            )
            .add_systems(OnEnter(GameState::GameOver), spawn_end_screen)
            .add_systems(OnEnter(GameState::Victory), spawn_end_screen)
            .add_systems(OnExit(GameState::GameOver), despawn_end_screen)
            .add_systems(OnExit(GameState::Victory), despawn_end_screen);
    }
}

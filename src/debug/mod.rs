//! Dev tooling for fast iteration on levels.
//!
//! Hotkeys:
//! - F1 grant the key
//! - F2 reload the current level
//! - F3 restore lives to the maximum
//! - F4 toggle the info overlay

mod state;
mod systems;
mod ui;


pub use state::{DebugAction, DebugState};
pub use ui::{DebugInfoOverlay, DebugStatusMessage};

use bevy::prelude::*;

use crate::debug::systems::{
    handle_debug_hotkeys, update_debug_info_overlay, update_status_message,
};
use crate::debug::ui::spawn_debug_status_message;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_debug_status_message)
            .add_systems(Update, (handle_debug_hotkeys, update_status_message).chain())
            .add_systems(
                Update,
                update_debug_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
            );
    }
}

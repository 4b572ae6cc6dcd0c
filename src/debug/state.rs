//! Debug domain: state and action definitions for dev hotkeys.

use bevy::prelude::*;

/// Resource tracking debug tooling state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay (position, tile, lives, seed) is visible
    pub show_info: bool,
    /// Message shown briefly after an action, with seconds left
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    /// Count down the status message and drop it once expired
    pub fn tick_message(&mut self, dt: f32) {
        if let Some((_, remaining)) = &mut self.status_message {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.status_message = None;
            }
        }
    }
}

/// Actions bound to dev hotkeys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    GrantKey,
    ReloadLevel,
    RestoreLives,
    ToggleInfo,
}

impl DebugAction {
    pub const ALL: [DebugAction; 4] = [
        DebugAction::GrantKey,
        DebugAction::ReloadLevel,
        DebugAction::RestoreLives,
        DebugAction::ToggleInfo,
    ];

    pub fn hotkey(self) -> KeyCode {
        match self {
            DebugAction::GrantKey => KeyCode::F1,
            DebugAction::ReloadLevel => KeyCode::F2,
            DebugAction::RestoreLives => KeyCode::F3,
            DebugAction::ToggleInfo => KeyCode::F4,
        }
    }
}

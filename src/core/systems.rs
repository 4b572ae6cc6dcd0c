//! Core domain: camera setup and the gameplay event sink.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::{DamageSource, MazeEvent};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Stand-in for the audio layer: every cue is logged so the event stream
/// stays observable without a sound backend.
pub(crate) fn log_maze_events(mut events: MessageReader<MazeEvent>) {
    for event in events.read() {
        match event {
            MazeEvent::DamageTaken { source, lives } => {
                let source = match source {
                    DamageSource::Trap => "trap",
                    DamageSource::Enemy => "enemy",
                };
                info!("[CUE] Hit by {}, {} lives left", source, lives);
            }
            MazeEvent::GameOver => info!("[CUE] Game over"),
            MazeEvent::LevelUp { level } => info!("[CUE] Level up -> {}", level),
            MazeEvent::Victory => info!("[CUE] Victory"),
            other => debug!("[CUE] {:?}", other),
        }
    }
}

//! Levels domain: resources describing the loaded level.

use std::path::PathBuf;

use bevy::prelude::*;

use crate::content::ExitZone;

/// The level currently in the grid
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveLevel {
    pub number: u32,
    /// File the grid was built from; `None` before the first successful load
    pub path: Option<PathBuf>,
    pub exit_zones: Vec<ExitZone>,
}

/// Outcome of the most recent load, for the HUD
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelStatus {
    pub last_error: Option<String>,
}

/// Level file passed on the command line, played instead of the first catalog level
#[derive(Resource, Debug, Clone, Default)]
pub struct StartupLevel(pub Option<PathBuf>);

//! Levels domain: turning level files and requests into ready-to-play levels.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use bevy::window::FileDragAndDrop;
use thiserror::Error;

use crate::combat::{ContactCooldowns, Vitals};
use crate::content::{ExitZone, LevelCatalog, PlayerDefaults};
use crate::core::LevelRequest;
use crate::grid::{LayoutError, TileGrid};
use crate::levels::ActiveLevel;
use crate::movement::Player;

/// Directory level map paths are resolved against
pub const ASSETS_DIR: &str = "assets";

#[derive(Debug, Error)]
pub enum LevelLoadError {
    #[error("could not read level file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("level file {path} is malformed: {source}")]
    Layout {
        path: PathBuf,
        #[source]
        source: LayoutError,
    },
    #[error("level file {path} has no entry tile")]
    MissingEntry { path: PathBuf },
    #[error("level {0} is not in the level catalog")]
    UnknownLevel(u32),
}

/// Whether the player carries their lives into the loaded level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Next level of a run: lives are kept, everything else resets
    Continue,
    /// New player with full lives
    Fresh,
}

/// A parsed level with its entry located, ready to replace the current one
#[derive(Debug, Clone)]
pub struct LoadedLevel {
    pub number: u32,
    pub path: PathBuf,
    pub grid: TileGrid,
    pub entry: IVec2,
    pub exit_zones: Vec<ExitZone>,
}

/// Build a level from raw text. Fails without side effects.
pub fn build_level(
    number: u32,
    path: &Path,
    source: &str,
    exit_zones: Vec<ExitZone>,
) -> Result<LoadedLevel, LevelLoadError> {
    let mut grid = TileGrid::default();
    grid.load_source(source).map_err(|source| LevelLoadError::Layout {
        path: path.to_path_buf(),
        source,
    })?;
    let entry = grid.find_entry().ok_or_else(|| LevelLoadError::MissingEntry {
        path: path.to_path_buf(),
    })?;

    Ok(LoadedLevel {
        number,
        path: path.to_path_buf(),
        grid,
        entry,
        exit_zones,
    })
}

/// Read and build a level file from disk
pub fn read_level(
    number: u32,
    path: &Path,
    exit_zones: Vec<ExitZone>,
) -> Result<LoadedLevel, LevelLoadError> {
    let source = fs::read_to_string(path).map_err(|source| LevelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    build_level(number, path, &source, exit_zones)
}

/// Load a catalog level by number
pub fn read_catalog_level(
    catalog: &LevelCatalog,
    number: u32,
    assets_root: &Path,
) -> Result<LoadedLevel, LevelLoadError> {
    let def = catalog
        .get(number)
        .ok_or(LevelLoadError::UnknownLevel(number))?;
    read_level(number, &assets_root.join(&def.map), def.exit_zones.clone())
}

/// Level number taken from the digits of a file name, e.g. `level-3.properties` is 3.
/// Only the final path component is considered.
pub fn level_number_from_path(path: &Path) -> Option<u32> {
    let digits: String = path
        .file_name()?
        .to_string_lossy()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Work out which level a request refers to and load it.
///
/// `Advance` keeps the player's lives; every other request starts fresh.
/// External files take their level number from the file name, falling back
/// to the current level.
pub fn load_requested_level(
    request: &LevelRequest,
    catalog: &LevelCatalog,
    active: &ActiveLevel,
    current_level: u32,
    assets_root: &Path,
) -> (Result<LoadedLevel, LevelLoadError>, LoadMode) {
    match request {
        LevelRequest::Advance { level } => (
            read_catalog_level(catalog, *level, assets_root),
            LoadMode::Continue,
        ),
        LevelRequest::Restart => {
            let first = catalog.first_level().unwrap_or(1);
            (
                read_catalog_level(catalog, first, assets_root),
                LoadMode::Fresh,
            )
        }
        LevelRequest::ReloadCurrent => {
            let result = match &active.path {
                Some(path) => read_level(active.number, path, active.exit_zones.clone()),
                None => read_catalog_level(catalog, current_level, assets_root),
            };
            (result, LoadMode::Fresh)
        }
        LevelRequest::Reload { path } => {
            let number = level_number_from_path(path).unwrap_or(current_level);
            let zones = catalog
                .get(number)
                .map(|def| def.exit_zones.clone())
                .unwrap_or_default();
            (read_level(number, path, zones), LoadMode::Fresh)
        }
    }
}

/// A file dropped onto the window becomes a reload of that file.
/// Hover notifications are ignored.
pub fn dropped_level_request(event: &FileDragAndDrop) -> Option<LevelRequest> {
    match event {
        FileDragAndDrop::DroppedFile { path_buf, .. } => Some(LevelRequest::Reload {
            path: path_buf.clone(),
        }),
        FileDragAndDrop::HoveredFile { .. } | FileDragAndDrop::HoveredFileCanceled { .. } => None,
    }
}

/// Put the player at a loaded level's entry.
///
/// Both modes drop the key, speed bonus, and contact cooldowns. `Continue`
/// keeps the lives earned so far and only ends the damage flicker; `Fresh`
/// starts over with full lives.
pub fn apply_load(
    mode: LoadMode,
    player: &mut Player,
    vitals: &mut Vitals,
    cooldowns: &mut ContactCooldowns,
    origin: Vec2,
    defaults: &PlayerDefaults,
) {
    player.reset_for_level(origin, defaults);
    cooldowns.clear();
    match mode {
        LoadMode::Continue => vitals.damaged = false,
        LoadMode::Fresh => *vitals = Vitals::new(defaults.starting_lives, defaults.max_lives),
    }
}

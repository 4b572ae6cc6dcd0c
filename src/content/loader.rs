//! Loader for RON content files at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{GameplayDefaults, LevelCatalog};

/// Directory holding gameplay.ron and levels.ron, relative to the assets root
pub const DATA_DIR: &str = "assets/data";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from text.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_ron(&file_name, &contents)
}

/// Load gameplay.ron and levels.ron from `base_path`.
/// Returns errors for any files that fail to load.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(GameplayDefaults, LevelCatalog), Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let defaults = load_single_file::<GameplayDefaults>(&base_path.join("gameplay.ron"))
        .map_err(|e| errors.push(e))
        .ok();
    let catalog = load_single_file::<LevelCatalog>(&base_path.join("levels.ron"))
        .map_err(|e| errors.push(e))
        .ok();

    match (defaults, catalog) {
        (Some(defaults), Some(catalog)) => Ok((defaults, catalog)),
        _ => Err(errors),
    }
}

/// Load content, falling back to built-in defaults for anything that fails.
pub fn load_content_or_default(base_path: &Path) -> (GameplayDefaults, LevelCatalog) {
    match load_all_content(base_path) {
        Ok(content) => content,
        Err(errors) => {
            for error in &errors {
                error!("{}", error);
            }
            warn!("Falling back to built-in gameplay defaults and level list");
            (
                load_single_file(&base_path.join("gameplay.ron")).unwrap_or_default(),
                load_single_file(&base_path.join("levels.ron"))
                    .unwrap_or_else(|_| default_catalog()),
            )
        }
    }
}

/// Five sequential levels at assets/maps/level-N.properties
pub fn default_catalog() -> LevelCatalog {
    LevelCatalog {
        levels: (1..=5)
            .map(|number| super::data::LevelDef {
                number,
                map: format!("maps/level-{}.properties", number),
                exit_zones: Vec::new(),
            })
            .collect(),
    }
}

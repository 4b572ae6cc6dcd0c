//! Content domain: gameplay tuning and the level catalog, loaded from RON at startup.

mod data;
mod loader;
mod validation;


pub use data::*;
pub use loader::{ContentLoadError, DATA_DIR, default_catalog, load_content_or_default, parse_ron};
pub use validation::{ValidationError, validate_catalog, validate_defaults};

use bevy::prelude::*;
use std::path::Path;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let (defaults, catalog) = load_content_or_default(Path::new(DATA_DIR));

        let problems: Vec<ValidationError> = validate_defaults(&defaults)
            .into_iter()
            .chain(validate_catalog(&catalog))
            .collect();
        for problem in &problems {
            warn!("[CONTENT] {}", problem);
        }

        info!(
            "[CONTENT] Loaded {} levels (tile size {}, {} lives)",
            catalog.levels.len(),
            defaults.tile_size,
            defaults.player.starting_lives
        );

        app.insert_resource(defaults).insert_resource(catalog);
    }
}

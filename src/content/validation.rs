//! Sanity checks for loaded tuning values and the level catalog.

use std::collections::HashSet;

use super::data::*;

/// A validation problem with context about where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid '{}': {}",
            self.source_type, self.source_id, self.field, self.problem
        )
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $cond:expr, $source_type:expr, $source_id:expr, $field:expr, $problem:expr) => {
        if !$cond {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                problem: $problem.to_string(),
            });
        }
    };
}

fn is_chance(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Validate gameplay tuning.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_defaults(defaults: &GameplayDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let id = "gameplay";

    check!(errors, defaults.tile_size > 0.0, "Gameplay", id, "tile_size", "must be positive");
    check!(errors, defaults.player.speed > 0.0, "Gameplay", id, "player.speed", "must be positive");
    check!(
        errors,
        defaults.player.starting_lives > 0,
        "Gameplay",
        id,
        "player.starting_lives",
        "must be at least 1"
    );
    check!(
        errors,
        defaults.player.max_lives >= defaults.player.starting_lives,
        "Gameplay",
        id,
        "player.max_lives",
        "must not be below starting_lives"
    );
    check!(
        errors,
        defaults.collision.left < defaults.collision.right,
        "Gameplay",
        id,
        "collision",
        "left inset must be left of right inset"
    );
    check!(
        errors,
        defaults.collision.bottom < defaults.collision.top,
        "Gameplay",
        id,
        "collision",
        "bottom inset must be below top inset"
    );
    check!(
        errors,
        is_chance(defaults.pickups.heart_chance),
        "Gameplay",
        id,
        "pickups.heart_chance",
        "must be within 0..=1"
    );
    check!(
        errors,
        is_chance(defaults.pickups.lemon_chance),
        "Gameplay",
        id,
        "pickups.lemon_chance",
        "must be within 0..=1"
    );
    check!(
        errors,
        defaults.enemies.step_interval_ms > 0,
        "Gameplay",
        id,
        "enemies.step_interval_ms",
        "must be positive"
    );

    errors
}

/// Validate the level catalog.
/// Level numbers must be unique and form a contiguous run starting at 1.
pub fn validate_catalog(catalog: &LevelCatalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(errors, !catalog.levels.is_empty(), "Catalog", "levels", "levels", "no levels listed");

    let mut seen = HashSet::new();
    for level in &catalog.levels {
        let id = level.number;
        check!(errors, seen.insert(id), "Level", id, "number", "listed more than once");
        check!(errors, !level.map.trim().is_empty(), "Level", id, "map", "path is empty");

        for zone in &level.exit_zones {
            check!(
                errors,
                zone.min.x <= zone.max.x && zone.min.y <= zone.max.y,
                "Level",
                id,
                "exit_zones",
                format!("zone min {:?} lies beyond max {:?}", zone.min, zone.max)
            );
        }
    }

    for expected in 1..=catalog.levels.len() as u32 {
        check!(
            errors,
            seen.contains(&expected),
            "Catalog",
            "levels",
            "number",
            format!("level {} is missing", expected)
        );
    }

    errors
}

//! Grid domain: parsing of sparse `x,y -> tile code` level listings.
//!
//! Two source shapes are accepted:
//! - property listings, one `x,y=code` per line (`:` also separates, `#`/`!` start comments)
//! - a JSON object such as `{"0,0": 1, "5,5": 2}`

use std::collections::BTreeMap;

use bevy::prelude::*;
use thiserror::Error;

use crate::grid::tile::TileKind;

/// Largest accepted coordinate + 1 on either axis
pub const MAX_GRID_EXTENT: i32 = 1024;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("line {line}: expected `x,y=code`, found {text:?}")]
    MalformedEntry { line: usize, text: String },
    #[error("bad coordinate key {key:?}")]
    BadCoordinate { key: String },
    #[error("coordinate {key:?} exceeds the {}-tile limit", MAX_GRID_EXTENT)]
    CoordinateTooLarge { key: String },
    #[error("tile code {value:?} at {key:?} is not an integer")]
    BadCode { key: String, value: String },
    #[error("unknown tile code {code} at {key:?}")]
    UnknownTile { key: String, code: i64 },
    #[error("level data contains no tiles")]
    Empty,
    #[error("invalid JSON level data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tile assignments as read from a level source, in source order.
/// Later entries for the same cell win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelLayout {
    entries: Vec<(IVec2, TileKind)>,
}

impl LevelLayout {
    #[cfg(test)]
    pub fn from_entries(entries: impl IntoIterator<Item = (IVec2, TileKind)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Parse either supported shape, picking JSON when the source opens with `{`
    pub fn parse(source: &str) -> Result<Self, LayoutError> {
        if source.trim_start().starts_with('{') {
            Self::parse_json(source)
        } else {
            Self::parse_properties(source)
        }
    }

    pub fn parse_properties(source: &str) -> Result<Self, LayoutError> {
        let mut entries = Vec::new();

        for (index, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let Some(split) = line.find(['=', ':']) else {
                return Err(LayoutError::MalformedEntry {
                    line: index + 1,
                    text: line.to_string(),
                });
            };
            let key = line[..split].trim();
            let value = line[split + 1..].trim();

            let position = parse_key(key)?;
            let code: i64 = value.parse().map_err(|_| LayoutError::BadCode {
                key: key.to_string(),
                value: value.to_string(),
            })?;
            entries.push((position, tile_for_code(key, code)?));
        }

        if entries.is_empty() {
            return Err(LayoutError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn parse_json(source: &str) -> Result<Self, LayoutError> {
        let raw: BTreeMap<String, i64> = serde_json::from_str(source)?;

        let entries = raw
            .iter()
            .map(|(key, &code)| Ok((parse_key(key)?, tile_for_code(key, code)?)))
            .collect::<Result<Vec<_>, LayoutError>>()?;

        if entries.is_empty() {
            return Err(LayoutError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(IVec2, TileKind)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Grid extents implied by the entries: highest coordinate + 1 on each axis
    pub fn extents(&self) -> IVec2 {
        if self.entries.is_empty() {
            return IVec2::ZERO;
        }
        self.entries
            .iter()
            .fold(IVec2::ZERO, |max, (pos, _)| max.max(*pos))
            + IVec2::ONE
    }
}

fn parse_key(key: &str) -> Result<IVec2, LayoutError> {
    let bad = || LayoutError::BadCoordinate {
        key: key.to_string(),
    };
    let (x, y) = key.split_once(',').ok_or_else(bad)?;
    let x: u16 = x.trim().parse().map_err(|_| bad())?;
    let y: u16 = y.trim().parse().map_err(|_| bad())?;
    let position = IVec2::new(i32::from(x), i32::from(y));
    if position.max_element() >= MAX_GRID_EXTENT {
        return Err(LayoutError::CoordinateTooLarge {
            key: key.to_string(),
        });
    }
    Ok(position)
}

fn tile_for_code(key: &str, code: i64) -> Result<TileKind, LayoutError> {
    i32::try_from(code)
        .ok()
        .and_then(TileKind::from_code)
        .ok_or_else(|| LayoutError::UnknownTile {
            key: key.to_string(),
            code,
        })
}

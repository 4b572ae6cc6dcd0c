//! Render domain: sprite markers, the tile palette, and the damage flicker.

use bevy::prelude::*;

use crate::grid::TileKind;

/// Sprite drawing one grid cell, recolored whenever the cell changes kind
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSprite {
    pub pos: IVec2,
    pub kind: TileKind,
}

pub fn tile_color(kind: TileKind) -> Color {
    match kind {
        TileKind::Floor => Color::srgb(0.16, 0.17, 0.2),
        TileKind::Wall => Color::srgb(0.25, 0.25, 0.35),
        TileKind::Entry => Color::srgb(0.2, 0.3, 0.25),
        TileKind::Exit => Color::srgb(0.4, 0.6, 0.9),
        TileKind::Trap => Color::srgb(0.6, 0.2, 0.2),
        TileKind::Enemy => Color::srgb(0.85, 0.35, 0.3),
        TileKind::Key => Color::srgb(0.95, 0.8, 0.2),
        TileKind::Heart => Color::srgb(0.9, 0.3, 0.5),
        TileKind::Lemon => Color::srgb(0.8, 0.95, 0.3),
    }
}

/// Center of a tile in world units
pub fn tile_center(pos: IVec2, tile_size: f32) -> Vec2 {
    (pos.as_vec2() + Vec2::splat(0.5)) * tile_size
}

/// Blink phase: visible during even periods, hidden during odd ones
pub fn flicker_visible(elapsed: f32, period: f32) -> bool {
    if period <= 0.0 {
        return true;
    }
    (elapsed / period) as u32 % 2 == 0
}

/// Frame result of advancing the flicker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlickerFrame {
    pub visible: bool,
    pub finished: bool,
}

/// Blink timer for the player sprite after taking damage
#[derive(Component, Debug, Default)]
pub struct DamageFlicker {
    pub elapsed: f32,
}

impl DamageFlicker {
    pub fn advance(&mut self, dt: f32, duration: f32, period: f32) -> FlickerFrame {
        self.elapsed += dt;
        if self.elapsed >= duration {
            self.elapsed = 0.0;
            return FlickerFrame {
                visible: true,
                finished: true,
            };
        }
        FlickerFrame {
            visible: flicker_visible(self.elapsed, period),
            finished: false,
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

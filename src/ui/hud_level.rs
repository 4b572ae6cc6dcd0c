//! UI domain: level number, keys collected, elapsed time, and load errors.

use bevy::prelude::*;

use crate::core::LevelClock;
use crate::levels::{LevelSession, LevelStatus};
use crate::ui::hud_player::{HUD_PADDING, LIFE_SLOT_SIZE};

/// Marker for the level/keys text under the lives row
#[derive(Component)]
pub struct LevelText;

/// Marker for the elapsed-time overlay shown while TAB is held
#[derive(Component)]
pub struct ElapsedTimeText;

/// Marker for the level load error banner
#[derive(Component)]
pub struct LoadErrorText;

/// Format seconds as `mm:ss`
pub fn format_elapsed(seconds: f32) -> String {
    let total = seconds.max(0.0) as u32;
    format!("{:02}:{:02}", total / 60, total % 60)
}

pub(crate) fn spawn_level_hud(mut commands: Commands) {
    // Below the lives row
    commands.spawn((
        LevelText,
        Text::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.85, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING + LIFE_SLOT_SIZE + 8.0),
            ..default()
        },
    ));

    commands.spawn((
        ElapsedTimeText,
        Text::new(""),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        Visibility::Hidden,
    ));

    commands.spawn((
        LoadErrorText,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.4, 0.4)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            bottom: Val::Px(HUD_PADDING),
            ..default()
        },
        ZIndex(50),
    ));
}

pub(crate) fn update_level_hud(
    session: Res<LevelSession>,
    mut query: Query<&mut Text, With<LevelText>>,
) {
    if session.is_changed() {
        for mut text in &mut query {
            **text = format!(
                "Level {}/{}  Keys {}",
                session.level, session.last_level, session.keys_collected
            );
        }
    }
}

pub(crate) fn update_elapsed_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    clock: Res<LevelClock>,
    session: Res<LevelSession>,
    mut query: Query<(&mut Text, &mut Visibility), With<ElapsedTimeText>>,
) {
    let held = keyboard.pressed(KeyCode::Tab);
    for (mut text, mut visibility) in &mut query {
        if held {
            **text = format!("Level {}  {}", session.level, format_elapsed(clock.elapsed));
            *visibility = Visibility::Inherited;
        } else {
            *visibility = Visibility::Hidden;
        }
    }
}

pub(crate) fn update_load_error(
    status: Res<LevelStatus>,
    mut query: Query<&mut Text, With<LoadErrorText>>,
) {
    if status.is_changed() {
        for mut text in &mut query {
            **text = status.last_error.clone().unwrap_or_default();
        }
    }
}

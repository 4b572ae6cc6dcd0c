//! UI domain: game over and victory screens with the restart flow.

use bevy::prelude::*;

use crate::core::{GameState, LevelRequest};
use crate::levels::LevelSession;

/// Marker for the end-of-run overlay
#[derive(Component)]
pub struct EndScreenUI;

/// Marker for the restart button on the end screen
#[derive(Component)]
pub struct RestartButton;

/// Title, subtitle, and title color for a terminal state
pub fn end_screen_copy(state: &GameState, level: u32) -> Option<(String, String, Color)> {
    match state {
        GameState::GameOver => Some((
            "GAME OVER".to_string(),
            format!("Out of lives on level {}", level),
            Color::srgb(0.8, 0.15, 0.15),
        )),
        GameState::Victory => Some((
            "YOU ESCAPED".to_string(),
            format!("All {} levels cleared", level),
            Color::srgb(0.95, 0.8, 0.2),
        )),
        GameState::Boot | GameState::Playing => None,
    }
}

pub(crate) fn spawn_end_screen(
    mut commands: Commands,
    state: Res<State<GameState>>,
    session: Res<LevelSession>,
) {
    let Some((title, subtitle, title_color)) = end_screen_copy(state.get(), session.level) else {
        return;
    };

    // Full screen dark overlay
    commands
        .spawn((
            EndScreenUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(subtitle),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            parent
                .spawn((
                    RestartButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
                    BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
                ))
                .with_child((
                    Text::new("PLAY AGAIN"),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));

            parent.spawn((
                Text::new("Press [Enter] or [R] to start over"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.4, 0.45)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn despawn_end_screen(mut commands: Commands, query: Query<Entity, With<EndScreenUI>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_restart_button(
    button_query: Query<&Interaction, (With<RestartButton>, Changed<Interaction>)>,
    mut requests: MessageWriter<LevelRequest>,
) {
    if button_query
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed)
    {
        info!("[TRANSITION] Restart requested from end screen");
        requests.write(LevelRequest::Restart);
    }
}

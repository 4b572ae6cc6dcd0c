//! UI domain: player HUD with lives and the key indicator.

use bevy::prelude::*;

use crate::combat::Vitals;
use crate::content::GameplayDefaults;
use crate::movement::Player;

pub(crate) const HUD_PADDING: f32 = 16.0;
pub(crate) const LIFE_SLOT_SIZE: f32 = 20.0;

const LIFE_FULL: Color = Color::srgb(0.9, 0.3, 0.5);
const LIFE_EMPTY: Color = Color::srgba(0.1, 0.1, 0.1, 0.8);
const KEY_HELD: Color = Color::srgb(0.95, 0.8, 0.2);
const KEY_MISSING: Color = Color::srgba(0.3, 0.3, 0.3, 0.8);

/// Marker for one life slot, indexed from the left
#[derive(Component)]
pub struct LifeSlot(pub i32);

/// Marker for the lives count text
#[derive(Component)]
pub struct LivesText;

/// Marker for the key indicator square
#[derive(Component)]
pub struct KeyIndicator;

/// Whether the slot at `index` shows a remaining life
pub fn life_slot_filled(index: i32, lives: i32) -> bool {
    index < lives
}

pub(crate) fn spawn_player_hud(mut commands: Commands, defaults: Res<GameplayDefaults>) {
    let max_lives = defaults.player.max_lives;

    // Root container positioned at top-left
    commands
        .spawn((Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(6.0),
            ..default()
        },))
        .with_children(|parent| {
            for index in 0..max_lives {
                parent.spawn((
                    LifeSlot(index),
                    Node {
                        width: Val::Px(LIFE_SLOT_SIZE),
                        height: Val::Px(LIFE_SLOT_SIZE),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(LIFE_FULL),
                    BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                ));
            }

            parent.spawn((
                LivesText,
                Text::new(format!("{}", max_lives)),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.85)),
            ));

            // Key icon, lit while the player holds the key
            parent.spawn((
                KeyIndicator,
                Node {
                    width: Val::Px(16.0),
                    height: Val::Px(16.0),
                    margin: UiRect::left(Val::Px(12.0)),
                    ..default()
                },
                BackgroundColor(KEY_MISSING),
            ));
        });
}

pub(crate) fn update_player_hud(
    player_query: Query<(&Player, &Vitals)>,
    mut slots: Query<(&LifeSlot, &mut BackgroundColor), Without<KeyIndicator>>,
    mut lives_text: Query<&mut Text, With<LivesText>>,
    mut key_query: Query<&mut BackgroundColor, (With<KeyIndicator>, Without<LifeSlot>)>,
) {
    let Ok((player, vitals)) = player_query.single() else {
        return;
    };

    for (slot, mut bg_color) in &mut slots {
        bg_color.0 = if life_slot_filled(slot.0, vitals.lives) {
            LIFE_FULL
        } else {
            LIFE_EMPTY
        };
    }

    for mut text in &mut lives_text {
        let lives = format!("{}", vitals.lives);
        if text.as_str() != lives {
            **text = lives;
        }
    }

    for mut bg_color in &mut key_query {
        bg_color.0 = if player.has_key { KEY_HELD } else { KEY_MISSING };
    }
}

mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod enemies;
mod grid;
mod interactions;
mod levels;
mod movement;
mod render;
mod ui;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Maze Runner".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    // Content first: later plugins read the loaded defaults and catalog at build time
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        grid::GridPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        enemies::EnemiesPlugin,
        interactions::InteractionsPlugin,
        levels::LevelsPlugin,
        render::RenderPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}

mod content;
mod core;
mod interactables;
mod levels;
mod lifecycle;
mod movement;
mod schedule;
mod ui;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Corpse Trail".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            schedule::SchedulePlugin,
            movement::MovementPlugin,
            lifecycle::LifecyclePlugin,
            interactables::InteractablesPlugin,
            levels::LevelsPlugin,
            ui::UiPlugin,
        ))
        .run();
}

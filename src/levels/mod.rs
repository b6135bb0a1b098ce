//! Levels domain: spawning a level from content and tearing it down again.

mod components;
mod layout;
mod spawn;
mod systems;
#[cfg(test)]
mod tests;

pub use components::LevelEntity;

use bevy::prelude::*;

use crate::core::GameState;
use crate::levels::spawn::spawn_current_level;
use crate::levels::systems::cleanup_level;
use crate::schedule::flush_deferred_actions;

pub struct LevelsPlugin;

impl Plugin for LevelsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_current_level)
            .add_systems(
                OnExit(GameState::Playing),
                cleanup_level.after(flush_deferred_actions),
            );
    }
}

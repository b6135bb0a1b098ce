//! Schedule domain: deferred one-shot actions advanced by frame time.

mod queue;
mod systems;
#[cfg(test)]
mod tests;

pub use queue::{DeferredAction, DeferredQueue};
pub(crate) use systems::{flush_deferred_actions, run_deferred_actions};

use bevy::prelude::*;

use crate::core::{GameState, GameplaySet};

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DeferredQueue>()
            .add_systems(
                Update,
                run_deferred_actions.in_set(GameplaySet::Sense),
            )
            .add_systems(OnExit(GameState::Playing), flush_deferred_actions);
    }
}

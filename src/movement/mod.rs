//! Movement domain: physics layers, input, grounded probes, walking and jumping.

mod components;
mod probes;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{EntityKind, GameLayer, Player};
pub use probes::{is_grounded, planar_velocity, probe_origins};
pub use resources::{PlayerInput, PlayerTuning};

use bevy::prelude::*;

use crate::core::{GameState, GameplaySet};
use crate::movement::systems::{apply_jump, apply_planar_movement, detect_ground, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .init_resource::<PlayerInput>()
            .add_systems(Update, read_input.in_set(GameplaySet::Input))
            .add_systems(Update, detect_ground.in_set(GameplaySet::Sense))
            .add_systems(Update, apply_jump.in_set(GameplaySet::React))
            .add_systems(
                FixedUpdate,
                apply_planar_movement.run_if(in_state(GameState::Playing)),
            );
    }
}

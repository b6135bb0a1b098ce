//! Interactables domain: collectibles, buttons, doors, spawn points, hazards,
//! panners and the level goal, all driven by typed trigger contacts.

mod components;
mod contacts;
mod events;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    ButtonSwitch, Collectible, Door, Hazard, HazardScroll, LevelGoal, Panner, ReportsStay,
    SpawnPoint, Spin,
};
pub use events::{ActivationSignal, TriggerContact};

use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::interactables::contacts::translate_contacts;
use crate::interactables::systems::{
    apply_activation_signals, handle_buttons, handle_collectible_pickups, handle_doors,
    handle_hazards, handle_level_goal, handle_spawn_points, move_panners, scroll_hazards,
    spin_entities,
};

pub struct InteractablesPlugin;

impl Plugin for InteractablesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<TriggerContact>()
            .add_message::<ActivationSignal>()
            .add_systems(Update, translate_contacts.in_set(GameplaySet::Sense))
            .add_systems(
                Update,
                (
                    handle_collectible_pickups,
                    handle_buttons,
                    handle_doors,
                    handle_spawn_points,
                    handle_hazards,
                    handle_level_goal,
                )
                    .in_set(GameplaySet::React),
            )
            .add_systems(
                Update,
                apply_activation_signals.in_set(GameplaySet::Resolve),
            )
            .add_systems(
                Update,
                (move_panners, spin_entities, scroll_hazards).in_set(GameplaySet::Present),
            );
    }
}

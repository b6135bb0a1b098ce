//! Core domain: game state flow, level transitions, and camera setup.

mod events;
mod resources;
mod sets;
mod state;
mod systems;

pub use events::LoadLevelEvent;
pub use resources::CurrentLevel;
pub use sets::GameplaySet;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{finish_loading, handle_load_level, setup_camera, transition_to_title};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<CurrentLevel>()
            .add_message::<LoadLevelEvent>()
            .configure_sets(
                Update,
                (
                    GameplaySet::Input,
                    GameplaySet::Sense,
                    GameplaySet::React,
                    GameplaySet::Resolve,
                    GameplaySet::Present,
                )
                    .chain(),
            )
            .configure_sets(Update, GameplaySet::Sense.run_if(in_state(GameState::Playing)))
            .configure_sets(Update, GameplaySet::React.run_if(in_state(GameState::Playing)))
            .configure_sets(
                Update,
                GameplaySet::Resolve.run_if(in_state(GameState::Playing)),
            )
            .configure_sets(
                Update,
                GameplaySet::Present.run_if(in_state(GameState::Playing)),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Boot), transition_to_title)
            .add_systems(OnEnter(GameState::Loading), finish_loading)
            .add_systems(Update, handle_load_level.after(GameplaySet::Present));
    }
}

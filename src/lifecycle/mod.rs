//! Lifecycle domain: countdown timer, jump charges, fake deaths, corpse trail.

mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
mod systems;

pub use components::{BodyColor, CorpseTrail, LifePhase, PlayerLife};
pub use events::{DeathCause, PlayerDiedEvent};
pub use resources::{BodyMesh, ColorRng};

use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::lifecycle::systems::{apply_fake_deaths, setup_body_mesh, tick_life_timers};

pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ColorRng>()
            .add_message::<PlayerDiedEvent>()
            .add_systems(Startup, setup_body_mesh)
            .add_systems(
                Update,
                (tick_life_timers, apply_fake_deaths)
                    .chain()
                    .in_set(GameplaySet::Resolve),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::debug_hotkeys.in_set(GameplaySet::React));
    }
}

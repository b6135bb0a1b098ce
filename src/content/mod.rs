//! Content domain: RON level data, gameplay defaults, and validation.

mod data;
mod loader;
mod registry;
mod validation;

pub use data::*;
pub use loader::load_all_content;
pub use registry::{ContentRegistry, builtin_level};
pub use validation::validate_content;

use bevy::prelude::*;
use std::path::Path;

use crate::lifecycle::ColorRng;
use crate::movement::PlayerTuning;

const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CollectibleKind>()
            .register_type::<HazardKind>()
            .add_systems(Startup, load_content);
    }
}

/// Load content at startup, falling back to built-in data on any error.
fn load_content(mut commands: Commands) {
    let (registry, defaults) = match load_all_content(Path::new(CONTENT_DIR)) {
        Ok(loaded) => loaded,
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            error!(
                "Content failed to load ({} errors), using built-in level and defaults",
                errors.len()
            );
            (ContentRegistry::builtin(), GameplayDefaults::default())
        }
    };

    for e in validate_content(&registry, &defaults) {
        warn!("Content validation: {}", e);
    }

    info!("{}", registry.summary());
    commands.insert_resource(PlayerTuning::from(&defaults.player));
    if let Some(seed) = defaults.color_seed {
        commands.insert_resource(ColorRng::seeded(seed));
    }
    commands.insert_resource(registry);
    commands.insert_resource(defaults);
}

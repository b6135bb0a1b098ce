//! Levels domain: teardown when leaving a level.

use bevy::prelude::*;

use crate::levels::components::LevelEntity;

/// Despawn everything the level spawned, corpses and player included.
pub(crate) fn cleanup_level(mut commands: Commands, query: Query<Entity, With<LevelEntity>>) {
    let mut count = 0;
    for entity in &query {
        // Flushed corpse despawns may already have claimed some of these
        commands.entity(entity).try_despawn();
        count += 1;
    }
    info!("Cleaned up {} level entities", count);
}

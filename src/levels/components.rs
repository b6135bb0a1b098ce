//! Levels domain: markers for level-owned entities.

use bevy::prelude::*;

/// Everything spawned for a level, despawned when the level is left
#[derive(Component, Debug, Default)]
pub struct LevelEntity;

/// Visual-only tile of a hazard grid
#[derive(Component, Debug)]
pub struct HazardTile;

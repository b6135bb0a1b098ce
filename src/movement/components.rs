//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, platforms, doors, panners and hazards
    Ground,
    /// Player character
    Player,
    /// Corpse markers left behind by fake deaths
    Corpse,
    /// Triggers (spawn points, buttons, collectibles, goal) - never block movement
    Sensor,
}

/// What an entity is, as seen by contact handlers.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Corpse,
    Scenery,
    SpawnPoint,
    Collectible,
    Button,
    Door,
    Panner,
    Hazard,
    Goal,
}

impl EntityKind {
    /// Player bodies and corpses hold buttons down.
    pub fn presses_buttons(self) -> bool {
        matches!(self, EntityKind::Player | EntityKind::Corpse)
    }
}

#[derive(Component, Debug)]
pub struct Player;

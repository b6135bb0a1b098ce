//! Lifecycle domain: fake death events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// The countdown timer ran out
    Timeout,
    /// The player asked for it
    Forced,
    /// Touched a hazard
    Hazard,
}

/// Request a fake death for `player`. Several in one frame collapse into one.
#[derive(Debug, Clone, Copy)]
pub struct PlayerDiedEvent {
    pub player: Entity,
    pub cause: DeathCause,
}

impl Message for PlayerDiedEvent {}

//! Interactables domain: typed contact and activation events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Enter,
    /// Sent every frame while overlapping, only for `ReportsStay` sources
    Stay,
    Exit,
}

/// `source` touched `other`. Sent once for each side of a collision pair
/// whose other side carries an `EntityKind`.
#[derive(Debug, Clone, Copy)]
pub struct TriggerContact {
    pub source: Entity,
    pub other: Entity,
    pub other_kind: EntityKind,
    pub phase: ContactPhase,
}

impl Message for TriggerContact {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Activate,
    Deactivate,
}

/// Sent by buttons, doors and event collectibles to each of their targets
#[derive(Debug, Clone, Copy)]
pub struct ActivationSignal {
    pub target: Entity,
    pub activation: Activation,
}

impl Message for ActivationSignal {}

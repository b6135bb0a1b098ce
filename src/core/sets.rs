//! Core domain: frame ordering for gameplay systems.

use bevy::prelude::*;

/// Per-frame gameplay phases, run in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    /// Sample devices into `PlayerInput`
    Input,
    /// Grounded probes, contact translation, due deferred actions
    Sense,
    /// Contact handlers and jumping
    React,
    /// Timers, fake deaths, activation signals
    Resolve,
    /// Panners, spinners, HUD
    Present,
}

//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Title,
    /// Transient state between two levels so `OnExit(Playing)` and
    /// `OnEnter(Playing)` both run when one level loads the next.
    Loading,
    Playing,
}

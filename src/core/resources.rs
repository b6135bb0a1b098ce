//! Core domain: shared resources for the level flow.

use bevy::prelude::*;

/// The level that `OnEnter(GameState::Playing)` will build.
#[derive(Resource, Debug, Default)]
pub struct CurrentLevel {
    pub level_id: Option<String>,
    /// Number of levels entered this session, including reloads
    pub levels_entered: u32,
}

impl CurrentLevel {
    pub fn set(&mut self, level_id: impl Into<String>) {
        self.level_id = Some(level_id.into());
        self.levels_entered += 1;
    }

    pub fn id(&self) -> Option<&str> {
        self.level_id.as_deref()
    }
}

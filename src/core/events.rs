//! Core domain: events for level flow.

use bevy::ecs::message::Message;

/// Request to load a level by id (title screen, level goal, debug warp)
#[derive(Debug, Clone)]
pub struct LoadLevelEvent {
    pub level_id: String,
}

impl Message for LoadLevelEvent {}

//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::PlayerDefaults;

/// Player tuning loaded from gameplay_defaults.ron.
#[derive(Resource, Debug, Clone)]
pub struct PlayerTuning {
    /// Seconds on a full timer
    pub respawn_time: f32,
    pub speed: f32,
    /// Upward velocity set by a jump
    pub jump_velocity: f32,
    pub corpse_limit: u32,
    pub jump_count: u32,
    /// Seconds after a jump before the grounded check may refill charges
    pub ground_rearm_delay: f32,
    /// Inset of the four corner probes from the footprint edge
    pub probe_inset: f32,
    /// How far below the feet a probe still counts as ground
    pub probe_reach: f32,
    pub grounded_speed_epsilon: f32,
    pub move_dead_zone: f32,
    /// Seconds an evicted corpse waits, stashed, before it is despawned
    pub corpse_despawn_delay: f32,
    pub corpse_stash: Vec3,
    /// Edge length of the player cube
    pub player_size: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self::from(&PlayerDefaults::default())
    }
}

impl From<&PlayerDefaults> for PlayerTuning {
    fn from(defaults: &PlayerDefaults) -> Self {
        Self {
            respawn_time: defaults.respawn_time.max(0.0),
            speed: defaults.speed,
            jump_velocity: defaults.jump_velocity,
            corpse_limit: defaults.corpse_limit,
            jump_count: defaults.jump_count,
            ground_rearm_delay: defaults.ground_rearm_delay,
            probe_inset: defaults.probe_inset,
            probe_reach: defaults.probe_reach,
            grounded_speed_epsilon: defaults.grounded_speed_epsilon,
            move_dead_zone: defaults.move_dead_zone,
            corpse_despawn_delay: defaults.corpse_despawn_delay,
            corpse_stash: Vec3::from_array(defaults.corpse_stash),
            player_size: defaults.player_size,
        }
    }
}

impl PlayerTuning {
    pub fn half_extent(&self) -> f32 {
        self.player_size * 0.5
    }

    /// Ray length for each grounded probe, measured from the player's center.
    pub fn probe_distance(&self) -> f32 {
        self.half_extent() + self.probe_reach
    }
}

#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    /// x: right, y: forward
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub force_death_just_pressed: bool,
}

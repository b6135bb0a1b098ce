//! Serde shapes of levels.ron and gameplay_defaults.ron.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// List file wrapper
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    /// Where the player appears if no spawn point is bound
    pub start: [f32; 3],
    #[serde(default)]
    pub player: LevelPlayerOverrides,
    #[serde(default)]
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub spawn_points: Vec<SpawnPointDef>,
    #[serde(default)]
    pub collectibles: Vec<CollectibleDef>,
    #[serde(default)]
    pub buttons: Vec<ButtonDef>,
    #[serde(default)]
    pub doors: Vec<DoorDef>,
    #[serde(default)]
    pub panners: Vec<PannerDef>,
    #[serde(default)]
    pub hazards: Vec<HazardDef>,
    #[serde(default)]
    pub goal: Option<GoalDef>,
}

impl LevelDef {
    /// Returns true if a panner with this id exists in the level.
    pub fn has_panner(&self, panner_id: &str) -> bool {
        self.panners.iter().any(|p| p.id == panner_id)
    }
}

/// Per-level starting values for the player, overriding `PlayerDefaults`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LevelPlayerOverrides {
    #[serde(default)]
    pub respawn_time: Option<f32>,
    #[serde(default)]
    pub corpse_limit: Option<u32>,
    #[serde(default)]
    pub jump_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlatformDef {
    pub position: [f32; 3],
    pub size: [f32; 3],
    #[serde(default)]
    pub color: Option<[f32; 3]>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpawnPointDef {
    pub position: [f32; 3],
    #[serde(default = "default_pad_size")]
    pub size: [f32; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub enum CollectibleKind {
    /// Raises the corpse trail capacity
    Corpse,
    /// Raises the timer maximum and refills the current timer by the same amount
    Stopwatch,
    /// Raises the jump count and the available charges
    Jump,
    Key,
    /// No counter change; activates its targets
    Event,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectibleDef {
    pub kind: CollectibleKind,
    pub position: [f32; 3],
    #[serde(default = "default_amount")]
    pub amount: f32,
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f32,
    #[serde(default)]
    pub random_color: bool,
    /// Panner ids activated by `CollectibleKind::Event`
    #[serde(default)]
    pub targets: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ButtonDef {
    pub position: [f32; 3],
    #[serde(default = "default_pad_size")]
    pub size: [f32; 3],
    pub targets: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DoorDef {
    pub position: [f32; 3],
    pub size: [f32; 3],
    pub targets: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PannerDef {
    pub id: String,
    pub position: [f32; 3],
    pub size: [f32; 3],
    pub offset: [f32; 3],
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
    #[serde(default = "default_active_cost")]
    pub active_cost: u32,
    #[serde(default)]
    pub color: Option<[f32; 3]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub enum HazardKind {
    Lava,
    Spikes,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HazardDef {
    pub kind: HazardKind,
    /// Center of the tile grid
    pub position: [f32; 3],
    pub tile_size: [f32; 3],
    #[serde(default = "default_grid_extent")]
    pub width: u32,
    #[serde(default = "default_grid_extent")]
    pub height: u32,
    /// UV scroll rate; None disables scrolling
    #[serde(default)]
    pub scroll: Option<[f32; 2]>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoalDef {
    pub position: [f32; 3],
    pub next_level: String,
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f32,
}

fn default_pad_size() -> [f32; 3] {
    [1.5, 0.2, 1.5]
}

fn default_amount() -> f32 {
    1.0
}

fn default_rotation_speed() -> f32 {
    90.0
}

fn default_move_speed() -> f32 {
    1.0
}

fn default_active_cost() -> u32 {
    1
}

fn default_grid_extent() -> u32 {
    1
}

// ============================================================================
// Gameplay Defaults (gameplay_defaults.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub first_level: String,
    /// Seed for body colors; None draws a fresh seed each session
    #[serde(default)]
    pub color_seed: Option<u64>,
    #[serde(default = "default_title_rotate_amount")]
    pub title_rotate_amount: f32,
    #[serde(default)]
    pub player: PlayerDefaults,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: 1,
            first_level: "level_0".to_string(),
            color_seed: None,
            title_rotate_amount: default_title_rotate_amount(),
            player: PlayerDefaults::default(),
        }
    }
}

fn default_title_rotate_amount() -> f32 {
    15.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerDefaults {
    pub respawn_time: f32,
    pub speed: f32,
    pub jump_velocity: f32,
    pub corpse_limit: u32,
    pub jump_count: u32,
    pub ground_rearm_delay: f32,
    pub probe_inset: f32,
    pub probe_reach: f32,
    pub grounded_speed_epsilon: f32,
    pub move_dead_zone: f32,
    pub corpse_despawn_delay: f32,
    pub corpse_stash: [f32; 3],
    pub player_size: f32,
}

impl Default for PlayerDefaults {
    fn default() -> Self {
        Self {
            respawn_time: 15.0,
            speed: 6.0,
            jump_velocity: 7.0,
            corpse_limit: 0,
            jump_count: 1,
            ground_rearm_delay: 0.02,
            probe_inset: 0.02,
            probe_reach: 0.2,
            grounded_speed_epsilon: 0.05,
            move_dead_zone: 0.1,
            corpse_despawn_delay: 0.1,
            corpse_stash: [-1000.0, -1000.0, -1000.0],
            player_size: 1.0,
        }
    }
}

//! Level lookup by id, plus the built-in fallback level.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Every loaded level, by id and in file order.
#[derive(Resource, Default)]
pub struct ContentRegistry {
    pub levels: HashMap<String, LevelDef>,
    /// Level ids in file order, for debug warps
    pub level_order: Vec<String>,
}

impl ContentRegistry {
    pub fn insert_level(&mut self, level: LevelDef) {
        if !self.levels.contains_key(&level.id) {
            self.level_order.push(level.id.clone());
        }
        self.levels.insert(level.id.clone(), level);
    }

    pub fn level(&self, level_id: &str) -> Option<&LevelDef> {
        self.levels.get(level_id)
    }

    /// Returns the level after `level_id` in file order, wrapping around.
    pub fn level_after(&self, level_id: &str) -> Option<&str> {
        let index = self.level_order.iter().position(|id| id == level_id)?;
        let next = (index + 1) % self.level_order.len();
        self.level_order.get(next).map(String::as_str)
    }

    /// One-line description of what was loaded.
    pub fn summary(&self) -> String {
        let collectibles: usize = self.levels.values().map(|l| l.collectibles.len()).sum();
        let panners: usize = self.levels.values().map(|l| l.panners.len()).sum();
        format!(
            "ContentRegistry loaded: {} levels, {} collectibles, {} panners",
            self.levels.len(),
            collectibles,
            panners
        )
    }

    /// Registry with a single built-in level, used when levels.ron is unusable.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        registry.insert_level(builtin_level());
        registry
    }
}

/// Small training level: a floor, a key, a door and a button-driven lift.
pub fn builtin_level() -> LevelDef {
    LevelDef {
        id: "level_0".to_string(),
        name: "Threshold".to_string(),
        start: [0.0, 1.0, 6.0],
        player: LevelPlayerOverrides::default(),
        platforms: vec![
            PlatformDef {
                position: [0.0, -0.5, 0.0],
                size: [16.0, 1.0, 16.0],
                color: None,
            },
            PlatformDef {
                position: [0.0, 3.5, -9.0],
                size: [6.0, 1.0, 4.0],
                color: None,
            },
        ],
        spawn_points: vec![SpawnPointDef {
            position: [0.0, 0.05, 6.0],
            size: [1.5, 0.2, 1.5],
        }],
        collectibles: vec![
            CollectibleDef {
                kind: CollectibleKind::Key,
                position: [-5.0, 0.8, 2.0],
                amount: 1.0,
                rotation_speed: 90.0,
                random_color: false,
                targets: Vec::new(),
            },
            CollectibleDef {
                kind: CollectibleKind::Corpse,
                position: [5.0, 0.8, 2.0],
                amount: 1.0,
                rotation_speed: 90.0,
                random_color: true,
                targets: Vec::new(),
            },
        ],
        buttons: vec![ButtonDef {
            position: [4.0, 0.05, -3.0],
            size: [1.5, 0.2, 1.5],
            targets: vec!["lift".to_string()],
        }],
        doors: vec![DoorDef {
            position: [0.0, 1.5, -4.0],
            size: [3.0, 3.0, 0.5],
            targets: vec!["gate".to_string()],
        }],
        panners: vec![
            PannerDef {
                id: "lift".to_string(),
                position: [-4.0, 0.0, -6.0],
                size: [2.0, 0.5, 2.0],
                offset: [0.0, 3.0, 0.0],
                move_speed: 0.5,
                active_cost: 1,
                color: None,
            },
            PannerDef {
                id: "gate".to_string(),
                position: [0.0, 3.0, -7.0],
                size: [2.0, 2.0, 0.5],
                offset: [0.0, -3.0, 0.0],
                move_speed: 1.0,
                active_cost: 1,
                color: None,
            },
        ],
        hazards: vec![HazardDef {
            kind: HazardKind::Lava,
            position: [6.0, 0.01, -6.0],
            tile_size: [1.0, 0.1, 1.0],
            width: 3,
            height: 2,
            scroll: Some([1.0, 1.0]),
        }],
        goal: Some(GoalDef {
            position: [0.0, 5.0, -9.0],
            next_level: "level_0".to_string(),
            rotation_speed: 45.0,
        }),
    }
}

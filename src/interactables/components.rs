//! Interactables domain: trigger and collectible components.

use bevy::prelude::*;

use crate::content::{CollectibleKind, HazardKind};
use crate::interactables::events::Activation;
use crate::lifecycle::PlayerLife;
use crate::movement::EntityKind;

/// Sensors that also want a contact every frame while something overlaps them
#[derive(Component, Debug, Default)]
pub struct ReportsStay;

/// A pickup consumed on first touch by the player
#[derive(Component, Debug, Clone)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub amount: f32,
    /// Panners activated by `CollectibleKind::Event`
    pub targets: Vec<Entity>,
}

/// Spins an entity about the world Y axis
#[derive(Component, Debug, Clone, Copy)]
pub struct Spin {
    pub degrees_per_sec: f32,
}

/// Pressure plate held down by the player or any corpse.
#[derive(Component, Debug, Default)]
pub struct ButtonSwitch {
    pub active: bool,
    pub targets: Vec<Entity>,
}

impl ButtonSwitch {
    pub fn new(targets: Vec<Entity>) -> Self {
        Self {
            active: false,
            targets,
        }
    }

    /// Contact began or continues. Returns Activate on the rising edge.
    pub fn press(&mut self, by: EntityKind) -> Option<Activation> {
        if self.active || !by.presses_buttons() {
            return None;
        }
        self.active = true;
        Some(Activation::Activate)
    }

    /// Contact ended. Returns Deactivate on the falling edge.
    ///
    /// Any presser leaving releases the button; if another presser is still on
    /// it, its next stay contact presses it again.
    pub fn release(&mut self, by: EntityKind) -> Option<Activation> {
        if !self.active || !by.presses_buttons() {
            return None;
        }
        self.active = false;
        Some(Activation::Deactivate)
    }
}

/// Locked door. Opens once for a player holding a key.
#[derive(Component, Debug)]
pub struct Door {
    pub enabled: bool,
    pub targets: Vec<Entity>,
}

impl Door {
    pub fn new(targets: Vec<Entity>) -> Self {
        Self {
            enabled: true,
            targets,
        }
    }

    /// Open with one of the player's keys. A disabled door or an empty key
    /// ring leaves everything unchanged.
    pub fn try_open(&mut self, life: &mut PlayerLife) -> bool {
        if !self.enabled || !life.spend_key() {
            return false;
        }
        self.enabled = false;
        true
    }
}

/// Checkpoint pad: binds respawns and holds the timer full while occupied
#[derive(Component, Debug, Default)]
pub struct SpawnPoint;

/// Kills the player on contact
#[derive(Component, Debug)]
pub struct Hazard {
    pub kind: HazardKind,
}

/// Scrolls a hazard's shared tile material
#[derive(Component, Debug)]
pub struct HazardScroll {
    pub rate: Vec2,
    pub offset: Vec2,
    pub material: Handle<StandardMaterial>,
}

impl HazardScroll {
    pub fn new(rate: Vec2, material: Handle<StandardMaterial>) -> Self {
        Self {
            rate,
            offset: Vec2::ZERO,
            material,
        }
    }

    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.offset += Vec2::new((self.rate.x * dt).sin(), (self.rate.y * dt).sin());
        self.offset
    }
}

/// The level's goal; touching it loads `next_level`
#[derive(Component, Debug)]
pub struct LevelGoal {
    pub next_level: String,
    pub reached: bool,
}

/// Slides between `start` and `start + offset` while enough activations are held.
#[derive(Component, Debug, Clone)]
pub struct Panner {
    pub start: Vec3,
    pub offset: Vec3,
    pub move_speed: f32,
    /// Activations needed to move toward the offset
    pub active_cost: u32,
    /// Signed: deactivations are counted even without a matching activation
    pub active: i32,
    /// Progress toward the offset, in [0, 1]
    pub delta: f32,
}

impl Panner {
    pub fn new(start: Vec3, offset: Vec3, move_speed: f32, active_cost: u32) -> Self {
        Self {
            start,
            offset,
            move_speed,
            active_cost,
            active: 0,
            delta: 0.0,
        }
    }

    pub fn apply(&mut self, activation: Activation) {
        match activation {
            Activation::Activate => self.active += 1,
            Activation::Deactivate => self.active -= 1,
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.active >= self.active_cost as i32
    }

    /// Advance progress by one frame and return the new local position.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        let step = self.move_speed * dt;
        self.delta = if self.is_engaged() {
            self.delta + step
        } else {
            self.delta - step
        }
        .clamp(0.0, 1.0);
        self.start.lerp(self.start + self.offset, self.delta)
    }
}

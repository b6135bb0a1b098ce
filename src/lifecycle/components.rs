//! Lifecycle domain: player life state, corpse trail, and body color.

use bevy::prelude::*;
use std::collections::VecDeque;

use crate::content::{CollectibleKind, LevelPlayerOverrides};
use crate::movement::PlayerTuning;

/// Whether the player is standing on something.
/// Respawning is instantaneous and never held as a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifePhase {
    Grounded,
    #[default]
    Airborne,
}

/// Result of advancing the countdown timer by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    Paused,
    Running,
    /// The timer hit zero; the caller must trigger a fake death
    Expired,
}

/// Counter change made by a collectible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickupEffect {
    CorpseLimitRaised { corpse_limit: u32 },
    TimerExtended { respawn_time: f32 },
    JumpsAdded { jump_count: u32 },
    KeyAdded { keys: u32 },
    /// No counters changed; the collectible's targets are signalled instead
    Signal,
}

/// Timer, jump charges, keys, and spawn binding for one player.
#[derive(Component, Debug, Clone)]
pub struct PlayerLife {
    /// Seconds left before a forced respawn, in [0, respawn_time]
    pub timer: f32,
    /// Timer maximum
    pub respawn_time: f32,
    pub timer_paused: bool,
    pub corpse_limit: u32,
    pub jump_count: u32,
    /// Charges left, in [0, jump_count]
    pub available_jumps: u32,
    pub keys: u32,
    /// Last spawn point touched. May outlive the entity; treat a failed lookup as unset.
    pub spawn_point: Option<Entity>,
    /// Respawn position when no spawn point is bound
    pub level_start: Vec3,
    /// Cleared when landing refills charges, set again shortly after a jump
    pub ground_check_armed: bool,
    pub phase: LifePhase,
}

impl PlayerLife {
    pub fn new(tuning: &PlayerTuning, overrides: &LevelPlayerOverrides, level_start: Vec3) -> Self {
        let respawn_time = overrides
            .respawn_time
            .unwrap_or(tuning.respawn_time)
            .max(0.0);
        let jump_count = overrides.jump_count.unwrap_or(tuning.jump_count);
        Self {
            timer: respawn_time,
            respawn_time,
            timer_paused: false,
            corpse_limit: overrides.corpse_limit.unwrap_or(tuning.corpse_limit),
            jump_count,
            available_jumps: jump_count,
            keys: 0,
            spawn_point: None,
            level_start,
            ground_check_armed: true,
            phase: LifePhase::default(),
        }
    }

    /// Count the timer down by `dt` seconds unless paused. Never goes below zero.
    pub fn tick(&mut self, dt: f32) -> TimerTick {
        if self.timer_paused {
            return TimerTick::Paused;
        }

        self.timer = (self.timer - dt).max(0.0);
        if self.timer <= 0.0 {
            TimerTick::Expired
        } else {
            TimerTick::Running
        }
    }

    pub fn refill_timer(&mut self) {
        self.timer = self.respawn_time;
    }

    /// Bind a new spawn point, then hold the timer full while standing on it.
    pub fn rest_at_spawn(&mut self, spawn_point: Entity) {
        self.spawn_point = Some(spawn_point);
        self.hold_at_spawn();
    }

    pub fn hold_at_spawn(&mut self) {
        self.timer_paused = true;
        self.refill_timer();
    }

    pub fn leave_spawn(&mut self) {
        self.timer_paused = false;
    }

    /// Refill jump charges on ground contact if the check is armed.
    /// Returns true if charges were refilled.
    pub fn land(&mut self) -> bool {
        if !self.ground_check_armed {
            return false;
        }
        self.available_jumps = self.jump_count;
        self.ground_check_armed = false;
        true
    }

    pub fn rearm_ground_check(&mut self) {
        self.ground_check_armed = true;
    }

    /// Spend one jump charge. With no charges left this does nothing, on the
    /// ground or in the air.
    pub fn try_jump(&mut self) -> bool {
        if self.available_jumps == 0 {
            return false;
        }
        self.available_jumps -= 1;
        true
    }

    /// Apply exactly one collectible effect, chosen by kind.
    pub fn apply_pickup(&mut self, kind: CollectibleKind, amount: f32) -> PickupEffect {
        match kind {
            CollectibleKind::Corpse => {
                self.corpse_limit += amount.max(0.0) as u32;
                PickupEffect::CorpseLimitRaised {
                    corpse_limit: self.corpse_limit,
                }
            }
            CollectibleKind::Stopwatch => {
                self.respawn_time = (self.respawn_time + amount).max(0.0);
                self.timer = (self.timer + amount).clamp(0.0, self.respawn_time);
                PickupEffect::TimerExtended {
                    respawn_time: self.respawn_time,
                }
            }
            CollectibleKind::Jump => {
                let added = amount.max(0.0) as u32;
                self.jump_count += added;
                self.available_jumps = (self.available_jumps + added).min(self.jump_count);
                PickupEffect::JumpsAdded {
                    jump_count: self.jump_count,
                }
            }
            CollectibleKind::Key => {
                self.keys += 1;
                PickupEffect::KeyAdded { keys: self.keys }
            }
            CollectibleKind::Event => PickupEffect::Signal,
        }
    }

    /// Spend one key if any are held.
    pub fn spend_key(&mut self) -> bool {
        if self.keys == 0 {
            return false;
        }
        self.keys -= 1;
        true
    }
}

/// Corpse markers left by this player, oldest first.
#[derive(Component, Debug, Default)]
pub struct CorpseTrail {
    corpses: VecDeque<Entity>,
}

impl CorpseTrail {
    /// Append a corpse, then evict oldest-first until the trail fits `limit`.
    /// Returns the evicted corpses in eviction order.
    pub fn push(&mut self, corpse: Entity, limit: u32) -> Vec<Entity> {
        self.corpses.push_back(corpse);

        let mut evicted = Vec::new();
        while self.corpses.len() > limit as usize {
            match self.corpses.pop_front() {
                Some(oldest) => evicted.push(oldest),
                None => break,
            }
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.corpses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpses.is_empty()
    }

    pub fn contains(&self, corpse: Entity) -> bool {
        self.corpses.contains(&corpse)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.corpses.iter()
    }
}

/// Marker for a corpse left behind by a fake death
#[derive(Component, Debug)]
pub struct Corpse;

/// The color the player's body is currently rendered with
#[derive(Component, Debug, Clone, Copy)]
pub struct BodyColor(pub Color);

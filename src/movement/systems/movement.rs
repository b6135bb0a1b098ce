//! Movement domain: walking on the fixed tick and jumping on the frame tick.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::lifecycle::PlayerLife;
use crate::movement::probes::planar_velocity;
use crate::movement::{Player, PlayerInput, PlayerTuning};
use crate::schedule::{DeferredAction, DeferredQueue};

pub(crate) fn apply_planar_movement(
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&mut Transform, &mut LinearVelocity), With<Player>>,
) {
    for (mut transform, mut velocity) in &mut query {
        let (new_velocity, facing) =
            planar_velocity(input.axis, tuning.speed, tuning.move_dead_zone, velocity.y);

        if let Some(direction) = facing {
            transform.look_to(direction, Vec3::Y);
        }
        velocity.0 = new_velocity;
    }
}

pub(crate) fn apply_jump(
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    mut queue: ResMut<DeferredQueue>,
    mut query: Query<(Entity, &mut PlayerLife, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (entity, mut life, mut velocity) in &mut query {
        if !life.try_jump() {
            continue;
        }

        queue.schedule_secs(
            tuning.ground_rearm_delay,
            DeferredAction::RearmGroundCheck { player: entity },
        );

        // Zero the fall speed so every jump reaches the same height
        velocity.y = 0.0;
        velocity.y += tuning.jump_velocity;

        debug!(
            "Jump: phase={:?}, charges remaining {}/{}",
            life.phase, life.available_jumps, life.jump_count
        );
        debug!("Sound cue: jump");
    }
}
